//! Error types for session creation and option validation
//!
//! This module defines the closed set of errors the add-on reports to its
//! callers. Every error carries a machine-readable kind tag alongside its
//! human-readable message, so bots can branch on the kind without matching
//! on message text.

use serde::Serialize;
use thiserror::Error;

/// Machine-readable tags for the errors in [`Error`]
///
/// The tags mirror the headers the chat platform surfaces to bot authors
/// and are stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The interaction that requested the game was not a command
    InvalidInteraction,
    /// The interaction carried no guild reference
    GuildNullish,
    /// The interaction carried no channel reference
    ChannelNullish,
    /// The interaction's channel cannot carry text messages
    ChannelNonText,
    /// A required game option was omitted
    MissingOption,
    /// A game option was present but unusable
    InvalidOption,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::InvalidInteraction => "INVALID_INTERACTION",
            Self::GuildNullish => "GUILD_NULLISH",
            Self::ChannelNullish => "CHANNEL_NULLISH",
            Self::ChannelNonText => "CHANNEL_NON_TEXT",
            Self::MissingOption => "MISSING_OPTION",
            Self::InvalidOption => "INVALID_OPTION",
        })
    }
}

/// Identifies a game option field in error messages
///
/// Displays as the camel-cased name bot authors supply over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionField {
    /// Fewest players required for the game to start
    MinimumPlayerCount,
    /// Most players the game will admit
    MaximumPlayerCount,
    /// Fewest points a correct answer can award
    MinimumPoints,
    /// Most points a correct answer can award
    MaximumPoints,
    /// Time players have to answer each question
    TimePerQuestion,
    /// Time the game waits for players to join
    QueueTime,
    /// Number of questions in the game
    QuestionAmount,
    /// Requested difficulty of the questions
    QuestionDifficulty,
    /// Requested answer format of the questions
    QuestionType,
}

impl std::fmt::Display for OptionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::MinimumPlayerCount => "minimumPlayerCount",
            Self::MaximumPlayerCount => "maximumPlayerCount",
            Self::MinimumPoints => "minimumPoints",
            Self::MaximumPoints => "maximumPoints",
            Self::TimePerQuestion => "timePerQuestion",
            Self::QueueTime => "queueTime",
            Self::QuestionAmount => "questionAmount",
            Self::QuestionDifficulty => "questionDifficulty",
            Self::QuestionType => "questionType",
        })
    }
}

/// Lower bound a numeric option is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Floor {
    /// A plain count, displayed bare
    Count(u64),
    /// A duration in milliseconds, displayed with a `ms` suffix
    Milliseconds(u64),
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Milliseconds(n) => write!(f, "{n}ms"),
        }
    }
}

/// Why a present option value was rejected
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The value is neither a number nor a string
    #[error("must be of type number or string")]
    NotNumeric,
    /// The value does not coerce to a number
    #[error("must be a number resolvable")]
    Unresolvable,
    /// The value coerces to a number with a fractional part
    #[error("must be a whole integer")]
    Fractional,
    /// The value is below the field's lower bound
    #[error("must be greater than or equal to {0}")]
    BelowFloor(Floor),
    /// The maximum of a range is below its minimum
    #[error("cannot be less than the {minimum} option")]
    LessThanMinimum {
        /// The minimum-side field of the violated range
        minimum: OptionField,
    },
    /// The value is not a string where one is required
    #[error("must be a string")]
    NotText,
    /// The string does not name any accepted choice
    #[error("({0}) is not a resolvable value")]
    Unrecognized(String),
}

/// Errors reported while creating or configuring a trivia game
///
/// The set is closed: callers exhaustively match on it, or branch on
/// [`Error::kind`] when only the tag matters. Validation is fail-fast, so
/// a single error describes the first problem found and nothing else.
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The game was requested through something other than a command
    #[error("supplied interaction must be an application command")]
    InvalidInteraction,
    /// The interaction carried no guild reference
    #[error("interaction has no associated guild")]
    GuildNullish,
    /// The interaction carried no channel reference
    #[error("interaction has no associated channel")]
    ChannelNullish,
    /// The interaction's channel cannot carry text messages
    #[error("game channel must be a text channel")]
    ChannelNonText,
    /// A required option was omitted or explicitly nulled
    #[error("a {field} option is required")]
    MissingOption {
        /// The omitted field
        field: OptionField,
    },
    /// An option was present but violated its field's rules
    #[error("the {field} option {violation}")]
    InvalidOption {
        /// The offending field
        field: OptionField,
        /// What the value did wrong
        violation: Violation,
    },
}

impl Error {
    /// Returns the machine-readable tag for this error
    ///
    /// # Returns
    ///
    /// The [`ErrorKind`] identifying this error without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInteraction => ErrorKind::InvalidInteraction,
            Self::GuildNullish => ErrorKind::GuildNullish,
            Self::ChannelNullish => ErrorKind::ChannelNullish,
            Self::ChannelNonText => ErrorKind::ChannelNonText,
            Self::MissingOption { .. } => ErrorKind::MissingOption,
            Self::InvalidOption { .. } => ErrorKind::InvalidOption,
        }
    }
}
