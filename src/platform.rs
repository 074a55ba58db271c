//! Chat platform abstractions for session creation
//!
//! This module models the slice of the host chat platform the add-on needs
//! to see: snowflake identifiers, channel capabilities, the interaction that
//! requested a game, and the display theme. The platform itself is reached
//! through the [`InteractionContext`] trait, which allows different bot
//! frameworks to plug in while the session logic stays the same.

use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// A unique identifier for a guild (server) on the chat platform
///
/// Snowflakes are 64-bit values but travel as decimal strings on the wire,
/// since common JSON consumers cannot represent them losslessly as numbers.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    DeserializeFromStr,
    SerializeDisplay,
    derive_more::From,
)]
pub struct GuildId(u64);

impl GuildId {
    /// Creates a guild ID from its raw snowflake value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw snowflake value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for GuildId {
    /// Formats the ID as a decimal snowflake string
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for GuildId {
    type Err = ParseIntError;

    /// Parses a guild ID from a decimal snowflake string
    ///
    /// # Errors
    ///
    /// Returns a `ParseIntError` if the string is not a valid u64.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A unique identifier for a channel on the chat platform
///
/// Channel IDs key the manager's session registry, since the platform
/// allows at most one running trivia game per channel.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    DeserializeFromStr,
    SerializeDisplay,
    derive_more::From,
)]
pub struct ChannelId(u64);

impl ChannelId {
    /// Creates a channel ID from its raw snowflake value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw snowflake value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ChannelId {
    /// Formats the ID as a decimal snowflake string
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ChannelId {
    type Err = ParseIntError;

    /// Parses a channel ID from a decimal snowflake string
    ///
    /// # Errors
    ///
    /// Returns a `ParseIntError` if the string is not a valid u64.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A unique identifier for a user on the chat platform
///
/// Players are tracked by their platform user ID; the add-on never invents
/// identifiers of its own.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    DeserializeFromStr,
    SerializeDisplay,
    derive_more::From,
)]
pub struct UserId(u64);

impl UserId {
    /// Creates a user ID from its raw snowflake value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw snowflake value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for UserId {
    /// Formats the ID as a decimal snowflake string
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    /// Parses a user ID from a decimal snowflake string
    ///
    /// # Errors
    ///
    /// Returns a `ParseIntError` if the string is not a valid u64.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// The kind of channel an interaction arrived in
///
/// Trivia games run on messages, so only kinds that can carry text are
/// eligible to host one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChannelKind {
    /// A standard text channel
    Text,
    /// A voice channel
    Voice,
    /// A category grouping other channels
    Category,
    /// An announcement (news) channel
    Announcement,
    /// A stage channel for live audio events
    Stage,
    /// A thread spawned from a message
    Thread,
}

impl ChannelKind {
    /// Whether channels of this kind can carry text messages
    ///
    /// # Returns
    ///
    /// `true` for text, announcement, and thread channels.
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::Announcement | Self::Thread)
    }
}

/// A channel reference as seen by the session factory
///
/// Only the identity and the kind matter here; everything else about the
/// platform channel stays on the platform's side of the seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel {
    /// The channel's snowflake
    pub id: ChannelId,
    /// What kind of channel it is
    pub kind: ChannelKind,
}

impl Channel {
    /// Whether this channel can carry text messages
    pub fn is_text(self) -> bool {
        self.kind.is_text()
    }
}

/// The kind of interaction that reached the bot
///
/// Games may only be requested through application commands; the other
/// kinds exist so implementors can report what they actually received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionKind {
    /// A slash command invocation
    Command,
    /// A button press on a message component
    Button,
    /// A selection in a select menu component
    SelectMenu,
    /// A modal dialog submission
    Modal,
    /// An autocomplete request while typing a command
    Autocomplete,
}

impl InteractionKind {
    /// Whether this interaction is an application command
    pub fn is_command(self) -> bool {
        matches!(self, Self::Command)
    }
}

/// Trait for reading the platform interaction that requested a game
///
/// This trait abstracts over the interaction object of whichever bot
/// framework hosts the add-on. Implementations surface only what session
/// creation needs to check; the interaction's reply machinery, member
/// objects, and payloads stay outside.
pub trait InteractionContext {
    /// The kind of interaction this is
    fn kind(&self) -> InteractionKind;

    /// The guild the interaction happened in
    ///
    /// # Returns
    ///
    /// The guild's ID, or `None` for interactions outside a guild
    /// (such as direct messages).
    fn guild_id(&self) -> Option<GuildId>;

    /// The channel the interaction happened in
    ///
    /// # Returns
    ///
    /// The channel reference, or `None` when the platform supplied no
    /// channel with the interaction.
    fn channel(&self) -> Option<Channel>;

    /// The user who triggered the interaction
    ///
    /// This user becomes the host of a successfully created game.
    fn user_id(&self) -> UserId;
}

/// A 24-bit RGB color used for the bot's message embeds
///
/// Values outside the 24-bit range are masked on construction. The default
/// is the platform's blurple brand color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Theme(u32);

impl Theme {
    /// The platform's blurple brand color
    pub const BLURPLE: Self = Self(0x0058_65F2);
    /// Green, used for success-flavored embeds
    pub const GREEN: Self = Self(0x0057_F287);
    /// Yellow, used for warning-flavored embeds
    pub const YELLOW: Self = Self(0x00FE_E75C);
    /// Fuchsia accent color
    pub const FUCHSIA: Self = Self(0x00EB_459E);
    /// Red, used for error-flavored embeds
    pub const RED: Self = Self(0x00ED_4245);
    /// Plain white
    pub const WHITE: Self = Self(0x00FF_FFFF);
    /// Plain black
    pub const BLACK: Self = Self(0x0000_0000);

    /// Creates a theme from a packed `0xRRGGBB` value
    ///
    /// Bits above the low 24 are discarded.
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    /// Returns the packed `0xRRGGBB` value
    pub const fn rgb(self) -> u32 {
        self.0
    }
}

impl Default for Theme {
    /// The default theme is [`Theme::BLURPLE`]
    fn default() -> Self {
        Self::BLURPLE
    }
}

impl From<u32> for Theme {
    /// Creates a theme from a packed value, masking to 24 bits
    fn from(rgb: u32) -> Self {
        Self::new(rgb)
    }
}

impl From<Theme> for u32 {
    /// Unpacks the theme into its `0xRRGGBB` value
    fn from(theme: Theme) -> Self {
        theme.0
    }
}

impl Display for Theme {
    /// Formats the color as an uppercase `#RRGGBB` hex string
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}
