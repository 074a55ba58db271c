//! Game option validation and resolution
//!
//! This module defines the loosely-typed options bag bot authors fill in
//! when requesting a trivia game, and the validation pass that turns it
//! into a typed configuration. Values arrive the way the chat platform
//! hands them over: numbers may be numeric strings, enumerated choices are
//! matched case-insensitively, and an explicit null means something
//! different from an omitted field. Validation is fail-fast and checks
//! fields in a fixed order, so a given bag always reports the same error.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    constants::{player_count, points, question_amount, timing},
    error::{Error, Floor, OptionField, Violation},
};

/// A single loosely-typed option value as supplied by the platform
///
/// Chat platforms deliver command options with very little typing: a count
/// may arrive as `3` or `"3"`, a choice may be any string, and a field may
/// be explicitly nulled rather than omitted. This enum preserves those
/// distinctions so validation can report exactly what the caller did.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum OptionValue {
    /// An explicit null, distinct from an omitted field
    Null,
    /// A boolean, never valid for any option but representable
    #[from]
    Bool(bool),
    /// A number, including non-finite ones
    #[from]
    Number(f64),
    /// A string, which numeric fields may still coerce to a number
    #[from]
    Text(String),
    /// Nothing supplied at all
    #[default]
    #[serde(skip)]
    Absent,
}

impl From<&str> for OptionValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<i32> for OptionValue {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for OptionValue {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i64> for OptionValue {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<u64> for OptionValue {
    fn from(number: u64) -> Self {
        Self::Number(number as f64)
    }
}

impl OptionValue {
    /// Whether no value was supplied for this field
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether this field was explicitly nulled
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this value is empty under the bag's loose truthiness
    ///
    /// Null, absent, `false`, zero, NaN, and the empty string all count
    /// as empty. The enumerated fields treat empty-but-not-null values
    /// as omitted.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Null | Self::Absent => true,
            Self::Bool(boolean) => !boolean,
            Self::Number(number) => *number == 0.0 || number.is_nan(),
            Self::Text(text) => text.is_empty(),
        }
    }

    /// Returns this value, or `fallback` when nothing was supplied
    ///
    /// Only [`OptionValue::Absent`] falls back: an explicit null is a
    /// supplied value and wins over the fallback.
    pub fn or(&self, fallback: Self) -> Self {
        if self.is_absent() {
            fallback
        } else {
            self.clone()
        }
    }
}

/// How hard the requested questions should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionDifficulty {
    /// Easy questions
    Easy,
    /// Medium questions
    Medium,
    /// Hard questions
    Hard,
}

impl QuestionDifficulty {
    /// Matches a difficulty name case-insensitively
    ///
    /// # Returns
    ///
    /// The difficulty the text names, or `None` for anything else.
    pub fn resolve(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

/// What answer format the requested questions should have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Four-choice multiple choice questions
    Multiple,
    /// True/false questions
    Boolean,
}

impl QuestionType {
    /// Matches a question type name case-insensitively
    ///
    /// # Returns
    ///
    /// The type the text names, or `None` for anything else.
    pub fn resolve(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "multiple" => Some(Self::Multiple),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Multiple => "multiple",
            Self::Boolean => "boolean",
        })
    }
}

/// The configuration bag for a single trivia game
///
/// Every field holds whatever the caller supplied, unvalidated. Fields the
/// caller never set deserialize as [`OptionValue::Absent`] and are skipped
/// on serialization, so the wire shape only carries what was actually
/// provided. The bag becomes trustworthy only through [`GameOptions::validate`]
/// or [`GameOptions::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameOptions {
    /// Fewest players required for the game to start
    #[serde(skip_serializing_if = "OptionValue::is_absent")]
    pub minimum_player_count: OptionValue,
    /// Most players the game will admit
    #[serde(skip_serializing_if = "OptionValue::is_absent")]
    pub maximum_player_count: OptionValue,
    /// Fewest points a correct answer can award
    #[serde(skip_serializing_if = "OptionValue::is_absent")]
    pub minimum_points: OptionValue,
    /// Most points a correct answer can award
    #[serde(skip_serializing_if = "OptionValue::is_absent")]
    pub maximum_points: OptionValue,
    /// Time players have to answer each question, in milliseconds
    #[serde(skip_serializing_if = "OptionValue::is_absent")]
    pub time_per_question: OptionValue,
    /// Time the game waits for players to join, in milliseconds
    #[serde(skip_serializing_if = "OptionValue::is_absent")]
    pub queue_time: OptionValue,
    /// Number of questions in the game
    #[serde(skip_serializing_if = "OptionValue::is_absent")]
    pub question_amount: OptionValue,
    /// Requested question difficulty, null for no preference
    #[serde(skip_serializing_if = "OptionValue::is_absent")]
    pub question_difficulty: OptionValue,
    /// Requested answer format, null for no preference
    #[serde(skip_serializing_if = "OptionValue::is_absent")]
    pub question_type: OptionValue,
    /// Question category passed through to the trivia provider, never validated
    #[serde(skip_serializing_if = "OptionValue::is_absent")]
    pub trivia_category: OptionValue,
}

/// Checks one numeric option and coerces it to a whole number
///
/// The checks run in a fixed sequence: presence, type, number coercion,
/// wholeness, then the field's floor. Strings coerce through a trimmed
/// float parse, so `"3"` and `3` are interchangeable.
///
/// # Arguments
///
/// * `field` - The field being checked, for error messages
/// * `value` - The supplied value
/// * `floor` - The smallest value the field accepts
///
/// # Returns
///
/// The coerced whole number, or the first violation found.
fn check_whole_number(field: OptionField, value: &OptionValue, floor: Floor) -> Result<u64, Error> {
    let number = match value {
        OptionValue::Absent | OptionValue::Null => {
            return Err(Error::MissingOption { field });
        }
        OptionValue::Bool(_) => {
            return Err(Error::InvalidOption {
                field,
                violation: Violation::NotNumeric,
            });
        }
        OptionValue::Number(number) => *number,
        OptionValue::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
    };
    if number.is_nan() {
        return Err(Error::InvalidOption {
            field,
            violation: Violation::Unresolvable,
        });
    }
    if number.fract() != 0.0 {
        return Err(Error::InvalidOption {
            field,
            violation: Violation::Fractional,
        });
    }
    let limit = match floor {
        Floor::Count(limit) | Floor::Milliseconds(limit) => limit,
    };
    if number < limit as f64 {
        return Err(Error::InvalidOption {
            field,
            violation: Violation::BelowFloor(floor),
        });
    }
    Ok(number as u64)
}

/// Checks that the maximum of a range is not below its minimum
///
/// Runs only after both participants have individually passed, and blames
/// the maximum-side field when the range is inverted.
fn check_range(
    minimum_field: OptionField,
    maximum_field: OptionField,
    minimum: u64,
    maximum: u64,
) -> Result<(), Error> {
    if minimum > maximum {
        return Err(Error::InvalidOption {
            field: maximum_field,
            violation: Violation::LessThanMinimum {
                minimum: minimum_field,
            },
        });
    }
    Ok(())
}

/// Checks one enumerated option against its accepted names
///
/// An explicit null short-circuits as "no preference". Anything else that
/// is empty under the bag's truthiness counts as omitted, non-strings are
/// rejected outright, and strings match case-insensitively.
///
/// # Arguments
///
/// * `field` - The field being checked, for error messages
/// * `value` - The supplied value
/// * `resolve` - The matcher for the field's accepted names
///
/// # Returns
///
/// The matched choice, `None` for an explicit null, or the first
/// violation found.
fn check_choice<T>(
    field: OptionField,
    value: &OptionValue,
    resolve: fn(&str) -> Option<T>,
) -> Result<Option<T>, Error> {
    if value.is_null() {
        return Ok(None);
    }
    if value.is_falsy() {
        return Err(Error::MissingOption { field });
    }
    match value {
        OptionValue::Text(text) => resolve(text).map(Some).ok_or_else(|| Error::InvalidOption {
            field,
            violation: Violation::Unrecognized(text.clone()),
        }),
        _ => Err(Error::InvalidOption {
            field,
            violation: Violation::NotText,
        }),
    }
}

impl GameOptions {
    /// The built-in game configuration
    ///
    /// These are the values a game runs with when the caller supplies
    /// nothing: one to fifty players, one to a hundred points, twenty
    /// seconds per question, fifteen seconds of queue time, ten questions,
    /// and no difficulty, type, or category preference.
    pub fn defaults() -> Self {
        Self {
            minimum_player_count: player_count::DEFAULT_MINIMUM.into(),
            maximum_player_count: player_count::DEFAULT_MAXIMUM.into(),
            minimum_points: points::DEFAULT_MINIMUM.into(),
            maximum_points: points::DEFAULT_MAXIMUM.into(),
            time_per_question: timing::DEFAULT_TIME_PER_QUESTION_MILLIS.into(),
            queue_time: timing::DEFAULT_QUEUE_TIME_MILLIS.into(),
            question_amount: question_amount::DEFAULT.into(),
            question_difficulty: OptionValue::Null,
            question_type: OptionValue::Null,
            trivia_category: OptionValue::Null,
        }
    }

    /// Overlays this bag onto the built-in configuration
    ///
    /// Supplied fields win, including explicitly nulled ones; only absent
    /// fields fall back. The built-in configuration is rebuilt for every
    /// call, so no merge can leak into another.
    ///
    /// # Returns
    ///
    /// A new bag with every field filled from this bag or the built-ins.
    pub fn merged(&self) -> Self {
        let defaults = Self::defaults();
        Self {
            minimum_player_count: self.minimum_player_count.or(defaults.minimum_player_count),
            maximum_player_count: self.maximum_player_count.or(defaults.maximum_player_count),
            minimum_points: self.minimum_points.or(defaults.minimum_points),
            maximum_points: self.maximum_points.or(defaults.maximum_points),
            time_per_question: self.time_per_question.or(defaults.time_per_question),
            queue_time: self.queue_time.or(defaults.queue_time),
            question_amount: self.question_amount.or(defaults.question_amount),
            question_difficulty: self.question_difficulty.or(defaults.question_difficulty),
            question_type: self.question_type.or(defaults.question_type),
            trivia_category: self.trivia_category.or(defaults.trivia_category),
        }
    }

    /// Deserializes an options bag from a platform JSON payload
    ///
    /// Omitted fields become [`OptionValue::Absent`]; nulls stay nulls.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the payload is not a JSON object
    /// of scalar option values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validates every field of the bag
    ///
    /// Checks run in a fixed order: minimum player count, maximum player
    /// count, maximum points, minimum points, the player count relation,
    /// the points relation, time per question, question difficulty,
    /// question amount, question type, then queue time. The first
    /// violation is returned and nothing after it is looked at.
    ///
    /// # Errors
    ///
    /// * `Error::MissingOption` - A required field was omitted or nulled
    /// * `Error::InvalidOption` - A field was present but unusable
    pub fn validate(&self) -> Result<(), Error> {
        self.resolve().map(|_| ())
    }

    /// Validates the bag and coerces it into a typed configuration
    ///
    /// Runs the identical checks as [`GameOptions::validate`], in the
    /// identical order, and additionally captures the coerced values, so
    /// typed reads can never bypass validation.
    ///
    /// # Errors
    ///
    /// * `Error::MissingOption` - A required field was omitted or nulled
    /// * `Error::InvalidOption` - A field was present but unusable
    pub fn resolve(&self) -> Result<ResolvedOptions, Error> {
        let minimum_player_count = check_whole_number(
            OptionField::MinimumPlayerCount,
            &self.minimum_player_count,
            Floor::Count(player_count::FLOOR),
        )?;
        let maximum_player_count = check_whole_number(
            OptionField::MaximumPlayerCount,
            &self.maximum_player_count,
            Floor::Count(player_count::FLOOR),
        )?;
        let maximum_points = check_whole_number(
            OptionField::MaximumPoints,
            &self.maximum_points,
            Floor::Count(points::FLOOR),
        )?;
        let minimum_points = check_whole_number(
            OptionField::MinimumPoints,
            &self.minimum_points,
            Floor::Count(points::FLOOR),
        )?;

        check_range(
            OptionField::MinimumPlayerCount,
            OptionField::MaximumPlayerCount,
            minimum_player_count,
            maximum_player_count,
        )?;
        check_range(
            OptionField::MinimumPoints,
            OptionField::MaximumPoints,
            minimum_points,
            maximum_points,
        )?;

        let time_per_question = check_whole_number(
            OptionField::TimePerQuestion,
            &self.time_per_question,
            Floor::Milliseconds(timing::FLOOR_MILLIS),
        )?;
        let question_difficulty = check_choice(
            OptionField::QuestionDifficulty,
            &self.question_difficulty,
            QuestionDifficulty::resolve,
        )?;
        let question_amount = check_whole_number(
            OptionField::QuestionAmount,
            &self.question_amount,
            Floor::Count(question_amount::FLOOR),
        )?;
        let question_type = check_choice(
            OptionField::QuestionType,
            &self.question_type,
            QuestionType::resolve,
        )?;
        let queue_time = check_whole_number(
            OptionField::QueueTime,
            &self.queue_time,
            Floor::Milliseconds(timing::FLOOR_MILLIS),
        )?;

        let trivia_category = match &self.trivia_category {
            OptionValue::Null | OptionValue::Absent => None,
            value => Some(value.clone()),
        };

        Ok(ResolvedOptions {
            minimum_player_count,
            maximum_player_count,
            minimum_points,
            maximum_points,
            time_per_question: Duration::from_millis(time_per_question),
            queue_time: Duration::from_millis(queue_time),
            question_amount,
            question_difficulty,
            question_type,
            trivia_category,
        })
    }
}

/// The typed configuration a validated options bag resolves to
///
/// This is what the rest of the session logic reads: counts are integers,
/// timings are durations, and the enumerated preferences are matched
/// variants. It can only be produced by [`GameOptions::resolve`], so its
/// values always satisfy the validation rules.
#[serde_with::serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    /// Fewest players required for the game to start
    pub minimum_player_count: u64,
    /// Most players the game will admit
    pub maximum_player_count: u64,
    /// Fewest points a correct answer can award
    pub minimum_points: u64,
    /// Most points a correct answer can award
    pub maximum_points: u64,
    /// Time players have to answer each question
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub time_per_question: Duration,
    /// Time the game waits for players to join
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub queue_time: Duration,
    /// Number of questions in the game
    pub question_amount: u64,
    /// Requested question difficulty, if any
    pub question_difficulty: Option<QuestionDifficulty>,
    /// Requested answer format, if any
    pub question_type: Option<QuestionType>,
    /// Category request forwarded to the trivia provider untouched
    pub trivia_category: Option<OptionValue>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn create_test_options() -> GameOptions {
        GameOptions {
            minimum_player_count: 2.into(),
            maximum_player_count: 8.into(),
            minimum_points: 10.into(),
            maximum_points: 500.into(),
            time_per_question: 10_000.into(),
            queue_time: 30_000.into(),
            question_amount: 15.into(),
            question_difficulty: "hard".into(),
            question_type: "multiple".into(),
            trivia_category: "history".into(),
        }
    }

    #[test]
    fn test_option_value_falsiness() {
        assert!(OptionValue::Null.is_falsy());
        assert!(OptionValue::Absent.is_falsy());
        assert!(OptionValue::Bool(false).is_falsy());
        assert!(OptionValue::Number(0.0).is_falsy());
        assert!(OptionValue::Number(-0.0).is_falsy());
        assert!(OptionValue::Number(f64::NAN).is_falsy());
        assert!(OptionValue::Text(String::new()).is_falsy());

        assert!(!OptionValue::Bool(true).is_falsy());
        assert!(!OptionValue::Number(1.0).is_falsy());
        assert!(!OptionValue::Text("0".to_string()).is_falsy());
    }

    #[test]
    fn test_option_value_conversions() {
        assert_eq!(OptionValue::from(3), OptionValue::Number(3.0));
        assert_eq!(OptionValue::from(3_u64), OptionValue::Number(3.0));
        assert_eq!(OptionValue::from(2.5), OptionValue::Number(2.5));
        assert_eq!(OptionValue::from(true), OptionValue::Bool(true));
        assert_eq!(OptionValue::from("easy"), OptionValue::Text("easy".to_string()));
    }

    #[test]
    fn test_option_value_or() {
        assert_eq!(
            OptionValue::Absent.or(OptionValue::Number(5.0)),
            OptionValue::Number(5.0)
        );
        assert_eq!(
            OptionValue::Null.or(OptionValue::Number(5.0)),
            OptionValue::Null
        );
        assert_eq!(
            OptionValue::Number(2.0).or(OptionValue::Number(5.0)),
            OptionValue::Number(2.0)
        );
    }

    #[test]
    fn test_option_value_untagged_deserialization() {
        let value: OptionValue = serde_json::from_str("null").unwrap();
        assert_eq!(value, OptionValue::Null);

        let value: OptionValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, OptionValue::Bool(true));

        let value: OptionValue = serde_json::from_str("42").unwrap();
        assert_eq!(value, OptionValue::Number(42.0));

        let value: OptionValue = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(value, OptionValue::Text("42".to_string()));
    }

    #[test]
    fn test_defaults_are_valid() {
        let resolved = GameOptions::defaults().resolve().unwrap();

        assert_eq!(resolved.minimum_player_count, 1);
        assert_eq!(resolved.maximum_player_count, 50);
        assert_eq!(resolved.minimum_points, 1);
        assert_eq!(resolved.maximum_points, 100);
        assert_eq!(resolved.time_per_question, Duration::from_millis(20_000));
        assert_eq!(resolved.queue_time, Duration::from_millis(15_000));
        assert_eq!(resolved.question_amount, 10);
        assert_eq!(resolved.question_difficulty, None);
        assert_eq!(resolved.question_type, None);
        assert_eq!(resolved.trivia_category, None);
    }

    #[test]
    fn test_valid_options_resolve() {
        let resolved = create_test_options().resolve().unwrap();

        assert_eq!(resolved.minimum_player_count, 2);
        assert_eq!(resolved.maximum_player_count, 8);
        assert_eq!(resolved.time_per_question, Duration::from_millis(10_000));
        assert_eq!(resolved.question_difficulty, Some(QuestionDifficulty::Hard));
        assert_eq!(resolved.question_type, Some(QuestionType::Multiple));
        assert_eq!(
            resolved.trivia_category,
            Some(OptionValue::Text("history".to_string()))
        );
    }

    #[test]
    fn test_validate_matches_resolve() {
        assert_eq!(create_test_options().validate(), Ok(()));

        let options = GameOptions {
            question_amount: OptionValue::Null,
            ..GameOptions::defaults()
        };
        assert_eq!(options.validate(), options.resolve().map(|_| ()));
    }

    #[test]
    fn test_missing_when_absent() {
        let options = GameOptions {
            queue_time: OptionValue::Absent,
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::MissingOption {
                field: OptionField::QueueTime,
            })
        );
    }

    #[test]
    fn test_missing_when_null() {
        let options = GameOptions {
            question_amount: OptionValue::Null,
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::MissingOption {
                field: OptionField::QuestionAmount,
            })
        );
    }

    #[test]
    fn test_zero_is_not_missing() {
        // Zero is a supplied value; it fails the floor, not the presence check
        let options = GameOptions {
            minimum_points: 0.into(),
            ..GameOptions::defaults()
        };
        let error = options.validate().unwrap_err();
        assert_eq!(
            error,
            Error::InvalidOption {
                field: OptionField::MinimumPoints,
                violation: Violation::BelowFloor(Floor::Count(1)),
            }
        );
        assert_eq!(
            error.to_string(),
            "the minimumPoints option must be greater than or equal to 1"
        );
    }

    #[test]
    fn test_boolean_is_not_numeric() {
        let options = GameOptions {
            maximum_player_count: true.into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::InvalidOption {
                field: OptionField::MaximumPlayerCount,
                violation: Violation::NotNumeric,
            })
        );

        let options = GameOptions {
            maximum_player_count: false.into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::InvalidOption {
                field: OptionField::MaximumPlayerCount,
                violation: Violation::NotNumeric,
            })
        );
    }

    #[test]
    fn test_unresolvable_strings() {
        for text in ["abc", "", "0x10", "12abc"] {
            let options = GameOptions {
                question_amount: text.into(),
                ..GameOptions::defaults()
            };
            assert_eq!(
                options.validate(),
                Err(Error::InvalidOption {
                    field: OptionField::QuestionAmount,
                    violation: Violation::Unresolvable,
                }),
                "expected {text:?} to be unresolvable"
            );
        }
    }

    #[test]
    fn test_nan_number_is_unresolvable() {
        let options = GameOptions {
            question_amount: f64::NAN.into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::InvalidOption {
                field: OptionField::QuestionAmount,
                violation: Violation::Unresolvable,
            })
        );
    }

    #[test]
    fn test_fractional_values() {
        let options = GameOptions {
            minimum_player_count: 2.5.into(),
            ..GameOptions::defaults()
        };
        let error = options.validate().unwrap_err();
        assert_eq!(
            error,
            Error::InvalidOption {
                field: OptionField::MinimumPlayerCount,
                violation: Violation::Fractional,
            }
        );
        assert_eq!(
            error.to_string(),
            "the minimumPlayerCount option must be a whole integer"
        );

        let options = GameOptions {
            minimum_player_count: "2.5".into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::InvalidOption {
                field: OptionField::MinimumPlayerCount,
                violation: Violation::Fractional,
            })
        );
    }

    #[test]
    fn test_numeric_string_equivalence() {
        let with_number = GameOptions {
            maximum_player_count: 8.into(),
            ..GameOptions::defaults()
        };
        let with_text = GameOptions {
            maximum_player_count: "8".into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            with_number.resolve().unwrap(),
            with_text.resolve().unwrap()
        );

        // Surrounding whitespace and float syntax both coerce
        let padded = GameOptions {
            maximum_player_count: " 8 ".into(),
            ..GameOptions::defaults()
        };
        assert_eq!(padded.resolve().unwrap().maximum_player_count, 8);

        let exponent = GameOptions {
            queue_time: "2e3".into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            exponent.resolve().unwrap().queue_time,
            Duration::from_millis(2_000)
        );
    }

    #[test]
    fn test_floor_violations() {
        let options = GameOptions {
            time_per_question: 999.into(),
            ..GameOptions::defaults()
        };
        let error = options.validate().unwrap_err();
        assert_eq!(
            error,
            Error::InvalidOption {
                field: OptionField::TimePerQuestion,
                violation: Violation::BelowFloor(Floor::Milliseconds(1_000)),
            }
        );
        assert_eq!(
            error.to_string(),
            "the timePerQuestion option must be greater than or equal to 1000ms"
        );

        let options = GameOptions {
            queue_time: 999.into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::InvalidOption {
                field: OptionField::QueueTime,
                violation: Violation::BelowFloor(Floor::Milliseconds(1_000)),
            })
        );

        let options = GameOptions {
            question_amount: (-3).into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::InvalidOption {
                field: OptionField::QuestionAmount,
                violation: Violation::BelowFloor(Floor::Count(1)),
            })
        );
    }

    #[test]
    fn test_player_count_relation() {
        let options = GameOptions {
            minimum_player_count: 10.into(),
            maximum_player_count: 2.into(),
            ..GameOptions::defaults()
        };
        let error = options.validate().unwrap_err();
        assert_eq!(
            error,
            Error::InvalidOption {
                field: OptionField::MaximumPlayerCount,
                violation: Violation::LessThanMinimum {
                    minimum: OptionField::MinimumPlayerCount,
                },
            }
        );
        assert_eq!(
            error.to_string(),
            "the maximumPlayerCount option cannot be less than the minimumPlayerCount option"
        );

        // Equal bounds are a valid, single-size range
        let options = GameOptions {
            minimum_player_count: 4.into(),
            maximum_player_count: 4.into(),
            ..GameOptions::defaults()
        };
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn test_points_relation() {
        let options = GameOptions {
            minimum_points: 500.into(),
            maximum_points: 100.into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::InvalidOption {
                field: OptionField::MaximumPoints,
                violation: Violation::LessThanMinimum {
                    minimum: OptionField::MinimumPoints,
                },
            })
        );
    }

    #[test]
    fn test_difficulty_null_short_circuits() {
        let options = GameOptions {
            question_difficulty: OptionValue::Null,
            ..GameOptions::defaults()
        };
        assert_eq!(options.resolve().unwrap().question_difficulty, None);
    }

    #[test]
    fn test_difficulty_case_insensitive() {
        for (text, expected) in [
            ("easy", QuestionDifficulty::Easy),
            ("EASY", QuestionDifficulty::Easy),
            ("Medium", QuestionDifficulty::Medium),
            ("hArD", QuestionDifficulty::Hard),
        ] {
            let options = GameOptions {
                question_difficulty: text.into(),
                ..GameOptions::defaults()
            };
            assert_eq!(
                options.resolve().unwrap().question_difficulty,
                Some(expected),
                "expected {text:?} to resolve"
            );
        }
    }

    #[test]
    fn test_difficulty_unrecognized() {
        let options = GameOptions {
            question_difficulty: "impossible".into(),
            ..GameOptions::defaults()
        };
        let error = options.validate().unwrap_err();
        assert_eq!(
            error,
            Error::InvalidOption {
                field: OptionField::QuestionDifficulty,
                violation: Violation::Unrecognized("impossible".to_string()),
            }
        );
        assert_eq!(
            error.to_string(),
            "the questionDifficulty option (impossible) is not a resolvable value"
        );
    }

    #[test]
    fn test_difficulty_not_a_string() {
        let options = GameOptions {
            question_difficulty: 2.into(),
            ..GameOptions::defaults()
        };
        let error = options.validate().unwrap_err();
        assert_eq!(
            error,
            Error::InvalidOption {
                field: OptionField::QuestionDifficulty,
                violation: Violation::NotText,
            }
        );
        assert_eq!(
            error.to_string(),
            "the questionDifficulty option must be a string"
        );
    }

    #[test]
    fn test_difficulty_empty_counts_as_missing() {
        // Empty-but-not-null values are treated as omitted for the
        // enumerated fields
        for value in [
            OptionValue::Absent,
            OptionValue::Text(String::new()),
            OptionValue::Bool(false),
            OptionValue::Number(0.0),
            OptionValue::Number(f64::NAN),
        ] {
            let options = GameOptions {
                question_difficulty: value.clone(),
                ..GameOptions::defaults()
            };
            assert_eq!(
                options.validate(),
                Err(Error::MissingOption {
                    field: OptionField::QuestionDifficulty,
                }),
                "expected {value:?} to count as missing"
            );
        }
    }

    #[test]
    fn test_question_type_resolution() {
        let options = GameOptions {
            question_type: "BOOLEAN".into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.resolve().unwrap().question_type,
            Some(QuestionType::Boolean)
        );

        let options = GameOptions {
            question_type: "trueorfalse".into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::InvalidOption {
                field: OptionField::QuestionType,
                violation: Violation::Unrecognized("trueorfalse".to_string()),
            })
        );
    }

    #[test]
    fn test_category_is_never_validated() {
        let options = GameOptions {
            trivia_category: true.into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.resolve().unwrap().trivia_category,
            Some(OptionValue::Bool(true))
        );

        let options = GameOptions {
            trivia_category: OptionValue::Absent,
            ..GameOptions::defaults()
        };
        assert_eq!(options.resolve().unwrap().trivia_category, None);
    }

    #[test]
    fn test_first_violation_wins() {
        // Both player counts are bad; the minimum is checked first
        let options = GameOptions {
            minimum_player_count: OptionValue::Null,
            maximum_player_count: 0.5.into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::MissingOption {
                field: OptionField::MinimumPlayerCount,
            })
        );

        // Maximum points are checked before minimum points
        let options = GameOptions {
            minimum_points: OptionValue::Null,
            maximum_points: OptionValue::Null,
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::MissingOption {
                field: OptionField::MaximumPoints,
            })
        );

        // Individual point checks run before the player count relation
        let options = GameOptions {
            minimum_player_count: 10.into(),
            maximum_player_count: 2.into(),
            minimum_points: OptionValue::Null,
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::MissingOption {
                field: OptionField::MinimumPoints,
            })
        );

        // Time per question is checked before the difficulty
        let options = GameOptions {
            time_per_question: 5.into(),
            question_difficulty: "impossible".into(),
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::InvalidOption {
                field: OptionField::TimePerQuestion,
                violation: Violation::BelowFloor(Floor::Milliseconds(1_000)),
            })
        );

        // Difficulty is checked before the question amount
        let options = GameOptions {
            question_difficulty: "impossible".into(),
            question_amount: OptionValue::Null,
            ..GameOptions::defaults()
        };
        assert_eq!(
            options.validate(),
            Err(Error::InvalidOption {
                field: OptionField::QuestionDifficulty,
                violation: Violation::Unrecognized("impossible".to_string()),
            })
        );
    }

    #[test]
    fn test_merged_empty_bag_yields_defaults() {
        assert_eq!(GameOptions::default().merged(), GameOptions::defaults());
    }

    #[test]
    fn test_merged_supplied_fields_win() {
        let options = GameOptions {
            maximum_player_count: 10.into(),
            question_difficulty: "easy".into(),
            ..GameOptions::default()
        };
        let merged = options.merged();

        assert_eq!(merged.maximum_player_count, OptionValue::Number(10.0));
        assert_eq!(
            merged.question_difficulty,
            OptionValue::Text("easy".to_string())
        );
        assert_eq!(merged.minimum_player_count, OptionValue::Number(1.0));
        assert_eq!(merged.question_amount, OptionValue::Number(10.0));
    }

    #[test]
    fn test_merged_explicit_null_wins() {
        let options = GameOptions {
            question_amount: OptionValue::Null,
            ..GameOptions::default()
        };
        let merged = options.merged();

        assert_eq!(merged.question_amount, OptionValue::Null);
        assert_eq!(
            merged.validate(),
            Err(Error::MissingOption {
                field: OptionField::QuestionAmount,
            })
        );
    }

    #[test]
    fn test_merged_does_not_leak_between_calls() {
        let first = GameOptions {
            maximum_player_count: 3.into(),
            ..GameOptions::default()
        };
        let _ = first.merged();

        // A later merge starts from pristine built-ins
        assert_eq!(GameOptions::default().merged(), GameOptions::defaults());
    }

    #[test]
    fn test_bag_deserialization() {
        let options = GameOptions::from_json(
            r#"{"minimumPlayerCount":"3","maximumPoints":250,"questionDifficulty":null}"#,
        )
        .unwrap();

        assert_eq!(
            options.minimum_player_count,
            OptionValue::Text("3".to_string())
        );
        assert_eq!(options.maximum_points, OptionValue::Number(250.0));
        assert_eq!(options.question_difficulty, OptionValue::Null);
        assert!(options.queue_time.is_absent());
        assert!(options.trivia_category.is_absent());
    }

    #[test]
    fn test_bag_deserialization_rejects_non_objects() {
        assert!(GameOptions::from_json("[]").is_err());
        assert!(GameOptions::from_json("not json").is_err());
    }

    #[test]
    fn test_bag_serialization_skips_absent_fields() {
        let options = GameOptions {
            question_type: "boolean".into(),
            ..GameOptions::default()
        };
        let serialized = serde_json::to_string(&options).unwrap();
        assert_eq!(serialized, r#"{"questionType":"boolean"}"#);
    }

    #[test]
    fn test_resolved_options_serialization() {
        let resolved = GameOptions::defaults().resolve().unwrap();
        let serialized = serde_json::to_value(&resolved).unwrap();

        assert_eq!(serialized["timePerQuestion"], 20_000);
        assert_eq!(serialized["queueTime"], 15_000);
        assert_eq!(serialized["maximumPlayerCount"], 50);
        // Unrequested preferences are omitted entirely
        assert!(serialized.get("questionDifficulty").is_none());
    }

    #[test]
    fn test_choice_display_and_serde_agree() {
        assert_eq!(QuestionDifficulty::Easy.to_string(), "easy");
        assert_eq!(QuestionType::Boolean.to_string(), "boolean");

        assert_eq!(
            serde_json::to_string(&QuestionDifficulty::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(
            serde_json::to_string(&QuestionType::Multiple).unwrap(),
            "\"multiple\""
        );
    }
}
