//! # Trivet
//!
//! This library provides trivia game sessions as an add-on for chat-bot
//! platforms. It validates user-supplied game configuration, gates session
//! creation on the platform context the request arrived with, and tracks
//! ongoing games per channel. Question content, rendering, and the
//! platform connection itself stay with the hosting bot.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::similar_names)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::wildcard_imports)]

pub mod constants;

pub mod error;
pub mod game;
pub mod manager;
pub mod options;
pub mod platform;
pub mod players;

pub use error::{Error, ErrorKind};
pub use game::TriviaGame;
pub use manager::{ManagerOptions, ManagerSettings, TriviaManager};
pub use options::{GameOptions, OptionValue, QuestionDifficulty, QuestionType, ResolvedOptions};
pub use platform::{
    Channel, ChannelId, ChannelKind, GuildId, InteractionContext, InteractionKind, Theme, UserId,
};
pub use players::{Player, Players};
