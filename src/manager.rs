//! Trivia game management and session creation
//!
//! This module hosts the manager bots hold on to: it carries the bot-wide
//! display settings, gates session creation on the interaction that
//! requested it, and tracks ongoing games by channel so each channel hosts
//! at most one game at a time.

use std::collections::{HashMap, hash_map::Entry};

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use crate::{
    error,
    game::TriviaGame,
    options::GameOptions,
    platform::{ChannelId, InteractionContext, Theme},
};

/// Caller-supplied manager configuration
///
/// Every field is optional; anything left out falls back to
/// [`TriviaManager::DEFAULTS`] when the options are merged.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerOptions {
    /// Embed color for the bot's game messages
    pub theme: Option<Theme>,
}

impl ManagerOptions {
    /// Merges these options over the built-in manager defaults
    ///
    /// The defaults are copied and the overrides applied to the copy, so
    /// the shared default record is never written to and merges cannot
    /// leak into later managers.
    ///
    /// # Returns
    ///
    /// The complete settings record the manager will run with.
    pub fn merged(&self) -> ManagerSettings {
        let mut settings = TriviaManager::DEFAULTS;
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        settings
    }
}

/// The complete, merged manager configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerSettings {
    /// Embed color for the bot's game messages
    pub theme: Theme,
}

impl Default for ManagerSettings {
    /// The built-in settings, same as [`TriviaManager::DEFAULTS`]
    fn default() -> Self {
        TriviaManager::DEFAULTS
    }
}

/// Errors that can occur when registering a game with the manager
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The channel already hosts an ongoing game
    #[error("channel already has an ongoing game")]
    ChannelOccupied,
}

/// Creates trivia games and tracks the ongoing ones
///
/// A bot typically owns one manager. Sessions are created through
/// [`TriviaManager::create_game`], which checks the requesting interaction
/// before any session state exists, and are tracked in a channel-keyed
/// registry since the platform allows one game per channel.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TriviaManager {
    /// The merged display settings
    settings: ManagerSettings,
    /// Ongoing games keyed by the channel they run in
    games: HashMap<ChannelId, TriviaGame>,
}

impl TriviaManager {
    /// The built-in manager configuration
    pub const DEFAULTS: ManagerSettings = ManagerSettings {
        theme: Theme::BLURPLE,
    };

    /// Creates a manager with the built-in settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with caller overrides merged over the built-ins
    ///
    /// # Arguments
    ///
    /// * `options` - The caller's overrides
    pub fn with_options(options: ManagerOptions) -> Self {
        Self {
            settings: options.merged(),
            games: HashMap::new(),
        }
    }

    /// The settings this manager runs with
    pub fn settings(&self) -> ManagerSettings {
        self.settings
    }

    /// Creates a new trivia game session for an interaction
    ///
    /// The interaction's kind is checked before anything else: games may
    /// only be requested through application commands, and a non-command
    /// interaction is rejected before its guild, channel, or options are
    /// even looked at. The game's options are merged with the built-in
    /// game defaults but stay unvalidated until the game starts.
    ///
    /// The returned session is not yet registered; see
    /// [`TriviaManager::insert_game`].
    ///
    /// # Arguments
    ///
    /// * `interaction` - The platform interaction that requested the game
    /// * `options` - The caller's game configuration, if any
    ///
    /// # Errors
    ///
    /// * `Error::InvalidInteraction` - The interaction is not a command
    /// * `Error::GuildNullish` - The interaction carried no guild
    /// * `Error::ChannelNullish` - The interaction carried no channel
    /// * `Error::ChannelNonText` - The channel cannot carry text messages
    pub fn create_game(
        &self,
        interaction: &impl InteractionContext,
        options: Option<GameOptions>,
    ) -> Result<TriviaGame, error::Error> {
        if !interaction.kind().is_command() {
            return Err(error::Error::InvalidInteraction);
        }

        TriviaGame::new(interaction, options)
    }

    /// Registers a session in the channel registry
    ///
    /// # Arguments
    ///
    /// * `game` - The session to register
    ///
    /// # Errors
    ///
    /// * `Error::ChannelOccupied` - The game's channel already hosts one
    pub fn insert_game(&mut self, game: TriviaGame) -> Result<(), Error> {
        match self.games.entry(game.channel_id()) {
            Entry::Occupied(_) => Err(Error::ChannelOccupied),
            Entry::Vacant(vacant) => {
                vacant.insert(game);
                Ok(())
            }
        }
    }

    /// Looks up the ongoing game in a channel
    pub fn game(&self, channel: ChannelId) -> Option<&TriviaGame> {
        self.games.get(&channel)
    }

    /// Looks up the ongoing game in a channel for mutation
    pub fn game_mut(&mut self, channel: ChannelId) -> Option<&mut TriviaGame> {
        self.games.get_mut(&channel)
    }

    /// Removes and returns the game in a channel, freeing it for a new one
    pub fn remove_game(&mut self, channel: ChannelId) -> Option<TriviaGame> {
        self.games.remove(&channel)
    }

    /// Whether a channel currently hosts a game
    pub fn has_game(&self, channel: ChannelId) -> bool {
        self.games.contains_key(&channel)
    }

    /// The number of ongoing games across all channels
    pub fn game_count(&self) -> usize {
        self.games.len()
    }
}
