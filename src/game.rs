//! Trivia game session state
//!
//! This module contains the session record for a single trivia game: the
//! platform references it was created against, its merged configuration,
//! its lifecycle state, and its player roster. Question flow, scoring, and
//! messaging live in the surrounding engine; the session only guards the
//! data they operate on.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    error,
    options::{GameOptions, ResolvedOptions},
    platform::{Channel, ChannelId, GuildId, InteractionContext, UserId},
    players::{self, Players},
};

/// The lifecycle state of a trivia game session
///
/// Sessions move forward only: created sessions are pending, starting one
/// opens the join queue, play follows the queue, and ended games stay
/// ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    /// Created but not yet started
    Pending,
    /// Waiting for players to join
    Queue,
    /// Questions are being played
    InProgress,
    /// The game is over
    Ended,
}

/// Errors that can occur while driving a session's lifecycle
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The game has left the pending state and cannot start again
    #[error("game has already been started")]
    AlreadyStarted,
    /// The game is not currently queuing players
    #[error("game is not queuing players")]
    NotQueuing,
    /// The game's configuration failed validation
    #[error(transparent)]
    Config(#[from] error::Error),
    /// The roster rejected a joining player
    #[error(transparent)]
    Players(#[from] players::Error),
}

/// A single trivia game session
///
/// Constructed by [`TriviaGame::new`] only after the platform context has
/// passed its preconditions, so a session always refers to a real guild
/// and a text-capable channel. The configuration bag is merged over the
/// built-in defaults at construction and never changes afterwards; it is
/// validated when the game starts.
#[derive(Clone, Serialize, Deserialize)]
pub struct TriviaGame {
    /// The guild hosting the game
    guild: GuildId,
    /// The channel the game runs in
    channel: Channel,
    /// The user who requested the game
    host: UserId,
    /// The merged configuration bag
    options: GameOptions,
    /// Current lifecycle state
    state: State,
    /// Players who have joined
    players: Players,
}

impl Debug for TriviaGame {
    /// Custom debug implementation that identifies the session without
    /// dumping its full configuration and roster
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriviaGame")
            .field("channel", &self.channel.id)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl TriviaGame {
    /// Creates a session from the interaction that requested it
    ///
    /// The platform context is checked in a fixed order: the interaction
    /// must carry a guild, then a channel, and the channel must be
    /// text-capable. The supplied options are merged over the built-in
    /// defaults but not validated here; validation happens when the game
    /// starts.
    ///
    /// # Arguments
    ///
    /// * `interaction` - The platform interaction that requested the game
    /// * `options` - The caller's configuration, if any
    ///
    /// # Errors
    ///
    /// * `Error::GuildNullish` - The interaction carried no guild
    /// * `Error::ChannelNullish` - The interaction carried no channel
    /// * `Error::ChannelNonText` - The channel cannot carry text messages
    pub fn new(
        interaction: &impl InteractionContext,
        options: Option<GameOptions>,
    ) -> Result<Self, error::Error> {
        let guild = interaction.guild_id().ok_or(error::Error::GuildNullish)?;
        let channel = interaction.channel().ok_or(error::Error::ChannelNullish)?;
        if !channel.is_text() {
            return Err(error::Error::ChannelNonText);
        }

        Ok(Self {
            guild,
            channel,
            host: interaction.user_id(),
            options: options.unwrap_or_default().merged(),
            state: State::Pending,
            players: Players::default(),
        })
    }

    /// The guild hosting the game
    pub fn guild(&self) -> GuildId {
        self.guild
    }

    /// The channel the game runs in
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// The channel's ID, which identifies the session in the registry
    pub fn channel_id(&self) -> ChannelId {
        self.channel.id
    }

    /// The user who requested the game
    pub fn host(&self) -> UserId {
        self.host
    }

    /// The merged configuration bag
    ///
    /// Immutable for the session's lifetime. Reading typed values out of
    /// it goes through [`GameOptions::resolve`].
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// The players who have joined the game
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The roster, for the engine to update player data in place
    pub fn players_mut(&mut self) -> &mut Players {
        &mut self.players
    }

    /// Validates the configuration and opens the join queue
    ///
    /// The options bag is resolved here; on success the roster is bounded
    /// to the resolved maximum player count and the session enters
    /// [`State::Queue`]. On failure the session stays pending; the options
    /// never change, so a retry reports the same error.
    ///
    /// # Returns
    ///
    /// The resolved configuration for the engine to run the game with.
    ///
    /// # Errors
    ///
    /// * `Error::AlreadyStarted` - The session has left the pending state
    /// * `Error::Config` - The configuration failed validation
    pub fn start(&mut self) -> Result<ResolvedOptions, Error> {
        if self.state != State::Pending {
            return Err(Error::AlreadyStarted);
        }

        let resolved = self.options.resolve()?;
        self.players = Players::with_capacity(resolved.maximum_player_count as usize);
        self.state = State::Queue;
        Ok(resolved)
    }

    /// Admits a user to the game while the queue is open
    ///
    /// # Arguments
    ///
    /// * `user` - The platform user joining the game
    ///
    /// # Errors
    ///
    /// * `Error::NotQueuing` - The game is not queuing players
    /// * `Error::Players` - The roster is full or the user already joined
    pub fn join(&mut self, user: UserId) -> Result<(), Error> {
        if self.state != State::Queue {
            return Err(Error::NotQueuing);
        }

        self.players.join(user)?;
        Ok(())
    }

    /// Closes the queue and moves the session into play
    ///
    /// # Errors
    ///
    /// * `Error::NotQueuing` - The game is not queuing players
    pub fn begin_play(&mut self) -> Result<(), Error> {
        if self.state != State::Queue {
            return Err(Error::NotQueuing);
        }

        self.state = State::InProgress;
        Ok(())
    }

    /// Ends the session
    ///
    /// Valid from any state and idempotent; an ended game simply stays
    /// ended.
    pub fn end(&mut self) {
        self.state = State::Ended;
    }
}
