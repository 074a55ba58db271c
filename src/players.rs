//! Session player roster management
//!
//! This module tracks who has joined a trivia game and the per-player data
//! the surrounding game engine updates as questions are asked and answered.
//! The roster enforces the game's player capacity and keeps each platform
//! user in at most once; everything else about a player is plain data.

use std::collections::{HashMap, hash_map::Entry};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::UserId;

/// A participant in a trivia game
///
/// Players are identified by their platform user ID and carry the running
/// tallies the game engine maintains for them. The roster creates players
/// zeroed; mutation happens through the update methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// The player's platform user ID
    pub id: UserId,
    /// Points accumulated over the game so far
    pub points: u64,
    /// Whether the player has answered the current question
    pub has_answered: bool,
    /// Whether the player's latest answer was correct
    pub is_correct: bool,
}

impl Player {
    /// Creates a fresh player with no points and no answer recorded
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            points: 0,
            has_answered: false,
            is_correct: false,
        }
    }

    /// Adds points to the player's running total
    ///
    /// # Arguments
    ///
    /// * `points` - The number of points to award
    pub fn award_points(&mut self, points: u64) {
        self.points += points;
    }

    /// Records that the player answered the current question
    ///
    /// # Arguments
    ///
    /// * `correct` - Whether the answer was correct
    pub fn mark_answered(&mut self, correct: bool) {
        self.has_answered = true;
        self.is_correct = correct;
    }

    /// Clears the answer state ahead of the next question
    pub fn clear_answer(&mut self) {
        self.has_answered = false;
        self.is_correct = false;
    }
}

/// Errors that can occur when joining a game's roster
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The game has reached the maximum number of allowed players
    #[error("maximum number of players reached")]
    Full,
    /// The user is already in the game
    #[error("player has already joined")]
    AlreadyJoined,
}

/// The set of players in a trivia game
///
/// Keyed by platform user ID, so a user can hold at most one seat. A
/// roster may carry a capacity, in which case joins beyond it are
/// rejected; the default roster is unbounded.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Players {
    /// Mapping from user ID to their player record
    mapping: HashMap<UserId, Player>,
    /// Most players the roster admits, if bounded
    #[serde(default)]
    capacity: Option<usize>,
}

impl Players {
    /// Creates an empty roster bounded to `capacity` players
    ///
    /// # Arguments
    ///
    /// * `capacity` - The most players the roster will admit
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mapping: HashMap::new(),
            capacity: Some(capacity),
        }
    }

    /// The roster's capacity, if it is bounded
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Adds a user to the roster
    ///
    /// # Arguments
    ///
    /// * `id` - The platform user ID of the joining player
    ///
    /// # Errors
    ///
    /// * `Error::Full` - The roster is at capacity
    /// * `Error::AlreadyJoined` - The user already holds a seat
    pub fn join(&mut self, id: UserId) -> Result<(), Error> {
        if let Some(capacity) = self.capacity {
            if self.mapping.len() >= capacity {
                return Err(Error::Full);
            }
        }

        match self.mapping.entry(id) {
            Entry::Occupied(_) => Err(Error::AlreadyJoined),
            Entry::Vacant(vacant) => {
                vacant.insert(Player::new(id));
                Ok(())
            }
        }
    }

    /// Removes a user from the roster
    ///
    /// # Returns
    ///
    /// The removed player record, or `None` if the user was not in the game.
    pub fn remove(&mut self, id: UserId) -> Option<Player> {
        self.mapping.remove(&id)
    }

    /// Looks up a player by user ID
    pub fn get(&self, id: UserId) -> Option<&Player> {
        self.mapping.get(&id)
    }

    /// Looks up a player by user ID for mutation
    pub fn get_mut(&mut self, id: UserId) -> Option<&mut Player> {
        self.mapping.get_mut(&id)
    }

    /// Whether the user holds a seat in this game
    pub fn contains(&self, id: UserId) -> bool {
        self.mapping.contains_key(&id)
    }

    /// The number of players in the game
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Iterates over the players in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.mapping.values()
    }

    /// Lists the players ordered by points, highest first
    ///
    /// # Returns
    ///
    /// References to every player, sorted descending by points.
    pub fn standings(&self) -> Vec<&Player> {
        self.mapping
            .values()
            .sorted_by_key(|player| player.points)
            .rev()
            .collect_vec()
    }
}
