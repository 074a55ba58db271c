//! Configuration constants for the trivia session system
//!
//! This module contains all the validation floors and built-in defaults
//! used throughout the session system to ensure data integrity and
//! provide consistent boundaries for game configuration.

/// Player count configuration constants
pub mod player_count {
    /// Smallest value accepted for either player count option
    pub const FLOOR: u64 = 1;
    /// Default minimum number of players required to start a game
    pub const DEFAULT_MINIMUM: u64 = 1;
    /// Default maximum number of players allowed in a single game session
    pub const DEFAULT_MAXIMUM: u64 = 50;
}

/// Awardable points configuration constants
pub mod points {
    /// Smallest value accepted for either points option
    pub const FLOOR: u64 = 1;
    /// Default minimum points awarded for a correct answer
    pub const DEFAULT_MINIMUM: u64 = 1;
    /// Default maximum points awarded for a correct answer
    pub const DEFAULT_MAXIMUM: u64 = 100;
}

/// Question amount configuration constants
pub mod question_amount {
    /// Smallest number of questions a game can be configured with
    pub const FLOOR: u64 = 1;
    /// Default number of questions per game
    pub const DEFAULT: u64 = 10;
}

/// Timing configuration constants, all in milliseconds
pub mod timing {
    /// Smallest value accepted for either timing option
    pub const FLOOR_MILLIS: u64 = 1_000;
    /// Default time players have to answer each question
    pub const DEFAULT_TIME_PER_QUESTION_MILLIS: u64 = 20_000;
    /// Default time the game waits in queue for players to join
    pub const DEFAULT_QUEUE_TIME_MILLIS: u64 = 15_000;
}
