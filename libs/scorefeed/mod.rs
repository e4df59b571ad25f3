//! # Scorefeed
//!
//! Async client for the public ESPN MLB scoreboard endpoint.
//!
//! The client fetches the day's scoreboard, decodes the (much richer)
//! upstream schema, and boils each event down to a [`GameSnapshot`]:
//! two team abbreviations, two numeric scores, and a scheduled/live/final
//! status. Everything else in the payload is ignored.
//!
//! The client is stateless; callers own the poll cadence.

pub mod client;
pub mod snapshot;
pub mod types;

pub use client::{FeedError, ScoreboardClient, ESPN_MLB_SCOREBOARD_URL};
pub use snapshot::{GameSnapshot, GameStatus, TeamScore};

/// Type alias for Result with FeedError
pub type Result<T> = std::result::Result<T, client::FeedError>;
