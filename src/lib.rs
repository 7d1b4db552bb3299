//! In-memory live scoreboard tracking concurrently running matches, exposed as a library
//! for the demo runner and integration tests.

/// Demo runner configuration.
pub mod config;
/// Match storage.
pub mod dao;
/// Serializable scoreboard projections.
pub mod dto;
/// Error type shared by every scoreboard operation.
pub mod error;
/// Scoreboard rules and the capability interface.
pub mod services;
/// Runtime records and the thread-safe scoreboard handle.
pub mod state;

pub use error::{ScoreboardError, ScoreboardResult};
pub use services::{Scoreboard, scoreboard_service::ScoreBoardService};
pub use state::{
    ConcurrentScoreboard, SharedScoreboard,
    game::{Match, MatchId, Team, TeamId},
    summary::Summary,
};
