use thiserror::Error;
use uuid::Uuid;

/// Result alias for scoreboard operations.
pub type ScoreboardResult<T> = Result<T, ScoreboardError>;

/// Errors returned by the scoreboard when a request cannot be applied.
///
/// Every variant is caller-fixable: the scoreboard is left untouched when one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    /// A required value is missing or out of range (e.g. a negative score).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// One of the teams already plays in an in-progress match.
    #[error("already exists: {0}")]
    AlreadyExists(String),
    /// The referenced match is not on the scoreboard.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ScoreboardError {
    /// Build the error returned when no in-progress match has the given id.
    pub fn match_not_found(id: Uuid) -> Self {
        ScoreboardError::NotFound(format!("match `{id}` not found"))
    }
}
