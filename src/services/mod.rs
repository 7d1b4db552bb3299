/// Validation and orchestration of scoreboard operations.
pub mod scoreboard_service;

use crate::{
    error::ScoreboardResult,
    state::{
        game::{MatchId, Team},
        summary::Summary,
    },
};

/// The four operations a live scoreboard offers to its callers.
///
/// Implemented by [`scoreboard_service::ScoreBoardService`] for single-owner
/// use and by `&ConcurrentScoreboard` for shared use across threads.
pub trait Scoreboard {
    /// Start a 0-0 match between two teams that are not currently playing.
    fn new_match(&mut self, home_team: &Team, away_team: &Team) -> ScoreboardResult<MatchId>;

    /// Replace the score of an in-progress match with absolute values.
    fn update_score(
        &mut self,
        match_id: MatchId,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<()>;

    /// Remove a match from the scoreboard.
    fn finish_match(&mut self, match_id: MatchId) -> ScoreboardResult<()>;

    /// In-progress matches, highest total score first.
    fn sorted_summary(&self) -> Summary;
}
