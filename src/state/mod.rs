/// Teams and matches.
pub mod game;
/// Ordered snapshots of the scoreboard.
pub mod summary;

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

use crate::{
    dao::{match_store::MatchStore, memory::InMemoryMatchStore},
    error::ScoreboardResult,
    services::{Scoreboard, scoreboard_service::ScoreBoardService},
    state::{
        game::{MatchId, Team},
        summary::Summary,
    },
};

/// Scoreboard handle shared between threads.
pub type SharedScoreboard = Arc<ConcurrentScoreboard>;

/// Thread-safe scoreboard serializing every operation behind one lock.
///
/// Reads take the same exclusive lock as writes, so no caller ever observes
/// a partially applied operation. The guard is scoped to each call and is
/// released on every return path, errors included.
#[derive(Debug, Default)]
pub struct ConcurrentScoreboard<S = InMemoryMatchStore> {
    service: Mutex<ScoreBoardService<S>>,
}

impl ConcurrentScoreboard {
    /// Create an empty scoreboard backed by the in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scoreboard wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn shared() -> SharedScoreboard {
        Arc::new(Self::new())
    }
}

impl<S: MatchStore> ConcurrentScoreboard<S> {
    /// Wrap an existing service.
    pub fn with_service(service: ScoreBoardService<S>) -> Self {
        Self {
            service: Mutex::new(service),
        }
    }

    /// Start a 0-0 match between two teams that are not currently playing.
    pub fn new_match(&self, home_team: &Team, away_team: &Team) -> ScoreboardResult<MatchId> {
        let mut service = self.lock();
        service.new_match(home_team, away_team)
    }

    /// Replace the score of an in-progress match with absolute values.
    pub fn update_score(
        &self,
        match_id: MatchId,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<()> {
        let mut service = self.lock();
        service.update_score(match_id, home_score, away_score)
    }

    /// Remove a match from the scoreboard.
    pub fn finish_match(&self, match_id: MatchId) -> ScoreboardResult<()> {
        let mut service = self.lock();
        service.finish_match(match_id)
    }

    /// In-progress matches, highest total score first.
    pub fn sorted_summary(&self) -> Summary {
        let service = self.lock();
        service.sorted_summary()
    }

    /// Number of in-progress matches.
    pub fn len(&self) -> usize {
        let service = self.lock();
        service.store().len()
    }

    /// Whether no match is in progress.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, ScoreBoardService<S>> {
        // Operations validate before mutating, so a panicking holder cannot leave
        // the store half-updated.
        self.service.lock().unwrap_or_else(|poisoned| {
            warn!("scoreboard lock poisoned by a panicked caller; recovering");
            poisoned.into_inner()
        })
    }
}

impl<S: MatchStore> Scoreboard for &ConcurrentScoreboard<S> {
    fn new_match(&mut self, home_team: &Team, away_team: &Team) -> ScoreboardResult<MatchId> {
        ConcurrentScoreboard::new_match(*self, home_team, away_team)
    }

    fn update_score(
        &mut self,
        match_id: MatchId,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<()> {
        ConcurrentScoreboard::update_score(*self, match_id, home_score, away_score)
    }

    fn finish_match(&mut self, match_id: MatchId) -> ScoreboardResult<()> {
        ConcurrentScoreboard::finish_match(*self, match_id)
    }

    fn sorted_summary(&self) -> Summary {
        ConcurrentScoreboard::sorted_summary(*self)
    }
}
