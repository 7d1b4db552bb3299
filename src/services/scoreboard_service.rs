//! Validation and orchestration of scoreboard requests. This is the single
//! trust boundary in front of the match store: the store never re-checks what
//! is validated here.

use tracing::debug;

use crate::{
    dao::{match_store::MatchStore, memory::InMemoryMatchStore},
    error::{ScoreboardError, ScoreboardResult},
    services::Scoreboard,
    state::{
        game::{Match, MatchId, Team},
        summary::Summary,
    },
};

/// Scoreboard operations on top of a [`MatchStore`], without any locking.
///
/// Use [`crate::state::ConcurrentScoreboard`] when the scoreboard is shared
/// between threads.
#[derive(Debug, Default)]
pub struct ScoreBoardService<S = InMemoryMatchStore> {
    store: S,
}

impl ScoreBoardService {
    /// Create a service backed by an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: MatchStore> ScoreBoardService<S> {
    /// Create a service on top of the provided store.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn start_match(&mut self, home_team: &Team, away_team: &Team) -> ScoreboardResult<MatchId> {
        self.validate_new_match(home_team, away_team)?;

        let game = Match::new(home_team.clone(), away_team.clone());
        let id = game.id();
        self.store.add_match(game);
        Ok(id)
    }

    fn set_score(
        &mut self,
        match_id: MatchId,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<(u32, u32)> {
        let (home_score, away_score) = validate_score_input(match_id, home_score, away_score)?;

        let mut game = self
            .store
            .find_match(match_id)
            .ok_or_else(|| ScoreboardError::match_not_found(match_id))?;
        game.set_score(home_score, away_score);
        self.store.update_and_sort(&game);

        Ok((home_score, away_score))
    }

    fn validate_new_match(&self, home_team: &Team, away_team: &Team) -> ScoreboardResult<()> {
        let matches = self.store.all_matches();
        if matches
            .iter()
            .any(|game| teams_in_match(game, home_team, away_team))
        {
            return Err(ScoreboardError::AlreadyExists(
                "one of the teams is already participating in another match".into(),
            ));
        }

        Ok(())
    }
}

impl<S: MatchStore> Scoreboard for ScoreBoardService<S> {
    fn new_match(&mut self, home_team: &Team, away_team: &Team) -> ScoreboardResult<MatchId> {
        match self.start_match(home_team, away_team) {
            Ok(id) => {
                debug!(match_id = %id, home = %home_team, away = %away_team, "match started");
                Ok(id)
            }
            Err(err) => {
                debug!(home = %home_team, away = %away_team, error = %err, "match start rejected");
                Err(err)
            }
        }
    }

    fn update_score(
        &mut self,
        match_id: MatchId,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<()> {
        match self.set_score(match_id, home_score, away_score) {
            Ok((home, away)) => {
                debug!(match_id = %match_id, home, away, "score updated");
                Ok(())
            }
            Err(err) => {
                debug!(match_id = %match_id, error = %err, "score update rejected");
                Err(err)
            }
        }
    }

    fn finish_match(&mut self, match_id: MatchId) -> ScoreboardResult<()> {
        if !self.store.remove_match(match_id) {
            let err = ScoreboardError::match_not_found(match_id);
            debug!(match_id = %match_id, error = %err, "finish rejected");
            return Err(err);
        }

        debug!(match_id = %match_id, "match finished");
        Ok(())
    }

    fn sorted_summary(&self) -> Summary {
        self.store.all_matches()
    }
}

/// Check the raw score request, returning the scores as stored values.
fn validate_score_input(
    match_id: MatchId,
    home_score: i32,
    away_score: i32,
) -> ScoreboardResult<(u32, u32)> {
    if match_id.is_nil() {
        return Err(ScoreboardError::InvalidArgument(
            "match id must be provided".into(),
        ));
    }

    match (u32::try_from(home_score), u32::try_from(away_score)) {
        (Ok(home), Ok(away)) => Ok((home, away)),
        _ => Err(ScoreboardError::InvalidArgument(format!(
            "negative score is not allowed (got {home_score}-{away_score})"
        ))),
    }
}

/// Whether either candidate team already plays in `game`, on either side.
fn teams_in_match(game: &Match, home_team: &Team, away_team: &Team) -> bool {
    game.involves(home_team.id()) || game.involves(away_team.id())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use uuid::Uuid;

    use super::*;

    fn team(name: &str) -> Team {
        Team::new(name).unwrap()
    }

    /// Store counting full snapshots, to check which operations need them.
    #[derive(Default)]
    struct CountingStore {
        inner: InMemoryMatchStore,
        snapshots: Cell<usize>,
    }

    impl MatchStore for CountingStore {
        fn add_match(&mut self, game: Match) {
            self.inner.add_match(game);
        }

        fn update_and_sort(&mut self, updated: &Match) {
            self.inner.update_and_sort(updated);
        }

        fn remove_match(&mut self, id: MatchId) -> bool {
            self.inner.remove_match(id)
        }

        fn all_matches(&self) -> Summary {
            self.snapshots.set(self.snapshots.get() + 1);
            self.inner.all_matches()
        }

        fn find_match(&self, id: MatchId) -> Option<Match> {
            self.inner.find_match(id)
        }
    }

    fn scores(service: &ScoreBoardService) -> Vec<(u32, u32)> {
        service
            .sorted_summary()
            .iter()
            .map(|game| (game.home_score(), game.away_score()))
            .collect()
    }

    #[test]
    fn new_match_appears_once_goalless() {
        let mut service = ScoreBoardService::new();
        let id = service.new_match(&team("Mexico"), &team("Canada")).unwrap();

        let summary = service.sorted_summary();
        assert_eq!(summary.iter().filter(|game| game.id() == id).count(), 1);
        let game = summary.find(id).unwrap();
        assert_eq!((game.home_score(), game.away_score()), (0, 0));
    }

    #[test]
    fn busy_home_team_is_rejected_in_either_slot() {
        let mut service = ScoreBoardService::new();
        let home = team("Mexico");
        service.new_match(&home, &team("Canada")).unwrap();

        assert!(matches!(
            service.new_match(&home, &team("Spain")),
            Err(ScoreboardError::AlreadyExists(_))
        ));
        assert!(matches!(
            service.new_match(&team("Brazil"), &home),
            Err(ScoreboardError::AlreadyExists(_))
        ));
        assert_eq!(service.sorted_summary().len(), 1);
    }

    #[test]
    fn busy_away_team_is_rejected_in_either_slot() {
        let mut service = ScoreBoardService::new();
        let away = team("Canada");
        service.new_match(&team("Mexico"), &away).unwrap();

        assert!(matches!(
            service.new_match(&away, &team("Spain")),
            Err(ScoreboardError::AlreadyExists(_))
        ));
        assert!(matches!(
            service.new_match(&team("Brazil"), &away),
            Err(ScoreboardError::AlreadyExists(_))
        ));
    }

    #[test]
    fn same_name_different_team_is_not_busy() {
        let mut service = ScoreBoardService::new();
        service.new_match(&team("Mexico"), &team("Canada")).unwrap();

        assert!(service.new_match(&team("Mexico"), &team("Canada")).is_ok());
        assert_eq!(service.sorted_summary().len(), 2);
    }

    #[test]
    fn team_facing_itself_blocks_later_matches() {
        let mut service = ScoreBoardService::new();
        let spain = team("Spain");

        let id = service.new_match(&spain, &spain).unwrap();
        assert_eq!(service.sorted_summary().ids(), vec![id]);
        assert!(matches!(
            service.new_match(&spain, &team("Brazil")),
            Err(ScoreboardError::AlreadyExists(_))
        ));
    }

    #[test]
    fn finished_team_can_play_again() {
        let mut service = ScoreBoardService::new();
        let home = team("Mexico");
        let away = team("Canada");
        let id = service.new_match(&home, &away).unwrap();
        service.finish_match(id).unwrap();

        assert!(service.new_match(&away, &home).is_ok());
    }

    #[test]
    fn update_score_sets_absolute_values() {
        let mut service = ScoreBoardService::new();
        let id = service.new_match(&team("home"), &team("away")).unwrap();

        service.update_score(id, 2, 1).unwrap();
        service.update_score(id, 2, 2).unwrap();

        assert_eq!(scores(&service), vec![(2, 2)]);
    }

    #[test]
    fn negative_scores_are_rejected_without_change() {
        let mut service = ScoreBoardService::new();
        let id = service.new_match(&team("home"), &team("away")).unwrap();
        service.update_score(id, 1, 0).unwrap();

        assert!(matches!(
            service.update_score(id, -1, 3),
            Err(ScoreboardError::InvalidArgument(_))
        ));
        assert!(matches!(
            service.update_score(id, 3, -1),
            Err(ScoreboardError::InvalidArgument(_))
        ));
        assert_eq!(scores(&service), vec![(1, 0)]);
    }

    #[test]
    fn nil_match_id_is_an_invalid_argument() {
        let mut service = ScoreBoardService::new();
        service.new_match(&team("home"), &team("away")).unwrap();

        assert!(matches!(
            service.update_score(Uuid::nil(), 1, 1),
            Err(ScoreboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unknown_match_update_is_not_found() {
        let mut service = ScoreBoardService::new();
        service.new_match(&team("home"), &team("away")).unwrap();

        assert!(matches!(
            service.update_score(Uuid::new_v4(), 1, 1),
            Err(ScoreboardError::NotFound(_))
        ));
        assert_eq!(scores(&service), vec![(0, 0)]);
    }

    #[test]
    fn finish_removes_exactly_one_match() {
        let mut service = ScoreBoardService::new();
        let first = service.new_match(&team("Home1"), &team("Away1")).unwrap();
        let second = service.new_match(&team("Home2"), &team("Away2")).unwrap();

        service.finish_match(first).unwrap();

        assert_eq!(service.sorted_summary().ids(), vec![second]);
        assert!(matches!(
            service.finish_match(first),
            Err(ScoreboardError::NotFound(_))
        ));
    }

    #[test]
    fn finish_of_unknown_or_nil_id_is_not_found() {
        let mut service = ScoreBoardService::new();

        assert!(matches!(
            service.finish_match(Uuid::new_v4()),
            Err(ScoreboardError::NotFound(_))
        ));
        assert!(matches!(
            service.finish_match(Uuid::nil()),
            Err(ScoreboardError::NotFound(_))
        ));
    }

    #[test]
    fn summary_follows_total_then_latest_update() {
        let mut service = ScoreBoardService::new();
        let ab = service.new_match(&team("A"), &team("B")).unwrap();
        let cd = service.new_match(&team("C"), &team("D")).unwrap();

        service.update_score(ab, 2, 1).unwrap();
        service.update_score(cd, 2, 2).unwrap();
        assert_eq!(service.sorted_summary().ids(), vec![cd, ab]);

        service.update_score(ab, 3, 2).unwrap();
        assert_eq!(service.sorted_summary().ids(), vec![ab, cd]);

        service.finish_match(cd).unwrap();
        let summary = service.sorted_summary();
        assert_eq!(summary.ids(), vec![ab]);
        assert_eq!(summary[0].total_score(), 5);
    }

    #[test]
    fn score_update_looks_up_a_single_match() {
        let mut service = ScoreBoardService::with_store(CountingStore::default());
        let id = service.new_match(&team("Mexico"), &team("Canada")).unwrap();
        let after_start = service.store().snapshots.get();

        service.update_score(id, 1, 0).unwrap();
        assert!(matches!(
            service.update_score(Uuid::new_v4(), 1, 0),
            Err(ScoreboardError::NotFound(_))
        ));

        assert_eq!(service.store().snapshots.get(), after_start);
        assert_eq!(service.store().len(), 1);
        assert_eq!(service.store().find_match(id).unwrap().home_score(), 1);
    }
}
