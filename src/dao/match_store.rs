use crate::state::{
    game::{Match, MatchId},
    summary::Summary,
};

/// Ordered storage of the in-progress matches.
///
/// Implementations keep the collection sorted by total score, highest
/// first, with the most recently updated match leading its tie-group.
/// Stores never validate: callers are expected to have checked ids and
/// scores beforehand.
pub trait MatchStore: Send {
    /// Append a freshly started match to the end of the current order.
    fn add_match(&mut self, game: Match);

    /// Copy the scores of `updated` onto the stored match with the same id
    /// and re-sort the whole collection. Unknown ids are ignored.
    fn update_and_sort(&mut self, updated: &Match);

    /// Remove the match with the given id, reporting whether one was found.
    fn remove_match(&mut self, id: MatchId) -> bool;

    /// Snapshot of every stored match in scoreboard order.
    fn all_matches(&self) -> Summary;

    /// Copy of the stored match with the given id.
    fn find_match(&self, id: MatchId) -> Option<Match> {
        self.all_matches().find(id).cloned()
    }

    /// Number of stored matches.
    fn len(&self) -> usize {
        self.all_matches().len()
    }

    /// Whether no match is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
