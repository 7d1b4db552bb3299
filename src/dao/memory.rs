use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::{
    dao::match_store::MatchStore,
    state::{
        game::{Match, MatchId},
        summary::Summary,
    },
};

/// Position of a match among others sharing its total score.
///
/// Matches whose score was set at least once lead, most recent update first;
/// matches still at their starting score follow in start order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recency {
    Started(u64),
    Updated(u64),
}

impl Recency {
    fn tie_break(self, other: Self) -> Ordering {
        match (self, other) {
            (Recency::Updated(a), Recency::Updated(b)) => b.cmp(&a),
            (Recency::Updated(_), Recency::Started(_)) => Ordering::Less,
            (Recency::Started(_), Recency::Updated(_)) => Ordering::Greater,
            (Recency::Started(a), Recency::Started(b)) => a.cmp(&b),
        }
    }
}

#[derive(Debug, Clone)]
struct StoredMatch {
    game: Match,
    recency: Recency,
}

fn scoreboard_order(a: &StoredMatch, b: &StoredMatch) -> Ordering {
    b.game
        .total_score()
        .cmp(&a.game.total_score())
        .then_with(|| a.recency.tie_break(b.recency))
}

/// Process-local [`MatchStore`] keeping matches in an insertion-ordered map.
///
/// The map order is the scoreboard order; lookups by id stay constant time.
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    matches: IndexMap<MatchId, StoredMatch>,
    sequence: u64,
}

impl InMemoryMatchStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }
}

impl MatchStore for InMemoryMatchStore {
    fn add_match(&mut self, game: Match) {
        // A new match is 0-0 and the youngest starter, so the tail is already its place.
        let recency = Recency::Started(self.next_sequence());
        self.matches.insert(game.id(), StoredMatch { game, recency });
    }

    fn update_and_sort(&mut self, updated: &Match) {
        let sequence = self.next_sequence();
        let Some(stored) = self.matches.get_mut(&updated.id()) else {
            return;
        };

        stored
            .game
            .set_score(updated.home_score(), updated.away_score());
        stored.recency = Recency::Updated(sequence);

        self.matches.sort_by(|_, a, _, b| scoreboard_order(a, b));
    }

    fn remove_match(&mut self, id: MatchId) -> bool {
        self.matches.shift_remove(&id).is_some()
    }

    fn all_matches(&self) -> Summary {
        Summary::new(
            self.matches
                .values()
                .map(|stored| stored.game.clone())
                .collect(),
        )
    }

    fn find_match(&self, id: MatchId) -> Option<Match> {
        self.matches.get(&id).map(|stored| stored.game.clone())
    }

    fn len(&self) -> usize {
        self.matches.len()
    }
}
