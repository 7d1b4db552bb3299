use std::ops::Deref;
use std::slice;

use serde::Serialize;

use crate::state::game::{Match, MatchId};

/// Ordered, read-only snapshot of the in-progress matches.
///
/// The snapshot is a copy taken under the scoreboard lock: it never changes
/// afterwards and cannot be used to modify the scoreboard. Only shared access
/// to the matches is exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary {
    matches: Vec<Match>,
}

impl Summary {
    /// Wrap matches that are already in scoreboard order.
    pub(crate) fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    /// Iterate over the matches, highest total score first.
    pub fn iter(&self) -> slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Look up a match of the snapshot by id.
    pub fn find(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|game| game.id() == id)
    }

    /// Identifiers in scoreboard order.
    pub fn ids(&self) -> Vec<MatchId> {
        self.matches.iter().map(Match::id).collect()
    }
}

impl Deref for Summary {
    type Target = [Match];

    fn deref(&self) -> &Self::Target {
        &self.matches
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a Match;
    type IntoIter = slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

impl IntoIterator for Summary {
    type Item = Match;
    type IntoIter = std::vec::IntoIter<Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}
