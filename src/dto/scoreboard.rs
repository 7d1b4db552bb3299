use serde::Serialize;
use uuid::Uuid;

use crate::state::{game::Match, summary::Summary};

/// One line of the scoreboard as rendered for external consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    /// Identifier of the match.
    pub match_id: Uuid,
    /// Name of the home team.
    pub home_team: String,
    /// Name of the away team.
    pub away_team: String,
    /// Goals scored by the home team.
    pub home_score: u32,
    /// Goals scored by the away team.
    pub away_score: u32,
    /// Sum of both scores.
    pub total_score: u64,
}

impl From<&Match> for SummaryEntry {
    fn from(game: &Match) -> Self {
        Self {
            match_id: game.id(),
            home_team: game.home_team().name().to_owned(),
            away_team: game.away_team().name().to_owned(),
            home_score: game.home_score(),
            away_score: game.away_score(),
            total_score: game.total_score(),
        }
    }
}

/// Ordered scoreboard payload, highest total score first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreboardView {
    /// Number of matches in progress.
    pub in_progress: usize,
    /// Matches in scoreboard order.
    pub matches: Vec<SummaryEntry>,
}

impl From<&Summary> for ScoreboardView {
    fn from(summary: &Summary) -> Self {
        Self {
            in_progress: summary.len(),
            matches: summary.iter().map(SummaryEntry::from).collect(),
        }
    }
}

impl ScoreboardView {
    /// Render the view as a JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Scoreboard lines in `Home 1 - Away 0` form, one per match.
    pub fn lines(&self) -> Vec<String> {
        self.matches
            .iter()
            .map(|entry| {
                format!(
                    "{} {} - {} {}",
                    entry.home_team, entry.home_score, entry.away_team, entry.away_score
                )
            })
            .collect()
    }
}
