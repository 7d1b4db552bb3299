use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use uuid::Uuid;

use crate::error::{ScoreboardError, ScoreboardResult};

/// Identifier of a team, generated when the team is created.
pub type TeamId = Uuid;
/// Identifier of a match, generated when the match is started.
pub type MatchId = Uuid;

/// A team taking part in matches.
///
/// Teams are immutable and compared by identifier: two teams sharing a name
/// are still distinct entities.
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    id: TeamId,
    name: String,
}

impl Team {
    /// Create a team with a fresh identifier.
    ///
    /// The name is kept as supplied but must contain at least one
    /// non-whitespace character.
    pub fn new(name: impl Into<String>) -> ScoreboardResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ScoreboardError::InvalidArgument(
                "team name must not be empty".into(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    /// Stable identifier of the team.
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Display name of the team.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Team {}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An in-progress match between a home and an away team.
///
/// Teams are fixed at creation; only the scores change afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    id: MatchId,
    home_team: Team,
    away_team: Team,
    home_score: u32,
    away_score: u32,
}

impl Match {
    /// Start a new 0-0 match between the two teams.
    pub fn new(home_team: Team, away_team: Team) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
        }
    }

    /// Stable identifier of the match.
    pub fn id(&self) -> MatchId {
        self.id
    }

    /// Team playing at home.
    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    /// Team playing away.
    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    /// Goals scored by the home team.
    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    /// Goals scored by the away team.
    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    /// Sum of both scores, the primary ordering key of the scoreboard.
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    /// Replace both scores with absolute values.
    pub fn set_score(&mut self, home_score: u32, away_score: u32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    /// Whether the team plays in this match, on either side.
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team.id == team_id || self.away_team.id == team_id
    }
}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Match {}

impl Hash for Match {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
