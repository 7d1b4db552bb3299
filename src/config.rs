//! Configuration of the scoreboard demo runner: the fixtures to start and the
//! shape of the simulated rounds.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{error::ScoreboardResult, state::game::Team};

/// Default location on disk where the runner looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "LIVE_SCOREBOARD_CONFIG_PATH";
const DEFAULT_ROUNDS: u32 = 3;
const DEFAULT_MAX_GOALS_PER_ROUND: u32 = 2;
/// Upper bound accepted for `max_goals_per_round`.
const MAX_GOALS_PER_ROUND_LIMIT: u32 = 20;

/// Errors raised while decoding a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the expected layout.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but breaks a constraint.
    #[error("invalid config: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// A match to start when the runner boots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Name of the home team.
    pub home: String,
    /// Name of the away team.
    pub away: String,
}

/// Shape of the simulated play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    /// Number of scoring rounds played before the matches are finished.
    pub rounds: u32,
    /// Upper bound of goals a side can score in a single round.
    pub max_goals_per_round: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            max_goals_per_round: DEFAULT_MAX_GOALS_PER_ROUND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration of the demo runner.
pub struct AppConfig {
    fixtures: Vec<Fixture>,
    simulation: SimulationSettings,
}

impl AppConfig {
    /// Load the configuration from disk, falling back to the built-in fixtures.
    pub fn load() -> Self {
        Self::load_from(&resolve_config_path())
    }

    /// Load the configuration from `path`, falling back to defaults on any failure.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        fixtures = app_config.fixtures.len(),
                        rounds = app_config.simulation.rounds,
                        "loaded scoreboard config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Decode and validate a JSON configuration document.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let raw = serde_json::from_str::<RawConfig>(contents)?;
        raw.validate()?;
        Ok(raw.into())
    }

    /// Fixtures to start, in order.
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Settings of the simulated rounds.
    pub fn simulation(&self) -> SimulationSettings {
        self.simulation
    }

    /// Build a fresh pair of teams for every fixture.
    pub fn teams(&self) -> ScoreboardResult<Vec<(Team, Team)>> {
        self.fixtures
            .iter()
            .map(|fixture| -> ScoreboardResult<(Team, Team)> {
                Ok((Team::new(&fixture.home)?, Team::new(&fixture.away)?))
            })
            .collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixtures: default_fixtures(),
            simulation: SimulationSettings::default(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[validate(length(min = 1), nested)]
    fixtures: Vec<RawFixture>,
    #[serde(default)]
    #[validate(nested)]
    simulation: RawSimulation,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
struct RawFixture {
    #[validate(custom(function = "validate_team_name"))]
    home: String,
    #[validate(custom(function = "validate_team_name"))]
    away: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(default)]
struct RawSimulation {
    #[validate(range(min = 1))]
    rounds: u32,
    #[validate(range(max = MAX_GOALS_PER_ROUND_LIMIT))]
    max_goals_per_round: u32,
}

impl Default for RawSimulation {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            max_goals_per_round: DEFAULT_MAX_GOALS_PER_ROUND,
        }
    }
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            fixtures: value
                .fixtures
                .into_iter()
                .map(|fixture| Fixture {
                    home: fixture.home,
                    away: fixture.away,
                })
                .collect(),
            simulation: SimulationSettings {
                rounds: value.simulation.rounds,
                max_goals_per_round: value.simulation.max_goals_per_round,
            },
        }
    }
}

fn validate_team_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("team_name_blank");
        err.message = Some("Team name must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in fixtures shipped with the binary.
fn default_fixtures() -> Vec<Fixture> {
    [
        ("Mexico", "Canada"),
        ("Spain", "Brazil"),
        ("Germany", "France"),
        ("Uruguay", "Italy"),
        ("Argentina", "Australia"),
    ]
    .into_iter()
    .map(|(home, away)| Fixture {
        home: home.into(),
        away: away.into(),
    })
    .collect()
}
