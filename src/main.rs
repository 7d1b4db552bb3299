//! Live scoreboard demo runner: starts the configured fixtures, plays a few
//! concurrent scoring rounds and finishes every match.

use std::thread;

use anyhow::{Context, anyhow};
use rand::Rng;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use live_scoreboard::{
    ConcurrentScoreboard, MatchId, ScoreboardResult, config::AppConfig,
    dto::scoreboard::ScoreboardView,
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let settings = config.simulation();
    let fixtures = config.teams().context("building fixture teams")?;
    let scoreboard = ConcurrentScoreboard::shared();

    let ids = fixtures
        .iter()
        .map(|(home, away)| scoreboard.new_match(home, away))
        .collect::<ScoreboardResult<Vec<MatchId>>>()
        .context("starting fixtures")?;
    log_summary(&scoreboard, "kick-off");

    let mut tallies = vec![(0_u32, 0_u32); ids.len()];
    for round in 1..=settings.rounds {
        // One worker per match so score updates race for the scoreboard lock.
        thread::scope(|scope| {
            let workers = ids
                .iter()
                .zip(tallies.iter_mut())
                .map(|(&id, tally)| {
                    let scoreboard = &scoreboard;
                    scope.spawn(move || {
                        play_round(scoreboard, id, tally, settings.max_goals_per_round)
                    })
                })
                .collect::<Vec<_>>();

            workers.into_iter().try_for_each(|worker| -> anyhow::Result<()> {
                worker
                    .join()
                    .map_err(|_| anyhow!("score worker panicked"))?
            })
        })
        .with_context(|| format!("playing round {round}"))?;

        log_summary(&scoreboard, &format!("round {round}"));
    }

    for game in scoreboard.sorted_summary() {
        scoreboard
            .finish_match(game.id())
            .with_context(|| format!("finishing match `{}`", game.id()))?;
        info!(match_id = %game.id(), result = %game, "full time");
    }

    info!(in_progress = scoreboard.len(), "all fixtures finished");
    Ok(())
}

/// Add a random number of goals to both sides of one match.
fn play_round(
    scoreboard: &ConcurrentScoreboard,
    id: MatchId,
    tally: &mut (u32, u32),
    max_goals: u32,
) -> anyhow::Result<()> {
    let mut rng = rand::rng();
    add_goals(
        tally,
        rng.random_range(0..=max_goals),
        rng.random_range(0..=max_goals),
    );

    let home = i32::try_from(tally.0).context("home score out of range")?;
    let away = i32::try_from(tally.1).context("away score out of range")?;
    scoreboard
        .update_score(id, home, away)
        .with_context(|| format!("updating match `{id}`"))
}

fn add_goals(tally: &mut (u32, u32), home: u32, away: u32) {
    tally.0 = tally.0.saturating_add(home);
    tally.1 = tally.1.saturating_add(away);
}

fn log_summary(scoreboard: &ConcurrentScoreboard, stage: &str) {
    let view = ScoreboardView::from(&scoreboard.sorted_summary());
    for (position, line) in view.lines().iter().enumerate() {
        info!(stage, position = position + 1, "{line}");
    }

    match view.to_json() {
        Ok(json) => debug!(stage, %json, "scoreboard snapshot"),
        Err(err) => debug!(stage, error = %err, "failed to render scoreboard snapshot"),
    }
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goals_accumulate_per_side() {
        let mut tally = (1, 0);
        add_goals(&mut tally, 2, 3);
        assert_eq!(tally, (3, 3));
    }

    #[test]
    fn goal_tally_saturates_instead_of_overflowing() {
        let mut tally = (u32::MAX - 1, 7);
        add_goals(&mut tally, u32::MAX, 0);
        assert_eq!(tally, (u32::MAX, 7));
    }
}
