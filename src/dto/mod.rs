/// Serializable projections of the scoreboard summary.
pub mod scoreboard;
