//! Run statistics: empirical win rate against the theoretical rate.
//!
//! The z-score quantifies how far the empirical rate sits from the
//! theoretical one (1/3 stay, 2/3 switch) in standard errors. A correct
//! simulation stays within |z| < 3 for any large run.

use serde::Serialize;

use crate::constants::{STAY_WIN_RATE, SWITCH_WIN_RATE};
use crate::game::Strategy;

use super::engine::SimulationResult;

#[derive(Serialize)]
pub struct RunStatistics {
    pub num_games: u64,
    pub seed: u64,
    pub strategy: String,
    pub won: u64,
    pub lost: u64,
    pub win_rate: f64,
    /// Theoretical win probability for the strategy.
    pub expected_rate: f64,
    /// Standard error of the empirical rate: sqrt(p(1-p)/n).
    pub std_error: f64,
    /// Deviation from the theoretical rate in standard errors.
    pub z_score: f64,
}

/// Theoretical win probability for a strategy.
pub fn expected_rate(strategy: Strategy) -> f64 {
    match strategy {
        Strategy::Stay => STAY_WIN_RATE,
        Strategy::Switch => SWITCH_WIN_RATE,
    }
}

/// Aggregate statistics for one finished run.
pub fn aggregate_statistics(result: &SimulationResult) -> RunStatistics {
    let n = result.tally.total();
    let p = expected_rate(result.strategy);
    let std_error = if n == 0 {
        0.0
    } else {
        (p * (1.0 - p) / n as f64).sqrt()
    };
    let z_score = if std_error == 0.0 {
        0.0
    } else {
        (result.tally.win_rate() - p) / std_error
    };

    RunStatistics {
        num_games: n,
        seed: result.seed,
        strategy: result.strategy.name().to_string(),
        won: result.tally.won,
        lost: result.tally.lost,
        win_rate: result.tally.win_rate(),
        expected_rate: p,
        std_error,
        z_score,
    }
}

/// Write statistics as pretty JSON, creating parent directories.
pub fn save_statistics(stats: &RunStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}
