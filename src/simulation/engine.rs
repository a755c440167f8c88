//! Simulation engine: plays N trials under a fixed strategy.
//!
//! The sequential loop drives one shared generator. The parallel batch
//! gives every trial its own `SmallRng` derived from `seed + trial_index`,
//! so a batch is reproducible regardless of thread count, and combines
//! per-worker counts with a non-racing reduction.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

use crate::game::{play_trial, Strategy};

/// Win/loss counters accumulated over a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub won: u64,
    pub lost: u64,
}

impl Tally {
    /// Total trials recorded. Always equals the requested game count.
    #[inline]
    pub fn total(&self) -> u64 {
        self.won + self.lost
    }

    /// Fraction of trials won. An empty tally reports 0.
    pub fn win_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.won as f64 / self.total() as f64
        }
    }
}

/// Results of a batch simulation.
pub struct SimulationResult {
    pub tally: Tally,
    pub strategy: Strategy,
    pub num_games: usize,
    pub seed: u64,
    pub elapsed: std::time::Duration,
}

/// Run `num_games` trials sequentially with one shared generator.
///
/// Guarantees `won + lost == num_games`; zero games returns an empty
/// tally. Callers reject negative counts before reaching this loop.
pub fn simulate_games<R: Rng>(num_games: usize, strategy: Strategy, rng: &mut R) -> Tally {
    let mut tally = Tally::default();
    for _ in 0..num_games {
        if play_trial(strategy, rng) {
            tally.won += 1;
        } else {
            tally.lost += 1;
        }
    }
    tally
}

/// Run `num_games` trials in parallel, one derived generator per trial.
///
/// Trials are independent, so the only shared state is the win count,
/// reduced via `sum` over per-worker partials.
pub fn simulate_batch(num_games: usize, strategy: Strategy, seed: u64) -> SimulationResult {
    let start = Instant::now();

    let won: u64 = (0..num_games)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            play_trial(strategy, &mut rng) as u64
        })
        .sum();

    let elapsed = start.elapsed();

    SimulationResult {
        tally: Tally {
            won,
            lost: num_games as u64 - won,
        },
        strategy,
        num_games,
        seed,
        elapsed,
    }
}
