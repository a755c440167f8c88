//! # Monty Hall — Monte Carlo simulator for the three-door problem
//!
//! Repeatedly plays the Monty Hall game under a fixed strategy (stay or
//! switch) and tallies wins versus losses, demonstrating empirically that
//! switching wins ~2/3 of the time while staying wins only ~1/3.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`game`] | One randomized trial: prize placement, player pick, goat reveal, switch resolution |
//! | [`simulation`] | Aggregation: sequential loop, seeded parallel batches, run statistics |
//! | [`constants`] | Door count and theoretical win rates |
//! | [`env_config`] | Environment configuration shared by the binaries |
//!
//! ## Why switching wins
//!
//! The host always opens a non-prize, non-chosen door, so switching wins
//! exactly when the initial pick missed the prize (probability 2/3). All
//! trial logic reduces to that closed-form rule; the simulation exists to
//! show it empirically.
//!
//! All randomness flows through caller-supplied [`rand::Rng`] generators,
//! so every trial and every batch is reproducible from a seed.

pub mod constants;
pub mod env_config;
pub mod game;
pub mod simulation;
