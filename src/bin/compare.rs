//! Head-to-head experiment: stay vs. switch over the same number of games.
//!
//! Runs both strategies from the same seed and prints their win rates side
//! by side with the switch-over-stay margin. The theoretical margin is
//! 2/3 - 1/3 = 1/3.

use monty_hall::constants::{STAY_WIN_RATE, SWITCH_WIN_RATE};
use monty_hall::env_config;
use monty_hall::game::Strategy;
use monty_hall::simulation::{aggregate_statistics, simulate_batch};

struct Args {
    num_games: usize,
    seed: u64,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut num_games = 100_000usize;
    let mut seed = 42u64;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                if i < args.len() {
                    num_games = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --games value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--help" | "-h" => {
                println!("Usage: monty-compare [--games N] [--seed S]");
                println!();
                println!("Stay vs. switch head-to-head over identical conditions.");
                println!("  --games N     Games per strategy (default: 100000)");
                println!("  --seed S      RNG seed (default: 42)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args { num_games, seed }
}

fn main() {
    let args = parse_args();
    let num_threads = env_config::init_rayon_threads();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Monty Hall Head-to-Head: Stay vs. Switch");
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Games per strategy: {:>12}", args.num_games);
    println!("  Seed:               {:>12}", args.seed);
    println!("  Threads:            {:>12}", num_threads);
    println!();

    println!(
        "  {:>20} {:>10} {:>10} {:>8} {:>9}",
        "Strategy", "Won", "Lost", "Rate", "Expected"
    );
    println!("  {}", "─".repeat(62));

    let mut rates = [0.0f64; 2];
    for (slot, strategy) in [Strategy::Stay, Strategy::Switch].into_iter().enumerate() {
        let result = simulate_batch(args.num_games, strategy, args.seed);
        let stats = aggregate_statistics(&result);
        println!(
            "  {:>20} {:>10} {:>10} {:>8.4} {:>9.4}  ({:.2}s)",
            stats.strategy,
            stats.won,
            stats.lost,
            stats.win_rate,
            stats.expected_rate,
            result.elapsed.as_secs_f64()
        );
        rates[slot] = stats.win_rate;
    }
    println!();

    let margin = rates[1] - rates[0];
    println!(
        "  Switch margin: {:+.4} ({:+.1} pp over stay; theory {:+.4})",
        margin,
        margin * 100.0,
        SWITCH_WIN_RATE - STAY_WIN_RATE
    );
}
