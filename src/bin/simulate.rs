use monty_hall::env_config;
use monty_hall::game::Strategy;
use monty_hall::simulation::{aggregate_statistics, save_statistics, simulate_batch};

struct Args {
    num_games: usize,
    strategy: Strategy,
    seed: u64,
    output: Option<String>,
}

const USAGE: &str = "Usage: monty-simulate NUM_GAMES [-s|--switch] [--seed S] [--output DIR]";

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut num_games: Option<i64> = None;
    let mut strategy = Strategy::Stay;
    let mut seed = 42u64;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        // A bare integer (including a negative one) is the positional
        // NUM_GAMES; everything else is a flag.
        if let Ok(n) = args[i].parse::<i64>() {
            if num_games.is_some() {
                eprintln!("Unexpected extra argument: {}", args[i]);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
            num_games = Some(n);
            i += 1;
            continue;
        }
        match args[i].as_str() {
            "-s" | "--switch" => {
                strategy = Strategy::Switch;
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
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!();
                println!("Monte Carlo simulation of the Monty Hall problem.");
                println!();
                println!("Arguments:");
                println!("  NUM_GAMES          Number of times to simulate the game (>= 0)");
                println!();
                println!("Options:");
                println!("  -s, --switch       Take the 'switch doors' opportunity every game");
                println!("  --seed S           RNG seed (default: 42)");
                println!("  --output DIR       Write run_statistics.json to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let num_games = num_games.unwrap_or_else(|| {
        eprintln!("Missing required NUM_GAMES argument");
        eprintln!("{}", USAGE);
        std::process::exit(1);
    });

    // The one validation in the system: reject a negative trial count
    // before any simulation runs.
    if num_games < 0 {
        eprintln!(
            "Number of games to simulate must be non-negative (got {})",
            num_games
        );
        std::process::exit(1);
    }

    Args {
        num_games: num_games as usize,
        strategy,
        seed,
        output,
    }
}

fn main() {
    let args = parse_args();
    let num_threads = env_config::init_rayon_threads();

    println!("Monty Hall Simulation ({} games)", args.num_games);
    println!("  Strategy:    {}", args.strategy.name());
    println!("  Seed:        {}", args.seed);
    println!();

    println!(
        "Simulating {} games ({} threads)...",
        args.num_games, num_threads
    );
    let result = simulate_batch(args.num_games, args.strategy, args.seed);
    let stats = aggregate_statistics(&result);

    println!(
        "  Elapsed:     {:.1} ms",
        result.elapsed.as_secs_f64() * 1000.0
    );
    if result.num_games > 0 {
        let throughput = result.num_games as f64 / result.elapsed.as_secs_f64();
        println!("  Throughput:  {:.0} games/sec", throughput);
    }
    println!();

    println!("Results:");
    println!("  Total games: {}", stats.num_games);
    println!("  Won:         {}", stats.won);
    println!("  Lost:        {}", stats.lost);
    println!(
        "  Win rate:    {:.4} (expected {:.4}, z = {:+.2})",
        stats.win_rate, stats.expected_rate, stats.z_score
    );

    if stats.z_score.abs() > 3.5 {
        eprintln!(
            "WARNING: Win rate deviates from the theoretical rate by {:.1} standard errors — possible bug!",
            stats.z_score.abs()
        );
    }

    if let Some(ref output_dir) = args.output {
        let path = format!("{}/run_statistics.json", output_dir);
        save_statistics(&stats, &path);
        println!();
        println!("  Statistics:  {}", path);
    }
}
