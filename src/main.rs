//! 100 prisoners simulator CLI.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Examples:
//!   cargo run --release                             # 100 boxes, 100k trials, loop strategy
//!   cargo run --release -- -b 50 -n 10000           # 50 boxes, 10k trials
//!   cargo run --release -- --strategy random --single
//!   cargo run --release -- --seed 42                # Reproducible batch

use prisoners::simulator::{run_simulation, SimConfig};
use prisoners::strategy::StrategyKind;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, print_json) = parse_args(&args);

    if config.verbosity >= 1 && !print_json {
        println!("Configuration:");
        println!("  Boxes/Prisoners: {}", config.size);
        println!("  Trials:          {}", config.num_trials);
        println!("  Strategy:        {}", config.strategy.name());
        if config.single_prisoner {
            println!("  Mode:            single prisoner");
        }
        if let Some(seed) = config.seed {
            println!("  Seed:            {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&config);

    if print_json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut print_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-b" | "--boxes" => {
                config.size = parse_value(args, i, "--boxes");
                i += 1;
            }
            "-n" | "--trials" => {
                config.num_trials = parse_value(args, i, "--trials");
                i += 1;
            }
            "--strategy" => {
                let name = required_value(args, i, "--strategy");
                config.strategy = match StrategyKind::from_name(name) {
                    Some(kind) => kind,
                    None => {
                        eprintln!("Unknown strategy: {}", name);
                        eprintln!(
                            "Available strategies: {}",
                            StrategyKind::ALL
                                .map(|k| k.name())
                                .join(", ")
                        );
                        std::process::exit(1);
                    }
                };
                i += 1;
            }
            "--single" => {
                config.single_prisoner = true;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(args, i, "--seed"));
                i += 1;
            }
            "--quick" => {
                let strategy = config.strategy;
                let single = config.single_prisoner;
                config = SimConfig::quick_check();
                config.strategy = strategy;
                config.single_prisoner = single;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {
                print_json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if config.size < 1 {
        eprintln!("Box count must be at least 1");
        std::process::exit(1);
    }

    (config, print_json)
}

/// Fetch and parse the value following a flag, exiting with usage help on
/// a missing or malformed one.
fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let raw = required_value(args, i, flag);
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Invalid value for {}: {}", flag, raw);
            std::process::exit(1);
        }
    }
}

fn required_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i + 1) {
        Some(value) => value,
        None => {
            eprintln!("Missing value for {}", flag);
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("100 Prisoners Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --release -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -b, --boxes <B>       Number of boxes and prisoners (default: 100)");
    println!("    -n, --trials <N>      Number of independent trials (default: 100000)");
    println!("    --strategy <NAME>     Box-picking strategy: loop, random (default: loop)");
    println!("    --single              Simulate only the first prisoner's attempt");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    --quick               Quick batch (1000 trials)");
    println!("    -q, --quiet           Suppress the configuration banner");
    println!("    -v, --verbose         Print each trial's outcome (runs sequentially)");
    println!("    --json                Print the report as JSON");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --release                          # Classic setup");
    println!("    cargo run --release -- --strategy random     # Doomed baseline");
    println!("    cargo run --release -- --single -b 2 -n 100000");
    println!("    cargo run --release -- --seed 42 --json");
}
