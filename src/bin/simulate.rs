//! Warrior progression simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 1000 warriors
//!   cargo run --bin simulate -- -n 100 -a 500     # 100 warriors, 500 actions each
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;
use warrior::simulator::{run_simulation, SimConfig};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    init_tracing(config.verbosity);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              WARRIOR PROGRESSION SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Actions:    {}", config.max_actions_per_run);
    println!("  Train Chance:   {:.0}%", config.training_chance * 100.0);
    println!("  Regimens:       {}", config.regimens.len());
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "warrior_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json)?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

/// Logs go to stderr. `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbosity: u8) {
    let default_level = if verbosity >= 2 { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Presets pick the starting config; explicit flags are applied on top, so
/// flag order does not matter.
fn parse_args(args: &[String]) -> SimConfig {
    let mut config = preset_config(args);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(config.num_runs);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-a" | "--actions" => {
                if i + 1 < args.len() {
                    config.max_actions_per_run =
                        args[i + 1].parse().unwrap_or(config.max_actions_per_run);
                    i += 1;
                }
            }
            "--train-chance" => {
                if i + 1 < args.len() {
                    if let Ok(chance) = args[i + 1].parse::<f64>() {
                        if chance.is_finite() {
                            config.training_chance = chance.clamp(0.0, 1.0);
                        }
                    }
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

/// Starting config from `--quick` and `--battles-only`, which combine.
fn preset_config(args: &[String]) -> SimConfig {
    let has_flag = |flag: &str| args.iter().skip(1).any(|a| a == flag);

    let mut config = if has_flag("--quick") {
        SimConfig::quick()
    } else {
        SimConfig::default()
    };
    if has_flag("--battles-only") {
        config.training_chance = SimConfig::battles_only().training_chance;
    }
    config
}

fn print_help() {
    println!("Warrior Progression Simulator");
    println!();
    println!("USAGE:");
    println!("    simulate [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>          Number of warriors to simulate (default: 1000)");
    println!("    -s, --seed <SEED>       Random seed for reproducibility");
    println!("    -a, --actions <N>       Max actions per warrior (default: 10000)");
    println!("    --train-chance <P>      Chance an action is training, 0.0-1.0 (default: 0.2)");
    println!("    --battles-only          Never train");
    println!("    --quick                 100 warriors, 2000 actions each");
    println!("    --json                  Also save the report as JSON");
    println!("    -v, --verbose           Per-run output and debug logs");
    println!("    -h, --help              Show this help");
}
