//! Arena CLI
//!
//! Play matches between the bundled strategies from the command line.

use arena::{ArenaConfig, MatchConfig, MatchRunner, MatchSummary};
use chess_rules::Strategy;
use greedy_engine::GreedyEngine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::env;
use std::path::Path;

fn print_usage() {
    println!("Chess Arena");
    println!();
    println!("Usage:");
    println!("  arena match <engine1> <engine2> [--games N] [--depth D] [--max-moves M] [--quiet] [--out FILE]");
    println!("  arena config <file.toml> [--out FILE]");
    println!();
    println!("Engines:");
    println!("  random        - Uniform random legal move");
    println!("  greedy        - First capture found, else random");
    println!("  minimax       - Alpha-beta search (default depth 3)");
    println!("  minimax:D     - Alpha-beta search at depth D");
    println!();
    println!("Examples:");
    println!("  arena match minimax greedy --games 20");
    println!("  arena match minimax:2 random --games 10 --quiet");
    println!("  arena config arena.toml --out results.json");
}

fn create_engine(spec: &str, default_depth: u8) -> Box<dyn Strategy> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "random" => Box::new(RandomEngine::new()),
        "greedy" => Box::new(GreedyEngine::new()),
        "minimax" => {
            let depth = if parts.len() > 1 {
                match parts[1].parse::<u8>() {
                    Ok(d) => d,
                    Err(_) => {
                        eprintln!("Invalid minimax depth: {}", parts[1]);
                        default_depth
                    }
                }
            } else {
                default_depth
            };
            Box::new(MinimaxEngine::with_depth(depth))
        }
        _ => {
            eprintln!("Unknown engine: {} (falling back to random)", spec);
            Box::new(RandomEngine::new())
        }
    }
}

/// Value of `--name <value>` in `args`, if present.
fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn run_and_report(
    spec1: &str,
    spec2: &str,
    depth: u8,
    config: MatchConfig,
    out: Option<&str>,
) -> Result<(), String> {
    let mut engine1 = create_engine(spec1, depth);
    let mut engine2 = create_engine(spec2, depth);

    let result = MatchRunner::new(config.clone()).run_match(engine1.as_mut(), engine2.as_mut());
    let summary = MatchSummary::new(engine1.name(), engine2.name(), result, config);
    println!("{}", summary.report());

    if let Some(path) = out {
        summary.save(Path::new(path))?;
        println!("Saved results to {}", path);
    }
    Ok(())
}

fn run_match_cmd(args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        print_usage();
        return Err("match requires two engine specifications".to_string());
    }

    let mut config = MatchConfig::default();
    if let Some(games) = flag_value(args, "--games") {
        config.num_games = games
            .parse()
            .map_err(|_| format!("Invalid --games value: {}", games))?;
    }
    if let Some(max_moves) = flag_value(args, "--max-moves") {
        config.max_moves = max_moves
            .parse()
            .map_err(|_| format!("Invalid --max-moves value: {}", max_moves))?;
    }
    if args.iter().any(|a| a == "--quiet") {
        config.verbose = false;
    }

    let depth = match flag_value(args, "--depth") {
        Some(d) => d.parse().map_err(|_| format!("Invalid --depth value: {}", d))?,
        None => minimax_engine::DEFAULT_DEPTH,
    };

    let out = flag_value(args, "--out");
    run_and_report(&args[0], &args[1], depth, config, out.as_deref())
}

fn run_config_cmd(args: &[String]) -> Result<(), String> {
    let path = args.first().ok_or("config requires a TOML file path")?;
    let config = ArenaConfig::from_toml_file(Path::new(path))?;
    let out = flag_value(args, "--out");
    run_and_report(
        &config.engine1,
        &config.engine2,
        minimax_engine::DEFAULT_DEPTH,
        config.match_config,
        out.as_deref(),
    )
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let outcome = match args.get(1).map(String::as_str) {
        Some("match") => run_match_cmd(&args[2..]),
        Some("config") => run_config_cmd(&args[2..]),
        _ => {
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
