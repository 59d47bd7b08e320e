//! island-evo CLI - run an in-process archipelago from a TOML file.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use island_evo::algorithms::island::{Archipelago, ArchipelagoReport};
use island_evo::config::loader::load_from_file;

/// Configuration could not be turned into an archipelago
const EXIT_CREATE: u8 = 1;
/// Configuration could not be read or parsed
const EXIT_PARSE: u8 = 2;
/// The run itself failed
const EXIT_RUN: u8 = 3;

/// Island-model genetic algorithm
#[derive(Parser, Debug)]
#[command(name = "island-evo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run configuration (TOML)
    #[arg(default_value = "island.toml")]
    config: PathBuf,

    /// Random seed, overriding the configuration
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: OutputFormat,
}

/// How the final report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Machine-readable JSON report
    Json,
    /// Human-readable summary
    Summary,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = island_evo::init_tracing() {
        eprintln!("warning: {e}");
    }

    let mut config = match load_from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_PARSE);
        }
    };
    if let Some(seed) = args.seed {
        config.algorithm.seed = Some(seed);
    }

    let mut archipelago = match Archipelago::from_config(&config) {
        Ok(archipelago) => archipelago,
        Err(e) => {
            eprintln!("error: could not create archipelago: {e}");
            return ExitCode::from(EXIT_CREATE);
        }
    };

    let report = match archipelago.run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: run failed: {e}");
            return ExitCode::from(EXIT_RUN);
        }
    };

    match args.output {
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: could not serialize report: {e}");
                return ExitCode::from(EXIT_RUN);
            }
        },
        OutputFormat::Summary => print_summary(&report),
    }
    ExitCode::SUCCESS
}

fn print_summary(report: &ArchipelagoReport) {
    println!("Rounds:          {}", report.rounds);
    println!("Evaluations:     {}", report.total_evaluations());
    println!("Best objective:  {:.6e}", report.best_objective);
    if let Some(island) = report.best_island {
        println!("Best island:     {island}");
    }
    println!();
    for (index, snapshot) in report.islands.iter().enumerate() {
        println!(
            "island {:>3}  generations {:>7}  evals {:>9}  best {:.6e}",
            index,
            snapshot.stats.iterations,
            snapshot.stats.fitness_evals,
            snapshot.stats.best_fitness
        );
    }
    if let Some(chromosome) = &report.best_chromosome {
        let genes: Vec<String> = chromosome.iter().map(|g| format!("{g:.4}")).collect();
        println!();
        println!("Best chromosome: [{}]", genes.join(", "));
    }
}
