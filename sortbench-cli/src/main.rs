// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! sortbench CLI
//!
//! Benchmarks sorting algorithms concurrently on a dataset file and reports
//! timing statistics as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use sortbench_core::Algorithm;
use tracing_subscriber::EnvFilter;

mod commands;

/// sortbench - Concurrent sorting algorithm benchmark
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about, long_about = None)]
#[command(after_help = algorithm_help())]
pub struct Cli {
    /// Input dataset: whitespace-separated integers
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Comma-separated list of algorithms to benchmark
    #[arg(long, value_name = "LIST")]
    pub algorithms: Option<String>,

    /// Timed runs per algorithm [default: 10]
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub runs: Option<i64>,

    /// Untimed warm-up runs per algorithm [default: 0]
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub warmup: Option<i64>,

    /// Check that every algorithm actually sorts the dataset
    #[arg(long)]
    pub verify: bool,

    /// Results file [default: results/results_rust.json]
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List available algorithms and exit
    #[arg(long)]
    pub list: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn algorithm_help() -> String {
    let mut help = String::from("Available algorithms:\n");
    for algorithm in Algorithm::ALL {
        help.push_str(&format!(
            "  {:<16} {}\n",
            algorithm.name(),
            algorithm.complexity()
        ));
    }
    help.push_str("\nExample:\n  sortbench --file data.txt --algorithms quick_sort,merge_sort --runs 5");
    help
}

#[tokio::main]
async fn main() -> ExitCode {
    // No arguments at all behaves like --help
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize logging; stdout is reserved for results
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = if cli.list {
        commands::list::execute();
        Ok(())
    } else {
        commands::run::execute(&cli).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_usage_error() {
                eprintln!("Use --help for usage information.");
            }
            ExitCode::FAILURE
        }
    }
}
