// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI tool to generate synthetic integer datasets for sortbench.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use sortbench_core::generator::{sorted_pair_percentage, write_dataset};
use sortbench_core::{DatasetGenerator, DatasetSize, Distribution, Perturbation};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sortbench-gen")]
#[command(version, about = "Generate synthetic integer datasets for sortbench")]
struct Args {
    /// Number of values to generate (1 to 500000)
    #[arg(long)]
    size: DatasetSize,

    /// Value distribution: uniform, normal, exponential or beta
    #[arg(long, default_value_t = Distribution::Uniform)]
    distribution: Distribution,

    /// Fraction of the data left unsorted, from 0.0 (sorted) to 1.0 (random)
    #[arg(long, default_value = "1.0")]
    perturbation: Perturbation,

    /// Output file, one integer per line
    #[arg(short, long)]
    output: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // No arguments at all behaves like --help
    if std::env::args_os().len() <= 1 {
        let _ = Args::command().print_help();
        return ExitCode::SUCCESS;
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut generator = DatasetGenerator::new(args.seed);
    let values = generator.generate(args.size, args.distribution, args.perturbation);

    if let Err(e) = write_dataset(&args.output, &values) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let min = values.iter().min().copied().unwrap_or_default();
    let max = values.iter().max().copied().unwrap_or_default();

    println!("Dataset written to {}", args.output.display());
    println!("  Size:          {}", values.len());
    println!("  Distribution:  {}", args.distribution);
    println!("  Perturbation:  {}", args.perturbation);
    println!("  Value range:   [{}, {}]", min, max);
    println!("  Sorted pairs:  {:.2}%", sorted_pair_percentage(&values));

    ExitCode::SUCCESS
}
