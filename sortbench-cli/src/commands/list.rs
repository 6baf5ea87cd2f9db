// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `sortbench --list` - List the available algorithms.

use sortbench_core::AlgorithmRegistry;

pub fn execute() {
    let registry = AlgorithmRegistry::new();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║               AVAILABLE ALGORITHMS               ║");
    println!("╠══════════════════════╦═══════════════════════════╣");
    println!("║ Name                 ║ Complexity                ║");
    println!("╠══════════════════════╬═══════════════════════════╣");

    for algorithm in registry.algorithms() {
        println!(
            "║ {:<20} ║ {:<25} ║",
            algorithm.name(),
            algorithm.complexity()
        );
    }

    println!("╚══════════════════════╩═══════════════════════════╝");
    println!();
    println!("Total: {} algorithm(s)", registry.len());
}
