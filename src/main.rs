/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for sfe-rs

use clap::Parser;
use sfe_rs::cli::Cli;
use sfe_rs::pipeline;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    println!("sfe-rs v{}", sfe_rs::VERSION);
    println!("Periodic supercell builder for Al-Fe-Ni stacking-fault-energy studies");

    let config = cli.generate_config();
    let report = pipeline::generate_all(&config)?;

    println!(
        "Wrote {} of {} structures to {}",
        report.records.len(),
        report.task_count(),
        config.output_dir.display()
    );

    if !report.failures.is_empty() {
        for failure in &report.failures {
            eprintln!(
                "failed: {} {}: {}",
                failure.composition, failure.variant, failure.error
            );
        }
        anyhow::bail!("{} task(s) failed", report.failures.len());
    }

    Ok(())
}
