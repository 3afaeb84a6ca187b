/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Argument handling for the `sfe-rs` binary. The options cover the knobs
//! the sweep exposes: output root, global seed, per-family replication
//! counts, and the worker pool size.

use crate::lattice::Replication;
use crate::pipeline::{GenerateConfig, DEFAULT_SEED};
use clap::Parser;
use std::path::PathBuf;

/// Generate LAMMPS supercells for the Al-Fe-Ni SFE composition sweep
#[derive(Parser, Debug)]
#[command(name = "sfe-rs", version, about)]
pub struct Cli {
    /// Root directory for the generated structure tree
    #[arg(short, long, default_value = "structures")]
    pub output: PathBuf,

    /// Global random seed for site assignment
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// FCC supercell replication (cubic cells along x, y, z)
    #[arg(long, num_args = 3, value_names = ["N1", "N2", "N3"], default_values_t = [6, 6, 6])]
    pub fcc_cells: Vec<usize>,

    /// HCP/DHCP supercell replication (in-plane cells and stacked layers)
    #[arg(long, num_args = 3, value_names = ["N1", "N2", "LAYERS"], default_values_t = [6, 6, 12])]
    pub hex_cells: Vec<usize>,

    /// Number of worker threads (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,
}

impl Cli {
    /// Translate the parsed arguments into a pipeline configuration
    pub fn generate_config(&self) -> GenerateConfig {
        GenerateConfig {
            output_dir: self.output.clone(),
            seed: self.seed,
            fcc_cells: Replication::new(self.fcc_cells[0], self.fcc_cells[1], self.fcc_cells[2]),
            hex_cells: Replication::new(self.hex_cells[0], self.hex_cells[1], self.hex_cells[2]),
        }
    }
}
