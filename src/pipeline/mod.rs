/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Parallel structure generation over the composition grid
//!
//! The sweep is a fixed task list: 21 compositions x 3 variants = 63
//! independent pipelines (lattice -> supercell -> assignment -> data file),
//! fanned out over a rayon pool. Tasks share nothing mutable; each derives
//! its own RNG seed from the global seed and its task key, so the output of
//! any task is independent of scheduling order. A failed task is logged and
//! recorded while its siblings continue.

use crate::assign::{self, AssignError};
use crate::composition::grid::{grid, GridPoint};
use crate::lattice::{lattice_for, LatticeError, Replication, Variant};
use crate::supercell::{self, GeometryError};
use crate::writer::{self, WriteError};
use log::{debug, error, info};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default global seed; fixed so that repeated runs reproduce bit-identical
/// structure files.
pub const DEFAULT_SEED: u64 = 20260807;

/// Configuration for one generation sweep
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Root directory for the per-composition output tree
    pub output_dir: PathBuf,
    /// Global random seed
    pub seed: u64,
    /// Replication counts for the FCC cells
    pub fcc_cells: Replication,
    /// Replication counts for the HCP/DHCP cells (n3 in layers)
    pub hex_cells: Replication,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("structures"),
            seed: DEFAULT_SEED,
            fcc_cells: Replication::default_for(Variant::Fcc),
            hex_cells: Replication::default_for(Variant::Hcp),
        }
    }
}

impl GenerateConfig {
    fn replication_for(&self, variant: Variant) -> Replication {
        match variant {
            Variant::Fcc => self.fcc_cells,
            Variant::Hcp | Variant::Dhcp => self.hex_cells,
        }
    }
}

/// Error types for a single generation task
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Assign(#[from] AssignError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error types for the sweep itself (output-root bookkeeping)
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest serialization error: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// One successfully generated structure
#[derive(Debug, Clone, Serialize)]
pub struct StructureRecord {
    /// Composition grid id (1-based)
    pub composition_id: usize,
    /// Composition label, e.g. `Al25Fe50Ni25`
    pub composition: String,
    /// Structure variant
    pub variant: Variant,
    /// Number of atoms
    pub atoms: usize,
    /// Box edge lengths in Angstrom
    pub lx: f64,
    pub ly: f64,
    pub lz: f64,
    /// Box volume in cubic Angstrom
    pub volume: f64,
    /// Cross-sectional area of the plane perpendicular to the stacking
    /// axis, in square Angstrom. The FCC entry is the reference area for
    /// the downstream per-area energy normalization.
    pub cross_section_area: f64,
    /// Task seed the site assignment was drawn from
    pub seed: u64,
    /// Path of the written data file
    pub path: PathBuf,
}

/// A failed task with its grid context
#[derive(Debug)]
pub struct TaskFailure {
    pub composition_id: usize,
    pub composition: String,
    pub variant: Variant,
    pub error: TaskError,
}

/// Outcome of a full sweep
#[derive(Debug)]
pub struct GenerateReport {
    pub records: Vec<StructureRecord>,
    pub failures: Vec<TaskFailure>,
}

impl GenerateReport {
    /// Total number of tasks attempted
    pub fn task_count(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

// splitmix64 finalizer; bijective on u64, so distinct task streams can
// never collide for a fixed global seed.
fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derive the per-task seed from the global seed and the task key.
///
/// A pure function of `(global_seed, composition_id, variant)`: parallel
/// scheduling can never change what any individual task generates.
pub fn task_seed(global_seed: u64, composition_id: usize, variant: Variant) -> u64 {
    let stream = (composition_id as u64)
        .wrapping_mul(Variant::ALL.len() as u64)
        .wrapping_add(variant.index() as u64);
    splitmix64(global_seed ^ stream)
}

/// Run the full sweep: every grid composition times every variant.
///
/// Returns the per-task outcomes after writing the structure files, the
/// human-readable `structures_summary.txt`, and the machine-readable
/// `structures_manifest.json` under the output root.
pub fn generate_all(config: &GenerateConfig) -> Result<GenerateReport> {
    fs::create_dir_all(&config.output_dir)?;

    let tasks: Vec<(&GridPoint, Variant)> = grid()
        .iter()
        .flat_map(|point| Variant::ALL.iter().map(move |&variant| (point, variant)))
        .collect();

    info!(
        "generating {} structures under {} (seed {})",
        tasks.len(),
        config.output_dir.display(),
        config.seed
    );

    let outcomes: Vec<std::result::Result<StructureRecord, TaskFailure>> = tasks
        .par_iter()
        .map(|&(point, variant)| {
            run_task(config, point, variant).map_err(|error| {
                error!(
                    "task {} {} failed: {}",
                    point.composition().label(),
                    variant,
                    error
                );
                TaskFailure {
                    composition_id: point.id(),
                    composition: point.composition().label(),
                    variant,
                    error,
                }
            })
        })
        .collect();

    let mut records = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(record) => records.push(record),
            Err(failure) => failures.push(failure),
        }
    }

    write_summary(&config.output_dir, &records)?;
    write_manifest(&config.output_dir, &records)?;

    info!(
        "sweep finished: {} structures written, {} failures",
        records.len(),
        failures.len()
    );

    Ok(GenerateReport { records, failures })
}

fn run_task(
    config: &GenerateConfig,
    point: &GridPoint,
    variant: Variant,
) -> std::result::Result<StructureRecord, TaskError> {
    let composition = point.composition();
    let replication = config.replication_for(variant);

    let spec = lattice_for(composition, variant, replication)?;
    let supercell = supercell::build(&spec)?;

    let seed = task_seed(config.seed, point.id(), variant);
    let result = assign::assign(supercell, composition, seed)?;

    let composition_dir = config.output_dir.join(point.directory_name());
    fs::create_dir_all(&composition_dir)?;
    let path = composition_dir.join(format!("structure_{}.data", variant.file_tag()));
    writer::write_data_file(&result, &path)?;

    let supercell = result.supercell();
    let (lx, ly, lz) = supercell.box_lengths();
    debug!(
        "wrote {} ({} {}, {} atoms)",
        path.display(),
        composition.label(),
        variant,
        supercell.site_count()
    );

    Ok(StructureRecord {
        composition_id: point.id(),
        composition: composition.label(),
        variant,
        atoms: supercell.site_count(),
        lx,
        ly,
        lz,
        volume: supercell.volume(),
        cross_section_area: supercell.cross_section_area(),
        seed,
        path,
    })
}

// One line per structure: label, variant, atoms, box, volume, area. The
// area column is what the downstream SFE normalization reads for FCC.
fn write_summary(output_dir: &Path, records: &[StructureRecord]) -> Result<()> {
    let file = File::create(output_dir.join("structures_summary.txt"))?;
    let mut out = BufWriter::new(file);
    for record in records {
        writeln!(
            out,
            "{} {} {} {:.6} {:.6} {:.6} {:.6} {:.6}",
            record.composition,
            record.variant,
            record.atoms,
            record.lx,
            record.ly,
            record.lz,
            record.volume,
            record.cross_section_area
        )?;
    }
    out.flush()?;
    Ok(())
}

fn write_manifest(output_dir: &Path, records: &[StructureRecord]) -> Result<()> {
    let file = File::create(output_dir.join("structures_manifest.json"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)?;
    Ok(())
}
