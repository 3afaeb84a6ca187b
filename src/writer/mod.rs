/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! LAMMPS data file serialization
//!
//! Writes a labeled supercell in the `read_data` format consumed by the MD
//! engine: metal units, `atom_style atomic`, orthogonal box with explicit
//! zero tilt factors. Field order and formatting are part of the contract
//! with the engine's parser and must not change.

use crate::assign::AssignmentResult;
use crate::atoms::Element;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Error types for structure writing
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("inconsistent assignment: {0}")]
    Inconsistency(String),
}

/// Result type for writer operations
pub type Result<T> = std::result::Result<T, WriteError>;

/// Serialize an assignment result to a LAMMPS data file
pub fn write_data_file(result: &AssignmentResult, path: &Path) -> Result<()> {
    check_consistency(result)?;

    let supercell = result.supercell();
    let (lx, ly, lz) = supercell.box_lengths();

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(
        out,
        "# {} {} supercell, {} atoms (metal units, seed {})",
        result.composition().label(),
        supercell.variant(),
        supercell.site_count(),
        result.seed()
    )?;
    writeln!(out)?;
    writeln!(out, "{} atoms", supercell.site_count())?;
    writeln!(out, "{} atom types", Element::ALL.len())?;
    writeln!(out)?;
    writeln!(out, "0.000000 {:.6} xlo xhi", lx)?;
    writeln!(out, "0.000000 {:.6} ylo yhi", ly)?;
    writeln!(out, "0.000000 {:.6} zlo zhi", lz)?;
    writeln!(out, "0.000000 0.000000 0.000000 xy xz yz")?;
    writeln!(out)?;
    writeln!(out, "Masses")?;
    writeln!(out)?;
    for element in Element::ALL {
        writeln!(out, "{} {:.4} # {}", element.type_id(), element.mass(), element.symbol())?;
    }
    writeln!(out)?;
    writeln!(out, "Atoms # atomic")?;
    writeln!(out)?;
    for (site, label) in supercell.sites().iter().zip(result.labels()) {
        let p = site.position();
        writeln!(
            out,
            "{} {} {:.6} {:.6} {:.6}",
            site.id(),
            label.type_id(),
            p.x,
            p.y,
            p.z
        )?;
    }

    out.flush()?;
    Ok(())
}

// Defensive pre-commit check: the stored counts must agree with the labels
// actually being written and with the site count.
fn check_consistency(result: &AssignmentResult) -> Result<()> {
    let site_count = result.supercell().site_count();
    if result.labels().len() != site_count {
        return Err(WriteError::Inconsistency(format!(
            "{} labels for {} sites",
            result.labels().len(),
            site_count
        )));
    }

    let realized = realized_counts(result.labels());
    if realized != result.counts() {
        return Err(WriteError::Inconsistency(format!(
            "stored counts {:?} do not match labels {:?}",
            result.counts(),
            realized
        )));
    }

    Ok(())
}

fn realized_counts(labels: &[Element]) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for label in labels {
        counts[label.index()] += 1;
    }
    counts
}
