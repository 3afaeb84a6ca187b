/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Composition-dependent lattice parameters
//!
//! The lattice constant of an alloy composition is obtained by Vegard's law:
//! a fraction-weighted average of the pure-element FCC reference constants.
//! The hexagonal variants (HCP, DHCP) are derived from the same FCC constant
//! under the ideal close-packing convention, which keeps the atomic volume
//! of all three variants identical for a given composition. That shared
//! convention is what makes the per-area energies of the three cells
//! directly comparable downstream.

use crate::atoms::Element;
use crate::composition::{Composition, CompositionError};
use serde::Serialize;
use std::fmt;

/// Pure-element FCC reference lattice constants in Angstrom.
///
/// Al and Ni are room-temperature experimental values; FCC iron is not
/// stable at ambient conditions, so the extrapolated gamma-iron constant is
/// used, as is standard for close-packed alloy interpolation.
pub const AL_FCC_A: f64 = 4.0495;
pub const FE_FCC_A: f64 = 3.5656;
pub const NI_FCC_A: f64 = 3.5240;

/// Crystal structure variants distinguished by their stacking sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Variant {
    Fcc,
    Hcp,
    Dhcp,
}

impl Variant {
    /// All variants, in sweep order
    pub const ALL: [Variant; 3] = [Variant::Fcc, Variant::Hcp, Variant::Dhcp];

    /// Conventional upper-case tag (`FCC`, `HCP`, `DHCP`)
    pub fn tag(&self) -> &'static str {
        match self {
            Variant::Fcc => "FCC",
            Variant::Hcp => "HCP",
            Variant::Dhcp => "DHCP",
        }
    }

    /// Lower-case tag used in file names (`structure_fcc.data`)
    pub fn file_tag(&self) -> &'static str {
        match self {
            Variant::Fcc => "fcc",
            Variant::Hcp => "hcp",
            Variant::Dhcp => "dhcp",
        }
    }

    /// Number of close-packed layers in one stacking period.
    ///
    /// FCC is built from its cubic cell rather than from layers, so its
    /// period places no constraint on the replication counts.
    pub fn stacking_period(&self) -> usize {
        match self {
            Variant::Fcc => 1,
            Variant::Hcp => 2,
            Variant::Dhcp => 4,
        }
    }

    /// Zero-based index used for seed derivation and ordering
    pub fn index(&self) -> usize {
        match self {
            Variant::Fcc => 0,
            Variant::Hcp => 1,
            Variant::Dhcp => 2,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Supercell replication counts along the three lattice vectors.
///
/// For the hexagonal variants `n3` counts individual close-packed layers
/// along the stacking axis, so it must be a multiple of the variant's
/// stacking period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Replication {
    pub n1: usize,
    pub n2: usize,
    pub n3: usize,
}

impl Replication {
    /// Create replication counts
    pub fn new(n1: usize, n2: usize, n3: usize) -> Self {
        Self { n1, n2, n3 }
    }

    /// Default counts per variant: FCC 6x6x6 cells, HCP/DHCP 6x6x12 layers.
    /// Both defaults produce 864-atom supercells.
    pub fn default_for(variant: Variant) -> Self {
        match variant {
            Variant::Fcc => Self::new(6, 6, 6),
            Variant::Hcp | Variant::Dhcp => Self::new(6, 6, 12),
        }
    }
}

/// Error types for lattice parameter evaluation
#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    #[error(transparent)]
    Composition(#[from] CompositionError),

    #[error("replication counts {n1}x{n2}x{n3} are invalid for {variant}: {reason}")]
    InvalidReplication {
        variant: Variant,
        n1: usize,
        n2: usize,
        n3: usize,
        reason: String,
    },
}

/// Result type for lattice operations
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Fully resolved lattice geometry for one (composition, variant) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeSpec {
    /// Structure variant
    pub variant: Variant,
    /// Cubic constant (FCC) or in-plane hexagonal constant (HCP/DHCP), Angstrom
    pub a: f64,
    /// Stacking-period height for the hexagonal variants, Angstrom
    pub c: Option<f64>,
    /// Supercell replication counts
    pub replication: Replication,
}

impl LatticeSpec {
    /// Spacing between adjacent close-packed layers (hexagonal variants only)
    pub fn interlayer_spacing(&self) -> Option<f64> {
        self.c.map(|c| c / self.variant.stacking_period() as f64)
    }
}

/// Evaluate the Vegard's-law FCC lattice constant for a composition
pub fn vegard_fcc_constant(composition: &Composition) -> f64 {
    composition.fraction(Element::Al) * AL_FCC_A
        + composition.fraction(Element::Fe) * FE_FCC_A
        + composition.fraction(Element::Ni) * NI_FCC_A
}

/// Resolve the lattice geometry for a (composition, variant) pair.
///
/// The composition is re-validated here so that the function honors its
/// contract even for values constructed outside the grid table.
pub fn lattice_for(
    composition: &Composition,
    variant: Variant,
    replication: Replication,
) -> Result<LatticeSpec> {
    composition.validate()?;
    validate_replication(variant, replication)?;

    let a_fcc = vegard_fcc_constant(composition);

    let spec = match variant {
        Variant::Fcc => LatticeSpec {
            variant,
            a: a_fcc,
            c: None,
            replication,
        },
        Variant::Hcp | Variant::Dhcp => {
            // Ideal close packing: the in-plane constant is the FCC
            // nearest-neighbour distance, and the interlayer spacing keeps
            // the FCC atomic volume a_fcc^3 / 4.
            let a_hex = a_fcc / std::f64::consts::SQRT_2;
            let spacing = a_hex * (2.0_f64 / 3.0).sqrt();
            LatticeSpec {
                variant,
                a: a_hex,
                c: Some(spacing * variant.stacking_period() as f64),
                replication,
            }
        }
    };

    Ok(spec)
}

fn validate_replication(variant: Variant, replication: Replication) -> Result<()> {
    let Replication { n1, n2, n3 } = replication;

    if n1 == 0 || n2 == 0 || n3 == 0 {
        return Err(LatticeError::InvalidReplication {
            variant,
            n1,
            n2,
            n3,
            reason: "counts must be positive".to_string(),
        });
    }

    let period = variant.stacking_period();
    if n3 % period != 0 {
        return Err(LatticeError::InvalidReplication {
            variant,
            n1,
            n2,
            n3,
            reason: format!("n3 must be a multiple of the {}-layer stacking period", period),
        });
    }

    Ok(())
}
