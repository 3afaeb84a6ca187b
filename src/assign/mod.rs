/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Stoichiometric site assignment
//!
//! Assignment labels every site of a supercell with an element so that the
//! realized counts match the target composition exactly under the
//! documented rounding policy: the Al and Fe counts are `round(x * N)` and
//! Ni absorbs the rounding remainder, which guarantees the three counts sum
//! to N. The label multiset is shuffled by a Fisher-Yates permutation from
//! a seeded local RNG, so identical `(N, composition, seed)` inputs always
//! produce the identical labeling regardless of execution order.

use crate::atoms::Element;
use crate::composition::Composition;
use crate::supercell::Supercell;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Error types for site assignment
#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    #[error(
        "composition {label} cannot be split over {total} sites: target counts ({al}, {fe}, {ni})"
    )]
    InfeasibleComposition {
        label: String,
        total: usize,
        al: i64,
        fe: i64,
        ni: i64,
    },
}

/// Result type for assignment operations
pub type Result<T> = std::result::Result<T, AssignError>;

/// A labeled supercell with its realized per-element counts
#[derive(Debug, Clone)]
pub struct AssignmentResult {
    composition: Composition,
    supercell: Supercell,
    labels: Vec<Element>,
    counts: [usize; 3],
    seed: u64,
}

impl AssignmentResult {
    /// Get the target composition
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Get the underlying supercell
    pub fn supercell(&self) -> &Supercell {
        &self.supercell
    }

    /// Element labels in site-index order
    pub fn labels(&self) -> &[Element] {
        &self.labels
    }

    /// Realized per-element counts in (Al, Fe, Ni) order
    pub fn counts(&self) -> [usize; 3] {
        self.counts
    }

    /// Realized count for one element
    pub fn count(&self, element: Element) -> usize {
        self.counts[element.index()]
    }

    /// The seed the permutation was drawn from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Integer target counts for distributing `total` sites over a composition.
///
/// Rounding policy: `round(x_al * N)` and `round(x_fe * N)` (half away from
/// zero), with Ni taking the remainder `N - n_al - n_fe`.
pub fn target_counts(composition: &Composition, total: usize) -> Result<[usize; 3]> {
    let n = total as f64;
    let al = (composition.fraction(Element::Al) * n).round() as i64;
    let fe = (composition.fraction(Element::Fe) * n).round() as i64;
    let ni = total as i64 - al - fe;

    let feasible = |count: i64| count >= 0 && count <= total as i64;
    if !feasible(al) || !feasible(fe) || !feasible(ni) {
        return Err(AssignError::InfeasibleComposition {
            label: composition.label(),
            total,
            al,
            fe,
            ni,
        });
    }

    Ok([al as usize, fe as usize, ni as usize])
}

/// Label every site of the supercell, consuming it into an [`AssignmentResult`]
pub fn assign(supercell: Supercell, composition: &Composition, seed: u64) -> Result<AssignmentResult> {
    let counts = target_counts(composition, supercell.site_count())?;

    let mut labels = Vec::with_capacity(supercell.site_count());
    for element in Element::ALL {
        labels.extend(std::iter::repeat(element).take(counts[element.index()]));
    }

    // Fisher-Yates permutation from an RNG local to this call
    let mut rng = StdRng::seed_from_u64(seed);
    labels.shuffle(&mut rng);

    Ok(AssignmentResult {
        composition: *composition,
        supercell,
        labels,
        counts,
        seed,
    })
}
