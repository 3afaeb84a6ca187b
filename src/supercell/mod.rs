/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic supercell construction
//!
//! [`build`] turns a resolved [`LatticeSpec`] into the ordered list of
//! lattice sites of a periodic simulation box, wraps every position into
//! `[0, L)` per axis, and enforces the geometric invariants (no duplicate
//! sites under the minimum-image convention, no site outside the box).
//! Invariant violations are internal errors: they indicate a defect in the
//! basis tables, never bad user input.

pub mod stacking;

use crate::atoms::{Site, Vector3D};
use crate::lattice::{LatticeSpec, Variant};
use stacking::{stacking_sequence, FCC_BASIS};

/// Minimum-image separation below which two sites are considered identical
pub const DUPLICATE_TOLERANCE: f64 = 1e-6;

/// Error types for supercell construction
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("site {id} at {position} lies outside the {lx:.6} x {ly:.6} x {lz:.6} box ({variant})")]
    SiteOutOfBounds {
        variant: Variant,
        id: usize,
        position: Vector3D,
        lx: f64,
        ly: f64,
        lz: f64,
    },

    #[error(
        "sites {first} and {second} coincide ({separation:.3e} A apart, tolerance {tolerance:.1e}) in the {variant} cell"
    )]
    DuplicateSite {
        variant: Variant,
        first: usize,
        second: usize,
        separation: f64,
        tolerance: f64,
    },
}

/// Result type for supercell operations
pub type Result<T> = std::result::Result<T, GeometryError>;

/// A periodic supercell: an ordered site list and its orthogonal box
#[derive(Debug, Clone)]
pub struct Supercell {
    variant: Variant,
    sites: Vec<Site>,
    lx: f64,
    ly: f64,
    lz: f64,
}

impl Supercell {
    /// Get the structure variant
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Get the ordered site list
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Get the number of sites
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Get the box edge lengths (Lx, Ly, Lz) in Angstrom
    pub fn box_lengths(&self) -> (f64, f64, f64) {
        (self.lx, self.ly, self.lz)
    }

    /// Box volume in cubic Angstrom
    pub fn volume(&self) -> f64 {
        self.lx * self.ly * self.lz
    }

    /// Cross-sectional area `Lx * Ly` of the plane perpendicular to the
    /// stacking (z) axis, in square Angstrom.
    ///
    /// The FCC value is the reference area the downstream DMLF energy
    /// normalization divides by; it is reported for every variant so the
    /// boundary contract holds regardless of which cell a consumer reads.
    pub fn cross_section_area(&self) -> f64 {
        self.lx * self.ly
    }

    /// Shortest separation between two positions under the minimum-image
    /// convention of this box.
    pub fn min_image_distance(&self, a: &Vector3D, b: &Vector3D) -> f64 {
        let dx = min_image_component(a.x - b.x, self.lx);
        let dy = min_image_component(a.y - b.y, self.ly);
        let dz = min_image_component(a.z - b.z, self.lz);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Build the unlabeled supercell for a lattice spec
pub fn build(spec: &LatticeSpec) -> Result<Supercell> {
    let supercell = match spec.variant {
        Variant::Fcc => build_fcc(spec),
        Variant::Hcp | Variant::Dhcp => build_layered(spec),
    };
    check_invariants(&supercell)?;
    Ok(supercell)
}

fn build_fcc(spec: &LatticeSpec) -> Supercell {
    let a = spec.a;
    let (n1, n2, n3) = (spec.replication.n1, spec.replication.n2, spec.replication.n3);
    let (lx, ly, lz) = (n1 as f64 * a, n2 as f64 * a, n3 as f64 * a);

    let mut sites = Vec::with_capacity(FCC_BASIS.len() * n1 * n2 * n3);
    for i1 in 0..n1 {
        for i2 in 0..n2 {
            for i3 in 0..n3 {
                for &(fx, fy, fz) in FCC_BASIS.iter() {
                    let position = Vector3D::new(
                        wrap((i1 as f64 + fx) * a, lx),
                        wrap((i2 as f64 + fy) * a, ly),
                        wrap((i3 as f64 + fz) * a, lz),
                    );
                    sites.push(Site::new(sites.len() + 1, position));
                }
            }
        }
    }

    Supercell {
        variant: spec.variant,
        sites,
        lx,
        ly,
        lz,
    }
}

fn build_layered(spec: &LatticeSpec) -> Supercell {
    let a = spec.a;
    let b = a * 3.0_f64.sqrt();
    // interlayer_spacing is always Some for the hexagonal variants; fall
    // back to the ideal value so a hand-built spec without c still works
    let spacing = spec
        .interlayer_spacing()
        .unwrap_or(a * (2.0_f64 / 3.0).sqrt());

    let (n1, n2, n3) = (spec.replication.n1, spec.replication.n2, spec.replication.n3);
    let (lx, ly, lz) = (n1 as f64 * a, n2 as f64 * b, n3 as f64 * spacing);

    let sequence = stacking_sequence(spec.variant);
    let mut sites = Vec::with_capacity(stacking::ATOMS_PER_LAYER_CELL * n1 * n2 * n3);
    for layer_index in 0..n3 {
        let layer = sequence[layer_index % sequence.len()];
        let z = wrap(layer_index as f64 * spacing, lz);
        for i1 in 0..n1 {
            for i2 in 0..n2 {
                for &(fx, fy) in layer.in_plane_offsets().iter() {
                    let position = Vector3D::new(
                        wrap((i1 as f64 + fx) * a, lx),
                        wrap((i2 as f64 + fy) * b, ly),
                        z,
                    );
                    sites.push(Site::new(sites.len() + 1, position));
                }
            }
        }
    }

    Supercell {
        variant: spec.variant,
        sites,
        lx,
        ly,
        lz,
    }
}

// Fold a coordinate into [0, length); rounding at the upper face folds to 0.
fn wrap(value: f64, length: f64) -> f64 {
    let wrapped = value.rem_euclid(length);
    if length - wrapped < 1e-9 {
        0.0
    } else {
        wrapped
    }
}

fn min_image_component(delta: f64, length: f64) -> f64 {
    delta - (delta / length).round() * length
}

fn check_invariants(supercell: &Supercell) -> Result<()> {
    let (lx, ly, lz) = supercell.box_lengths();

    for site in supercell.sites() {
        let p = site.position();
        let inside = (0.0..lx).contains(&p.x) && (0.0..ly).contains(&p.y) && (0.0..lz).contains(&p.z);
        if !inside {
            return Err(GeometryError::SiteOutOfBounds {
                variant: supercell.variant(),
                id: site.id(),
                position: *p,
                lx,
                ly,
                lz,
            });
        }
    }

    // O(N^2) pair scan; the default 864-site cells stay well under a
    // million pairs.
    let sites = supercell.sites();
    for (i, a) in sites.iter().enumerate() {
        for b in sites.iter().skip(i + 1) {
            let separation = supercell.min_image_distance(a.position(), b.position());
            if separation < DUPLICATE_TOLERANCE {
                return Err(GeometryError::DuplicateSite {
                    variant: supercell.variant(),
                    first: a.id(),
                    second: b.id(),
                    separation,
                    tolerance: DUPLICATE_TOLERANCE,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::Composition;
    use crate::lattice::{lattice_for, Replication};
    use approx::assert_relative_eq;

    fn spec_for(variant: Variant, replication: Replication) -> LatticeSpec {
        let composition = Composition::new(1.0, 0.0, 0.0).unwrap();
        lattice_for(&composition, variant, replication).unwrap()
    }

    #[test]
    fn test_fcc_site_count_and_box() {
        let spec = spec_for(Variant::Fcc, Replication::new(2, 3, 4));
        let supercell = build(&spec).unwrap();
        assert_eq!(supercell.site_count(), 4 * 2 * 3 * 4);

        let (lx, ly, lz) = supercell.box_lengths();
        assert_relative_eq!(lx, 2.0 * spec.a);
        assert_relative_eq!(ly, 3.0 * spec.a);
        assert_relative_eq!(lz, 4.0 * spec.a);
    }

    #[test]
    fn test_layered_site_counts() {
        let hcp = build(&spec_for(Variant::Hcp, Replication::new(2, 2, 4))).unwrap();
        assert_eq!(hcp.site_count(), 2 * 2 * 2 * 4);

        let dhcp = build(&spec_for(Variant::Dhcp, Replication::new(2, 2, 4))).unwrap();
        assert_eq!(dhcp.site_count(), 2 * 2 * 2 * 4);
    }

    #[test]
    fn test_site_ids_are_sequential() {
        let supercell = build(&spec_for(Variant::Fcc, Replication::new(2, 2, 2))).unwrap();
        for (index, site) in supercell.sites().iter().enumerate() {
            assert_eq!(site.id(), index + 1);
        }
    }

    #[test]
    fn test_hcp_and_dhcp_diverge_at_fourth_layer() {
        // ABAB and ABAC agree on the first three layers and differ on the
        // fourth; compare the z-sorted site sets layer by layer.
        let replication = Replication::new(1, 1, 4);
        let hcp = build(&spec_for(Variant::Hcp, replication)).unwrap();
        let dhcp = build(&spec_for(Variant::Dhcp, replication)).unwrap();

        let per_layer = 2;
        for layer in 0..4 {
            let start = layer * per_layer;
            let same = (start..start + per_layer).all(|i| {
                hcp.sites()[i]
                    .position()
                    .distance(dhcp.sites()[i].position())
                    < 1e-9
            });
            if layer < 3 {
                assert!(same, "layer {} should match", layer);
            } else {
                assert!(!same, "layer 3 should differ between HCP and DHCP");
            }
        }
    }

    #[test]
    fn test_cross_section_area() {
        let spec = spec_for(Variant::Fcc, Replication::new(6, 6, 6));
        let supercell = build(&spec).unwrap();
        let (lx, ly, _) = supercell.box_lengths();
        assert_relative_eq!(supercell.cross_section_area(), lx * ly);
    }

    #[test]
    fn test_min_image_distance_wraps() {
        let supercell = build(&spec_for(Variant::Fcc, Replication::new(2, 2, 2))).unwrap();
        let (lx, _, _) = supercell.box_lengths();
        let a = Vector3D::new(0.1, 0.0, 0.0);
        let b = Vector3D::new(lx - 0.1, 0.0, 0.0);
        assert_relative_eq!(supercell.min_image_distance(&a, &b), 0.2, epsilon = 1e-9);
    }
}
