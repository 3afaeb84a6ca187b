/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Lattice site record

use super::vector::Vector3D;
use std::fmt;

/// One lattice site of a supercell: a 1-based id and a Cartesian position.
///
/// Sites carry no element label; labels are produced separately by the
/// assignment stage so that a supercell can be relabeled under different
/// seeds without rebuilding its geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    id: usize,
    position: Vector3D,
}

impl Site {
    /// Create a new site
    pub fn new(id: usize, position: Vector3D) -> Self {
        Self { id, position }
    }

    /// Get the 1-based site id
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the site position
    pub fn position(&self) -> &Vector3D {
        &self.position
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "site {} at {}", self.id, self.position)
    }
}
