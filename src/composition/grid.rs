/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! The fixed 21-point composition grid
//!
//! The SFE sweep samples the ternary diagram at 21 compositions: the three
//! pure elements, three points on each binary edge (25/75, 50/50, 75/25),
//! and nine interior points (the permutations of 50/25/25 and 40/40/20 plus
//! the three rotations of the near-equiatomic 34/33/33 split).

use super::Composition;
use once_cell::sync::Lazy;

/// One entry of the composition grid: a 1-based id and its composition
#[derive(Debug, Clone, Copy)]
pub struct GridPoint {
    id: usize,
    composition: Composition,
}

impl GridPoint {
    /// Get the 1-based grid id
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the composition of this grid point
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Output directory name in the `Comp01_Al100_Fe00_Ni00` convention
    pub fn directory_name(&self) -> String {
        let [al, fe, ni] = self.composition.percents();
        format!("Comp{:02}_Al{:02}_Fe{:02}_Ni{:02}", self.id, al, fe, ni)
    }
}

/// Number of compositions in the grid
pub const GRID_SIZE: usize = 21;

// (Al, Fe, Ni) fractions: pures first, then the binary edges, then the
// interior. Grid ids are assigned in this order.
const GRID_FRACTIONS: [(f64, f64, f64); GRID_SIZE] = [
    // pure elements
    (1.00, 0.00, 0.00),
    (0.00, 1.00, 0.00),
    (0.00, 0.00, 1.00),
    // Al-Fe edge
    (0.75, 0.25, 0.00),
    (0.50, 0.50, 0.00),
    (0.25, 0.75, 0.00),
    // Al-Ni edge
    (0.75, 0.00, 0.25),
    (0.50, 0.00, 0.50),
    (0.25, 0.00, 0.75),
    // Fe-Ni edge
    (0.00, 0.75, 0.25),
    (0.00, 0.50, 0.50),
    (0.00, 0.25, 0.75),
    // interior: one-half / one-quarter splits
    (0.50, 0.25, 0.25),
    (0.25, 0.50, 0.25),
    (0.25, 0.25, 0.50),
    // interior: lean splits
    (0.40, 0.40, 0.20),
    (0.40, 0.20, 0.40),
    (0.20, 0.40, 0.40),
    // interior: near-equiatomic rotations
    (0.34, 0.33, 0.33),
    (0.33, 0.34, 0.33),
    (0.33, 0.33, 0.34),
];

static GRID: Lazy<Vec<GridPoint>> = Lazy::new(|| {
    GRID_FRACTIONS
        .iter()
        .enumerate()
        .map(|(index, &(al, fe, ni))| GridPoint {
            id: index + 1,
            composition: Composition::new_unchecked(al, fe, ni),
        })
        .collect()
});

/// Get the full composition grid, ordered by id
pub fn grid() -> &'static [GridPoint] {
    &GRID
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_grid_size_and_ids() {
        let points = grid();
        assert_eq!(points.len(), GRID_SIZE);
        for (index, point) in points.iter().enumerate() {
            assert_eq!(point.id(), index + 1);
        }
    }

    #[test]
    fn test_every_grid_point_is_valid() {
        for point in grid() {
            point.composition().validate().unwrap();
        }
    }

    #[test]
    fn test_grid_labels_unique() {
        let labels: HashSet<String> = grid().iter().map(|p| p.composition().label()).collect();
        assert_eq!(labels.len(), GRID_SIZE);
    }

    #[test]
    fn test_grid_partition() {
        let pure = grid()
            .iter()
            .filter(|p| {
                let [al, fe, ni] = p.composition().percents();
                al == 100 || fe == 100 || ni == 100
            })
            .count();
        let binary = grid()
            .iter()
            .filter(|p| {
                let [al, fe, ni] = p.composition().percents();
                [al, fe, ni].iter().filter(|&&x| x == 0).count() == 1
            })
            .count();
        let interior = grid()
            .iter()
            .filter(|p| {
                let [al, fe, ni] = p.composition().percents();
                al > 0 && fe > 0 && ni > 0
            })
            .count();
        assert_eq!(pure, 3);
        assert_eq!(binary, 9);
        assert_eq!(interior, 9);
    }

    #[test]
    fn test_directory_name_convention() {
        assert_eq!(grid()[0].directory_name(), "Comp01_Al100_Fe00_Ni00");
        assert_eq!(grid()[10].directory_name(), "Comp11_Al00_Fe50_Ni50");
    }
}
