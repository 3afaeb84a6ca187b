/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Ternary composition handling
//!
//! A [`Composition`] is an immutable triple of Al/Fe/Ni fractions summing to
//! one. The fixed 21-point sampling grid used for the SFE sweep lives in
//! [`grid`].

pub mod grid;

use crate::atoms::Element;
use std::fmt;

/// Tolerance on the fraction sum when validating a composition
pub const FRACTION_TOLERANCE: f64 = 1e-6;

/// Error types for composition handling
#[derive(Debug, thiserror::Error)]
pub enum CompositionError {
    #[error("invalid composition ({al:.4}, {fe:.4}, {ni:.4}): fractions must be non-negative")]
    NegativeFraction { al: f64, fe: f64, ni: f64 },

    #[error("invalid composition ({al:.4}, {fe:.4}, {ni:.4}): fractions sum to {sum:.8}, expected 1")]
    FractionSum { al: f64, fe: f64, ni: f64, sum: f64 },
}

/// Result type for composition operations
pub type Result<T> = std::result::Result<T, CompositionError>;

/// A target ternary composition as atomic fractions of (Al, Fe, Ni)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    x_al: f64,
    x_fe: f64,
    x_ni: f64,
}

impl Composition {
    /// Create a validated composition from atomic fractions
    pub fn new(x_al: f64, x_fe: f64, x_ni: f64) -> Result<Self> {
        let composition = Self { x_al, x_fe, x_ni };
        composition.validate()?;
        Ok(composition)
    }

    /// Construct without validation; reserved for the compiled-in grid table
    pub(crate) fn new_unchecked(x_al: f64, x_fe: f64, x_ni: f64) -> Self {
        Self { x_al, x_fe, x_ni }
    }

    /// Check the composition invariants: non-negative fractions summing to 1
    pub fn validate(&self) -> Result<()> {
        if self.x_al < 0.0 || self.x_fe < 0.0 || self.x_ni < 0.0 {
            return Err(CompositionError::NegativeFraction {
                al: self.x_al,
                fe: self.x_fe,
                ni: self.x_ni,
            });
        }

        let sum = self.x_al + self.x_fe + self.x_ni;
        if (sum - 1.0).abs() > FRACTION_TOLERANCE {
            return Err(CompositionError::FractionSum {
                al: self.x_al,
                fe: self.x_fe,
                ni: self.x_ni,
                sum,
            });
        }

        Ok(())
    }

    /// Get the atomic fraction of one element
    pub fn fraction(&self, element: Element) -> f64 {
        match element {
            Element::Al => self.x_al,
            Element::Fe => self.x_fe,
            Element::Ni => self.x_ni,
        }
    }

    /// Atomic percentages rounded to integers, in (Al, Fe, Ni) order
    pub fn percents(&self) -> [u32; 3] {
        [
            (self.x_al * 100.0).round() as u32,
            (self.x_fe * 100.0).round() as u32,
            (self.x_ni * 100.0).round() as u32,
        ]
    }

    /// Compact label in the `Al25Fe50Ni25` convention used for file naming
    pub fn label(&self) -> String {
        let [al, fe, ni] = self.percents();
        format!("Al{:02}Fe{:02}Ni{:02}", al, fe, ni)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
