//! Distance weighting between pixel pairs
//!
//! The fillers take any `WeightingFunction` as an injected strategy. The
//! default law is `1 / (distance^z + epsilon)`; closures with the signature
//! `Fn(Coordinate, Coordinate) -> f32` work as drop-in alternatives.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Coordinate;

/// Maps a pair of coordinates to a non-negative influence weight
pub trait WeightingFunction {
    /// Weight of `b` when interpolating at `a`
    fn weight(&self, a: Coordinate, b: Coordinate) -> f32;
}

impl<F> WeightingFunction for F
where
    F: Fn(Coordinate, Coordinate) -> f32,
{
    fn weight(&self, a: Coordinate, b: Coordinate) -> f32 {
        self(a, b)
    }
}

/// Inverse power of the Euclidean distance, stabilized by `epsilon`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseDistance {
    z_factor: i32,
    epsilon: f32,
}

impl InverseDistance {
    /// Create the weighting law
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `z_factor` is not positive
    /// - `epsilon` is not a finite positive number
    pub fn new(z_factor: i32, epsilon: f32) -> Result<Self> {
        if z_factor <= 0 {
            return Err(invalid_parameter(
                "z_factor",
                &z_factor,
                &"decay exponent must be a positive integer",
            ));
        }
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(invalid_parameter(
                "epsilon",
                &epsilon,
                &"stabilizing constant must be finite and strictly positive",
            ));
        }
        Ok(Self { z_factor, epsilon })
    }

    /// Decay exponent
    pub const fn z_factor(&self) -> i32 {
        self.z_factor
    }

    /// Stabilizing constant
    pub const fn epsilon(&self) -> f32 {
        self.epsilon
    }
}

impl WeightingFunction for InverseDistance {
    fn weight(&self, a: Coordinate, b: Coordinate) -> f32 {
        let decayed = a.distance(b).powi(self.z_factor);
        (1.0 / (decayed + f64::from(self.epsilon))) as f32
    }
}
