use std::fmt;

use serde::{Deserialize, Serialize};

/// A probability constrained to the range [0.0, 1.0].
///
/// Values outside the range are clamped and non-finite inputs collapse to
/// zero, so a `Probability` can always be handed to a sampler.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Probability(f64);

impl Probability {
    /// Certain failure.
    pub const ZERO: Self = Self(0.0);
    /// Certain success.
    pub const ONE: Self = Self(1.0);

    /// Creates a new Probability, clamping the input to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the inner f64 value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

impl From<f64> for Probability {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_clamps() {
        assert_eq!(Probability::new(1.5).get(), 1.0);
        assert_eq!(Probability::new(-0.2).get(), 0.0);
        assert_eq!(Probability::new(0.25).get(), 0.25);
    }

    #[test]
    fn test_probability_non_finite() {
        assert_eq!(Probability::new(f64::NAN), Probability::ZERO);
        assert_eq!(Probability::new(f64::NEG_INFINITY), Probability::ZERO);
        assert_eq!(Probability::new(f64::INFINITY), Probability::ONE);
    }
}
