use crate::{Error, Result};

/// Absolute threshold under which a coefficient is treated as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Numeric settings carried by a [`GeometricAlgebra`](crate::GeometricAlgebra).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    pub fn new(tolerance: f64) -> Result<Self> {
        Self::default().with_tolerance(tolerance)
    }

    pub fn with_tolerance(self, tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::InvalidTolerance { tolerance });
        }
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub(crate) fn is_negligible(&self, value: f64) -> bool {
        value.abs() <= self.tolerance
    }
}
