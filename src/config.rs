//! Ranking parameters.
//!
//! The inclusion threshold and display precision have no principled value,
//! so they are carried as data rather than baked into the ranker. Binaries
//! fill them from command-line flags, falling back to the defaults in
//! [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PRECISION, DEFAULT_THRESHOLD, MAX_PRECISION};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Raw scores must be strictly greater than this to be kept.
    pub threshold: f64,
    /// Decimal digits retained scores are rounded to.
    pub precision: u32,
}

impl RankConfig {
    pub fn new(threshold: f64, precision: u32) -> Result<Self, ConfigError> {
        if !threshold.is_finite() || !(0.0..1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        if precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision {
                got: precision,
                max: MAX_PRECISION,
            });
        }
        Ok(RankConfig {
            threshold,
            precision,
        })
    }

    /// Round `score` to `self.precision` digits using its exact binary value,
    /// so 0.0225 (stored just below the half) becomes 0.022.
    pub fn round(&self, score: f64) -> f64 {
        format!("{:.*}", self.precision as usize, score)
            .parse()
            .unwrap_or(score)
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        RankConfig {
            threshold: DEFAULT_THRESHOLD,
            precision: DEFAULT_PRECISION,
        }
    }
}
