//! Staircase parameters

use serde::{Deserialize, Serialize};
use crate::{CoachError, Result};
use crate::{BLOCK_SIZE, DEFAULT, LOWER_THRESHOLD, MAX, MIN, STEP, UPPER_THRESHOLD};

/// Step size, bounds and thresholds used by the staircase.
///
/// Missing fields in a TOML/JSON document fall back to the clinical
/// constants in the crate root.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaircaseConfig {
    /// SNR change per move (dB)
    pub step: f64,
    /// Hardest SNR (dB)
    pub min: f64,
    /// Easiest SNR (dB)
    pub max: f64,
    /// Starting SNR for a fresh session (dB)
    pub default_snr: f64,
    /// Trials per block for the session runtime
    pub block_size: usize,
    /// Accuracy (%) at or above which SNR is lowered
    pub upper_threshold: f64,
    /// Accuracy (%) at or below which SNR is raised
    pub lower_threshold: f64,
}

impl Default for StaircaseConfig {
    fn default() -> Self {
        Self {
            step: STEP,
            min: MIN,
            max: MAX,
            default_snr: DEFAULT,
            block_size: BLOCK_SIZE,
            upper_threshold: UPPER_THRESHOLD,
            lower_threshold: LOWER_THRESHOLD,
        }
    }
}

impl StaircaseConfig {
    /// Check the parameters describe a usable staircase
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("step", self.step),
            ("min", self.min),
            ("max", self.max),
            ("default_snr", self.default_snr),
            ("upper_threshold", self.upper_threshold),
            ("lower_threshold", self.lower_threshold),
        ];
        if let Some((name, value)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{} must be finite, got {}", name, value)));
        }

        if self.step <= 0.0 {
            return Err(invalid(format!("step must be positive, got {}", self.step)));
        }
        if self.min >= self.max {
            return Err(invalid(format!(
                "min ({}) must be below max ({})",
                self.min, self.max
            )));
        }
        if self.default_snr < self.min || self.default_snr > self.max {
            return Err(invalid(format!(
                "default_snr ({}) outside [{}, {}]",
                self.default_snr, self.min, self.max
            )));
        }
        if self.block_size == 0 {
            return Err(invalid("block_size must be at least 1".to_string()));
        }
        for (name, value) in [
            ("upper_threshold", self.upper_threshold),
            ("lower_threshold", self.lower_threshold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(invalid(format!("{} must be within 0-100, got {}", name, value)));
            }
        }
        if self.lower_threshold >= self.upper_threshold {
            return Err(invalid(format!(
                "lower_threshold ({}) must be below upper_threshold ({})",
                self.lower_threshold, self.upper_threshold
            )));
        }
        Ok(())
    }

    /// Constrain an SNR to [min, max]
    pub fn clamp(&self, snr: f64) -> f64 {
        snr.clamp(self.min, self.max)
    }

    /// Maximum number of same-direction moves needed to cross the full range
    pub fn steps_across_range(&self) -> usize {
        ((self.max - self.min) / self.step).ceil() as usize
    }
}

fn invalid(message: String) -> CoachError {
    CoachError::InvalidConfig { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = StaircaseConfig::default();
        assert_eq!(config.step, 5.0);
        assert_eq!(config.min, -10.0);
        assert_eq!(config.max, 20.0);
        assert_eq!(config.default_snr, 10.0);
        assert_eq!(config.block_size, 10);
        assert_eq!(config.upper_threshold, 80.0);
        assert_eq!(config.lower_threshold, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = StaircaseConfig { min: 20.0, max: -10.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(CoachError::InvalidConfig { .. })));
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let config = StaircaseConfig { step: 0.0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_crossed_thresholds() {
        let config = StaircaseConfig {
            lower_threshold: 80.0,
            upper_threshold: 50.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_default_outside_range() {
        let config = StaircaseConfig { default_snr: 25.0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan() {
        let config = StaircaseConfig { max: f64::NAN, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp() {
        let config = StaircaseConfig::default();
        assert_eq!(config.clamp(-15.0), -10.0);
        assert_eq!(config.clamp(25.0), 20.0);
        assert_eq!(config.clamp(3.0), 3.0);
    }

    #[test]
    fn test_steps_across_range() {
        assert_eq!(StaircaseConfig::default().steps_across_range(), 6);
    }
}
