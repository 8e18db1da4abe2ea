//! Staircase Evaluator: one block of trials in, next SNR out
//!
//! Decision rules (accuracy in percent, both comparisons inclusive):
//! - accuracy >= 80 → lower SNR by one step (harder)
//! - accuracy <= 50 → raise SNR by one step (easier)
//! - otherwise      → hold SNR
//!
//! Moves are clamped to [-10, 20] dB. A hold returns the input level as-is,
//! even when it is already out of range.

use tracing::debug;
use crate::types::{EvaluationResult, SnrAction, StaircaseConfig};
use crate::{CoachError, Result};

/// Stateless staircase evaluator
#[derive(Debug, Clone, Default)]
pub struct StaircaseEvaluator {
    config: StaircaseConfig,
}

impl StaircaseEvaluator {
    /// Evaluator with the clinical defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator with custom parameters
    pub fn with_config(config: StaircaseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StaircaseConfig {
        &self.config
    }

    /// Evaluate a block of trial outcomes at `current_level` dB
    pub fn evaluate(&self, current_level: f64, results: &[bool]) -> Result<EvaluationResult> {
        if results.is_empty() {
            return Err(CoachError::EmptyBlock);
        }
        if !current_level.is_finite() {
            return Err(CoachError::NonFiniteLevel { value: current_level });
        }

        let total = results.len();
        let correct = results.iter().filter(|&&r| r).count();
        let accuracy = 100.0 * correct as f64 / total as f64;

        let action = self.decide(accuracy);
        let next_snr = match action {
            SnrAction::HoldSnr => current_level,
            moving => self.config.clamp(current_level + moving.direction() * self.config.step),
        };
        let recommendation = recommend(action, accuracy, correct == total);

        debug!(
            current_level,
            correct,
            total,
            accuracy,
            action = action.label(),
            next_snr,
            "staircase block evaluated"
        );

        Ok(EvaluationResult {
            accuracy,
            action,
            next_snr,
            recommendation,
        })
    }

    /// Map an unrounded accuracy (percent) to an action
    pub fn decide(&self, accuracy: f64) -> SnrAction {
        if accuracy >= self.config.upper_threshold {
            SnrAction::LowerSnr
        } else if accuracy <= self.config.lower_threshold {
            SnrAction::RaiseSnr
        } else {
            SnrAction::HoldSnr
        }
    }
}

/// Evaluate with the clinical defaults
pub fn evaluate(current_level: f64, results: &[bool]) -> Result<EvaluationResult> {
    StaircaseEvaluator::new().evaluate(current_level, results)
}

fn recommend(action: SnrAction, accuracy: f64, perfect: bool) -> String {
    let shown = accuracy.round();
    match action {
        SnrAction::LowerSnr if perfect => "Perfect score! Making it harder.".to_string(),
        SnrAction::LowerSnr => format!("{:.0}% accuracy, great work! Making it harder.", shown),
        SnrAction::RaiseSnr => format!("{:.0}% accuracy. Adjusting to build confidence.", shown),
        SnrAction::HoldSnr => {
            format!("{:.0}% accuracy, solid progress. Staying at this level.", shown)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
