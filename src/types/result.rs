//! Output of a single staircase evaluation

use colored::Colorize;
use serde::{Deserialize, Serialize};
use crate::types::SnrAction;

/// Decision for one block of trials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Percentage of correct trials, 0-100, unrounded
    pub accuracy: f64,
    /// Which way the SNR moved
    pub action: SnrAction,
    /// SNR for the next block (dB)
    pub next_snr: f64,
    /// Human-readable explanation, informational only
    pub recommendation: String,
}

impl EvaluationResult {
    /// Accuracy rounded for display
    pub fn display_accuracy(&self) -> f64 {
        self.accuracy.round()
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.action.color();
        format!(
            "{} accuracy={:.0}% | action={} | next_snr={:+.1} dB | {}",
            self.action.symbol().color(color),
            self.display_accuracy(),
            self.action.label().color(color).bold(),
            self.next_snr,
            self.recommendation.dimmed()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "accuracy={:.0} | action={} | next_snr={} | recommendation={}",
            self.display_accuracy(),
            self.action.label(),
            self.next_snr,
            self.recommendation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EvaluationResult {
        EvaluationResult {
            accuracy: 70.0,
            action: SnrAction::HoldSnr,
            next_snr: 10.0,
            recommendation: "70% accuracy, solid progress. Staying at this level.".to_string(),
        }
    }

    #[test]
    fn test_parseable_string() {
        let line = sample().to_parseable_string();
        assert!(line.starts_with("accuracy=70 | action=keep | next_snr=10"));
    }

    #[test]
    fn test_serializes_all_four_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["accuracy"], 70.0);
        assert_eq!(json["action"], "keep");
        assert_eq!(json["next_snr"], 10.0);
        assert!(json["recommendation"].is_string());
    }
}
