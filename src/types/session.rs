//! Session history records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::EvaluationResult;

/// One evaluated block inside a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRecord {
    /// 0-based position in the session
    pub index: usize,
    /// SNR the block was played at
    pub started_snr: f64,
    /// Number of trials in the block
    pub trials: usize,
    /// Number of correct trials
    pub correct: usize,
    /// Evaluator decision
    pub result: EvaluationResult,
    /// When the block was evaluated
    pub timestamp: DateTime<Utc>,
}

impl BlockRecord {
    pub fn new(index: usize, started_snr: f64, trials: &[bool], result: EvaluationResult) -> Self {
        Self {
            index,
            started_snr,
            trials: trials.len(),
            correct: trials.iter().filter(|&&t| t).count(),
            result,
            timestamp: Utc::now(),
        }
    }
}

/// Aggregate view over a session's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub blocks: usize,
    pub trials: usize,
    pub correct: usize,
    /// Percent over all evaluated trials, None before the first block
    pub overall_accuracy: Option<f64>,
    pub current_snr: f64,
    /// Hardest SNR visited (including the starting value)
    pub lowest_snr: f64,
    /// Easiest SNR visited (including the starting value)
    pub highest_snr: f64,
    /// Times the staircase switched between lowering and raising
    pub reversals: usize,
}
