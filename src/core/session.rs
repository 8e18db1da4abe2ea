//! Staircase Session: the caller-side runtime around the evaluator
//!
//! Holds the user's current SNR, buffers trial outcomes until a block is
//! full, feeds each block to the evaluator and carries `next_snr` forward.

use tracing::info;
use crate::core::StaircaseEvaluator;
use crate::types::{BlockRecord, EvaluationResult, SessionSummary, SnrAction, StaircaseConfig};
use crate::{CoachError, Result};

/// Stateful staircase runner for one user
#[derive(Debug, Clone)]
pub struct StaircaseSession {
    evaluator: StaircaseEvaluator,
    start_snr: f64,
    current_snr: f64,
    pending: Vec<bool>,
    history: Vec<BlockRecord>,
}

impl Default for StaircaseSession {
    fn default() -> Self {
        Self {
            evaluator: StaircaseEvaluator::new(),
            start_snr: crate::DEFAULT,
            current_snr: crate::DEFAULT,
            pending: Vec::with_capacity(crate::BLOCK_SIZE),
            history: Vec::new(),
        }
    }
}

impl StaircaseSession {
    /// New session starting at the configured default SNR
    pub fn new(config: StaircaseConfig) -> Result<Self> {
        Self::with_start(config, config.default_snr)
    }

    /// Resume a session from a persisted SNR
    pub fn with_start(config: StaircaseConfig, start_snr: f64) -> Result<Self> {
        if !start_snr.is_finite() {
            return Err(CoachError::NonFiniteLevel { value: start_snr });
        }
        let evaluator = StaircaseEvaluator::with_config(config)?;
        Ok(Self {
            evaluator,
            start_snr,
            current_snr: start_snr,
            pending: Vec::with_capacity(config.block_size),
            history: Vec::new(),
        })
    }

    /// Record one trial; evaluates automatically when the block fills up
    pub fn record_trial(&mut self, correct: bool) -> Result<Option<EvaluationResult>> {
        self.pending.push(correct);
        if self.pending.len() < self.evaluator.config().block_size {
            return Ok(None);
        }
        let block = std::mem::take(&mut self.pending);
        self.record_block(&block).map(Some)
    }

    /// Evaluate an explicit block of any non-empty length
    pub fn record_block(&mut self, results: &[bool]) -> Result<EvaluationResult> {
        let result = self.evaluator.evaluate(self.current_snr, results)?;
        let record =
            BlockRecord::new(self.history.len(), self.current_snr, results, result.clone());

        info!(
            block = record.index,
            from = self.current_snr,
            to = result.next_snr,
            action = result.action.label(),
            "block completed"
        );

        self.current_snr = result.next_snr;
        self.history.push(record);
        Ok(result)
    }

    pub fn current_snr(&self) -> f64 {
        self.current_snr
    }

    /// Trials buffered toward the next block
    pub fn pending_trials(&self) -> usize {
        self.pending.len()
    }

    pub fn blocks_completed(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[BlockRecord] {
        &self.history
    }

    pub fn config(&self) -> &StaircaseConfig {
        self.evaluator.config()
    }

    /// Aggregate the session so far
    pub fn summary(&self) -> SessionSummary {
        let trials: usize = self.history.iter().map(|b| b.trials).sum();
        let correct: usize = self.history.iter().map(|b| b.correct).sum();

        let visited = std::iter::once(self.start_snr)
            .chain(self.history.iter().map(|b| b.result.next_snr));
        let (lowest_snr, highest_snr) = visited
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), snr| {
                (lo.min(snr), hi.max(snr))
            });

        SessionSummary {
            blocks: self.history.len(),
            trials,
            correct,
            overall_accuracy: (trials > 0).then(|| 100.0 * correct as f64 / trials as f64),
            current_snr: self.current_snr,
            lowest_snr,
            highest_snr,
            reversals: count_reversals(&self.history),
        }
    }

    /// Back to the starting SNR with empty history
    pub fn reset(&mut self) {
        self.current_snr = self.start_snr;
        self.pending.clear();
        self.history.clear();
    }
}

/// Count switches between lowering and raising; holds do not break a run
fn count_reversals(history: &[BlockRecord]) -> usize {
    let mut last: Option<SnrAction> = None;
    let mut reversals = 0;
    for action in history.iter().map(|b| b.result.action) {
        if action == SnrAction::HoldSnr {
            continue;
        }
        if matches!(last, Some(prev) if prev != action) {
            reversals += 1;
        }
        last = Some(action);
    }
    reversals
}

// =============================================================================
// TESTS
// =============================================================================
