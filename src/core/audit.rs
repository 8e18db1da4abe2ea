//! Audit records for server-side evaluations
//!
//! Digest covers the inputs only: current_snr as big-endian f64 bits, then
//! one byte (0/1) per trial. Identical inputs always give the same digest.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use crate::types::{EvaluationResult, SnrAction};

/// One audited evaluation
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    /// SHA-256 of the canonical input encoding, hex
    pub input_digest: String,
    pub current_snr: f64,
    pub trials: usize,
    pub correct: usize,
    pub action: SnrAction,
    pub next_snr: f64,
    pub timestamp: DateTime<Utc>,
}

impl AuditRecord {
    pub fn new(current_snr: f64, results: &[bool], result: &EvaluationResult) -> Self {
        Self {
            input_digest: hash_inputs(current_snr, results),
            current_snr,
            trials: results.len(),
            correct: results.iter().filter(|&&r| r).count(),
            action: result.action,
            next_snr: result.next_snr,
            timestamp: Utc::now(),
        }
    }
}

/// Hash evaluation inputs in canonical form
pub fn hash_inputs(current_snr: f64, results: &[bool]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(current_snr.to_bits().to_be_bytes());
    for &r in results {
        hasher.update([r as u8]);
    }
    let digest: [u8; 32] = hasher.finalize().into();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
