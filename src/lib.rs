//! Smart Coach: adaptive SNR staircase for listening exercises
//!
//! A block of pass/fail trials goes in, the next Signal-to-Noise Ratio comes
//! out. Higher SNR means speech is louder than the noise, so LOWER SNR is a
//! HARDER exercise.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod types;

pub use error::{CoachError, Result};

// =============================================================================
// STAIRCASE CONSTANTS [C] - clinical values, in dB unless noted
// =============================================================================

/// SNR change applied per block when difficulty moves
pub const STEP: f64 = 5.0;

/// Hardest allowed SNR
pub const MIN: f64 = -10.0;

/// Easiest allowed SNR
pub const MAX: f64 = 20.0;

/// Starting SNR for a new user
pub const DEFAULT: f64 = 10.0;

/// Conventional trials per block (not enforced by the evaluator)
pub const BLOCK_SIZE: usize = 10;

// =============================================================================
// ACCURACY THRESHOLDS [C] - percent, both inclusive
// =============================================================================

/// At or above: lower the SNR (harder)
pub const UPPER_THRESHOLD: f64 = 80.0;

/// At or below: raise the SNR (easier)
pub const LOWER_THRESHOLD: f64 = 50.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
