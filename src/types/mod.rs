//! Core types for Smart Coach

mod action;
mod config;
mod result;
mod session;

pub use action::SnrAction;
pub use config::StaircaseConfig;
pub use result::EvaluationResult;
pub use session::{BlockRecord, SessionSummary};
