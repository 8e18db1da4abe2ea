//! Core modules for Smart Coach

pub mod staircase;
pub mod session;
pub mod trial_parser;
pub mod audit;
pub mod api;

pub use staircase::{StaircaseEvaluator, evaluate};
pub use session::StaircaseSession;
pub use trial_parser::TrialParser;
pub use audit::{AuditRecord, hash_inputs};
pub use api::{create_router, run_server, EvaluateSessionRequest};
