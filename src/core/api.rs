//! HTTP API for the staircase evaluator
//!
//! Endpoints:
//! - POST /evaluate-session - Evaluate one block of trials
//! - GET /health - Health check
//!
//! All origins are allowed (CORS preflight handled by the CORS layer).
//! The HTTP response reports accuracy as a fraction 0..1 and the hold
//! action as "maintain".

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::core::{AuditRecord, StaircaseEvaluator};
use crate::types::StaircaseConfig;
use crate::{CoachError, Result};

/// App state
#[derive(Debug)]
pub struct AppState {
    pub evaluator: StaircaseEvaluator,
}

/// Validated evaluate-session request
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateSessionRequest {
    pub current_snr: f64,
    pub results: Vec<bool>,
}

impl EvaluateSessionRequest {
    /// Validate a raw JSON body
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| CoachError::InvalidRequest {
            message: format!("body must be valid JSON: {}", e),
        })?;

        let current_snr = value
            .get("current_snr")
            .and_then(Value::as_f64)
            .ok_or_else(|| bad_request("current_snr must be a number"))?;

        let raw_results = value
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| bad_request("results must be an array of booleans"))?;
        if raw_results.is_empty() {
            return Err(bad_request("results must not be empty"));
        }

        let results = raw_results
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_bool()
                    .ok_or_else(|| bad_request(&format!("results[{}] must be a boolean", i)))
            })
            .collect::<Result<Vec<bool>>>()?;

        Ok(Self { current_snr, results })
    }

    /// Exact `correct / total`, the HTTP accuracy scale
    pub fn accuracy_fraction(&self) -> f64 {
        let correct = self.results.iter().filter(|&&r| r).count();
        correct as f64 / self.results.len() as f64
    }
}

/// Evaluate-session response
#[derive(Debug, Serialize)]
pub struct EvaluateSessionResponse {
    pub next_snr: f64,
    pub action: &'static str,
    /// Fraction 0..1
    pub accuracy: f64,
    pub recommendation: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

/// Error body for 4xx/5xx responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler error, mapped to a status code
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl From<CoachError> for ApiError {
    fn from(err: CoachError) -> Self {
        match err {
            CoachError::InvalidRequest { message } => ApiError::BadRequest(message),
            e if e.is_client_error() => ApiError::BadRequest(e.to_string()),
            e => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => {
                warn!(%message, "rejected evaluate-session request");
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::Internal(message) => {
                error!(%message, "evaluate-session failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Create the API router
pub fn create_router(config: StaircaseConfig) -> Result<Router> {
    let state = Arc::new(AppState {
        evaluator: StaircaseEvaluator::with_config(config)?,
    });

    Ok(Router::new()
        .route("/health", get(health))
        .route("/evaluate-session", post(evaluate_session))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()))
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let config = state.evaluator.config();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        step: config.step,
        min: config.min,
        max: config.max,
    })
}

/// Evaluate one block of trials
async fn evaluate_session(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> std::result::Result<Json<EvaluateSessionResponse>, ApiError> {
    let req = EvaluateSessionRequest::from_json(&body)?;
    let result = state.evaluator.evaluate(req.current_snr, &req.results)?;

    let audit = AuditRecord::new(req.current_snr, &req.results, &result);
    info!(
        digest = %audit.input_digest,
        current_snr = audit.current_snr,
        trials = audit.trials,
        correct = audit.correct,
        action = audit.action.wire_label(),
        next_snr = audit.next_snr,
        "evaluate-session"
    );

    Ok(Json(EvaluateSessionResponse {
        next_snr: result.next_snr,
        action: result.action.wire_label(),
        accuracy: req.accuracy_fraction(),
        recommendation: result.recommendation,
    }))
}

/// Panics inside a handler become a 500 with the panic message
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "internal error".to_string()
    };
    ApiError::Internal(message).into_response()
}

fn bad_request(message: &str) -> CoachError {
    CoachError::InvalidRequest { message: message.to_string() }
}

/// Run the API server
pub async fn run_server(addr: &str, config: StaircaseConfig) -> Result<()> {
    let router = create_router(config)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Smart Coach API running on {}", addr);
    info!("  POST /evaluate-session - Evaluate a trial block");
    info!("  GET  /health           - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
