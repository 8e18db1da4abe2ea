//! Integration tests for the HTTP API
//!
//! Tests POST /evaluate-session, GET /health and CORS preflight

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use smart_coach::core::create_router;
use smart_coach::types::StaircaseConfig;
use tower::ServiceExt;

fn create_test_router() -> axum::Router {
    create_router(StaircaseConfig::default()).unwrap()
}

async fn post_evaluate(body: &str) -> (StatusCode, Value) {
    let response = create_test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/evaluate-session")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = create_test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["step"], 5.0);
}

#[tokio::test]
async fn test_evaluate_lowers_snr() {
    let (status, json) = post_evaluate(
        r#"{"current_snr": 10, "results": [true,true,true,true,true,true,true,true,true,false]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["action"], "decrease");
    assert_eq!(json["next_snr"], 5.0);
    assert_eq!(json["accuracy"], 9.0 / 10.0);
    assert!(json["recommendation"].is_string());
}

#[tokio::test]
async fn test_evaluate_raises_snr() {
    let results = vec![false; 10];
    let body = serde_json::json!({ "current_snr": 15, "results": results });
    let (status, json) = post_evaluate(&body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["action"], "increase");
    assert_eq!(json["next_snr"], 20.0);
    assert_eq!(json["accuracy"], 0.0);
}

#[tokio::test]
async fn test_evaluate_hold_is_maintain() {
    let (status, json) = post_evaluate(
        r#"{"current_snr": 10, "results": [true,true,true,true,true,true,true,false,false,false]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["action"], "maintain");
    assert_eq!(json["next_snr"], 10.0);
    assert_eq!(json["accuracy"], 7.0 / 10.0);
}

/// Accuracy is exactly correct / total, also for ratios with no finite decimal form
#[tokio::test]
async fn test_accuracy_is_exact_fraction() {
    let (status, json) =
        post_evaluate(r#"{"current_snr": 10, "results": [true, false, false]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["accuracy"], 1.0 / 3.0);
    assert_eq!(json["action"], "increase");

    let (_, json) = post_evaluate(
        r#"{"current_snr": 10, "results": [true, true, true, true, false, false, false]}"#,
    )
    .await;
    assert_eq!(json["accuracy"], 4.0 / 7.0);
    assert_eq!(json["action"], "maintain");
}

#[tokio::test]
async fn test_empty_results_is_bad_request() {
    let (status, json) = post_evaluate(r#"{"current_snr": 10, "results": []}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_non_array_results_is_bad_request() {
    let (status, json) = post_evaluate(r#"{"current_snr": 10, "results": "1101"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("results"));
}

#[tokio::test]
async fn test_string_snr_is_bad_request() {
    let (status, json) = post_evaluate(r#"{"current_snr": "ten", "results": [true]}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("current_snr"));
}

#[tokio::test]
async fn test_missing_snr_is_bad_request() {
    let (status, _) = post_evaluate(r#"{"results": [true]}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (status, json) = post_evaluate("{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = create_test_router()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/evaluate-session")
                .header("origin", "https://app.example.com")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_header_on_post() {
    let response = create_test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/evaluate-session")
                .header("origin", "https://app.example.com")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"current_snr": 10, "results": [true]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("access-control-allow-origin"));
}

#[test]
fn test_invalid_config_rejected() {
    let config = StaircaseConfig { min: 30.0, ..Default::default() };
    assert!(create_router(config).is_err());
}
