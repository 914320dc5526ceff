//! Integration tests for POST /api/points.

use std::sync::Arc;

use crate::common::*;
use axum::http::StatusCode;
use loyalty_points::domain::{ApiToken, UserProfile};
use rstest::rstest;

const TOKEN: &str = "token1";

async fn create_app() -> TestApp {
    TestApp::new()
        .with_user(UserProfile::new(1, "Mike", ApiToken::new(TOKEN)))
        .await
        .with_customer(customer(1))
        .await
}

#[rstest]
#[case(0, 0)]
#[case(999, 0)]
#[case(1000, 10)]
#[case(9999, 99)]
#[case(10000, 200)]
#[case(12000, 200)]
#[tokio::test]
async fn add_points_records_calculated_points(#[case] amount: u64, #[case] expected: i64) {
    let app = create_app().await;

    let response = app
        .post_json("/api/points", Some(TOKEN), &add_point_body(1, amount))
        .await;

    assert_status(&response, StatusCode::CREATED);
    assert_eq!(response.body["customer_id"], 1);
    assert_eq!(response.body["point"], expected);
    assert_eq!(response.body["event"], "purchase");
}

#[rstest]
#[tokio::test]
async fn add_points_stores_record_in_ledger() {
    let app = create_app().await;

    let response = app
        .post_json("/api/points", Some(TOKEN), &add_point_body(1, 1000))
        .await;

    let records = app.ledger.all_records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(response.body["id"], records[0].id);
    assert_eq!(records[0].point, 10);
    assert_eq!(response.body["created_at"], records[0].created_at.to_string());
}

#[rstest]
#[tokio::test]
async fn add_points_uses_custom_event_label() {
    let app = create_app().await;
    let body = serde_json::json!({ "customer_id": 1, "amount": 5000, "event": "campaign" });

    let response = app.post_json("/api/points", Some(TOKEN), &body).await;

    assert_status(&response, StatusCode::CREATED);
    assert_eq!(response.body["event"], "campaign");
    assert_eq!(response.body["point"], 50);
}

#[rstest]
#[tokio::test]
async fn add_points_assigns_increasing_ids() {
    let app = create_app().await;

    let first = app
        .post_json("/api/points", Some(TOKEN), &add_point_body(1, 1000))
        .await;
    let second = app
        .post_json("/api/points", Some(TOKEN), &add_point_body(1, 1000))
        .await;

    assert!(second.body["id"].as_i64().unwrap() > first.body["id"].as_i64().unwrap());
}

#[rstest]
#[tokio::test]
async fn add_points_for_unknown_customer_is_not_found() {
    let app = create_app().await;

    let response = app
        .post_json("/api/points", Some(TOKEN), &add_point_body(42, 1000))
        .await;

    assert_api_error(&response, "CUSTOMER_NOT_FOUND", StatusCode::NOT_FOUND);
    assert!(app.ledger.all_records().await.is_empty());
}

#[rstest]
#[case(0)]
#[case(-3)]
#[tokio::test]
async fn add_points_rejects_non_positive_customer_id(#[case] customer_id: i64) {
    let app = create_app().await;

    let response = app
        .post_json("/api/points", Some(TOKEN), &add_point_body(customer_id, 1000))
        .await;

    assert_api_error(&response, "VALIDATION_ERROR", StatusCode::BAD_REQUEST);
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn add_points_rejects_blank_event_label(#[case] label: &str) {
    let app = create_app().await;
    let body = serde_json::json!({ "customer_id": 1, "amount": 1000, "event": label });

    let response = app.post_json("/api/points", Some(TOKEN), &body).await;

    assert_api_error(&response, "VALIDATION_ERROR", StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn add_points_rejects_overlong_event_label() {
    let app = create_app().await;
    let body = serde_json::json!({ "customer_id": 1, "amount": 1000, "event": "x".repeat(256) });

    let response = app.post_json("/api/points", Some(TOKEN), &body).await;

    assert_api_error(&response, "VALIDATION_ERROR", StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn add_points_rejects_negative_amount() {
    let app = create_app().await;
    let body = serde_json::json!({ "customer_id": 1, "amount": -1 });

    let response = app.post_json("/api/points", Some(TOKEN), &body).await;

    assert_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.ledger.all_records().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn add_points_requires_authentication() {
    let app = create_app().await;

    let response = app
        .post_json("/api/points", None, &add_point_body(1, 1000))
        .await;

    assert_unauthenticated(&response);
    assert!(app.ledger.all_records().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn add_points_reports_ledger_failure_as_internal_error() {
    let app = TestApp::with_ledger_backend(Arc::new(UnavailableLedger))
        .with_user(UserProfile::new(1, "Mike", ApiToken::new(TOKEN)))
        .await;

    let response = app
        .post_json("/api/points", Some(TOKEN), &add_point_body(1, 1000))
        .await;

    assert_api_error(&response, "INTERNAL_ERROR", StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        !response.body["message"]
            .as_str()
            .unwrap()
            .contains("connection refused")
    );
}
