//! Integration tests for GET /api/customers/{customer_id}/point-events.

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
        .with_customer(customer(2))
        .await
}

#[rstest]
#[tokio::test]
async fn history_is_empty_for_new_customer() {
    let app = create_app().await;

    let response = app.get("/api/customers/1/point-events", Some(TOKEN)).await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!([]));
}

#[rstest]
#[tokio::test]
async fn history_lists_only_that_customers_records_in_order() {
    let app = create_app().await;
    for (customer_id, amount) in [(1, 1000), (2, 5000), (1, 10000)] {
        app.post_json("/api/points", Some(TOKEN), &add_point_body(customer_id, amount))
            .await;
    }

    let response = app.get("/api/customers/1/point-events", Some(TOKEN)).await;

    assert_status(&response, StatusCode::OK);
    let records = response.body.as_array().unwrap();
    let points: Vec<i64> = records
        .iter()
        .map(|record| record["point"].as_i64().unwrap())
        .collect();
    assert_eq!(points, vec![10, 200]);
    assert!(records.iter().all(|record| record["customer_id"] == 1));
}

#[rstest]
#[tokio::test]
async fn history_rejects_non_positive_customer_id() {
    let app = create_app().await;

    let response = app.get("/api/customers/0/point-events", Some(TOKEN)).await;

    assert_api_error(&response, "VALIDATION_ERROR", StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn history_requires_authentication() {
    let app = create_app().await;

    let response = app.get("/api/customers/1/point-events", None).await;

    assert_unauthenticated(&response);
}

#[rstest]
#[tokio::test]
async fn history_reports_ledger_failure_as_internal_error() {
    let app = TestApp::with_ledger_backend(Arc::new(UnavailableLedger))
        .with_user(UserProfile::new(1, "Mike", ApiToken::new(TOKEN)))
        .await;

    let response = app.get("/api/customers/1/point-events", Some(TOKEN)).await;

    assert_api_error(&response, "INTERNAL_ERROR", StatusCode::INTERNAL_SERVER_ERROR);
}
