//! Custom assertion helpers for integration tests.

use axum::http::StatusCode;
use axum::http::header::WWW_AUTHENTICATE;

use super::client::TestResponse;

pub fn assert_api_error(response: &TestResponse, expected_code: &str, expected_status: StatusCode) {
    assert_eq!(
        response.status, expected_status,
        "Expected status {expected_status}, got {}: {:?}",
        response.status, response.body
    );
    assert_eq!(
        response.body["code"], expected_code,
        "Expected error code '{expected_code}', got {:?}",
        response.body
    );
}

pub fn assert_unauthenticated(response: &TestResponse) {
    assert_api_error(response, "UNAUTHENTICATED", StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Unauthenticated.");
    assert_eq!(response.headers[WWW_AUTHENTICATE], "Bearer");
}

pub fn assert_status(response: &TestResponse, expected_status: StatusCode) {
    assert_eq!(
        response.status, expected_status,
        "Expected status {expected_status}, got {}: {:?}",
        response.status, response.body
    );
}
