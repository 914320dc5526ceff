//! `GET /api/ping`.

use axum::Json;

use crate::api::dto::PingResponse;

/// Always answers `200 OK` with `{"message":"pong"}`.
///
/// Takes no extractors, so headers and query parameters cannot change the
/// outcome.
#[allow(clippy::unused_async)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::pong())
}
