//! `GET /api/user`.

use axum::Json;

use crate::api::auth::AuthenticatedUser;
use crate::api::dto::UserResponse;

/// Returns the profile of the authenticated caller.
///
/// # Response
///
/// - `200 OK` - `{"id": 1, "name": "Mike"}`
/// - `401 Unauthorized` - missing or unknown bearer token
#[allow(clippy::unused_async)]
pub async fn current_user(AuthenticatedUser(user): AuthenticatedUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
