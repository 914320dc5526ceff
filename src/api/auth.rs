//! Bearer-token authentication guard.
//!
//! [`AuthenticatedUser`] is an axum extractor. A handler that takes it only
//! runs for authenticated requests:
//!
//! 1. A `UserProfile` already present in the request extensions is trusted.
//!    Layers that authenticate by other means (or test harnesses acting as
//!    a user) insert it there.
//! 2. Otherwise the `Authorization: Bearer <token>` header is resolved
//!    through the configured [`CredentialValidator`](crate::infrastructure::CredentialValidator).
//! 3. Anything else is rejected with `401 Unauthorized`.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::api::error::ApiError;
use crate::domain::{ApiToken, UserProfile};
use crate::infrastructure::AppDependencies;

const BEARER_SCHEME: &str = "bearer";

/// The caller's profile, resolved from the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserProfile);

impl FromRequestParts<AppDependencies> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppDependencies,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<UserProfile>() {
            return Ok(Self(user.clone()));
        }

        let Some(token) = bearer_token(&parts.headers) else {
            tracing::debug!("Request without bearer token");
            return Err(ApiError::Unauthenticated);
        };

        match state.credentials().validate(&token).await? {
            Some(user) => {
                tracing::debug!(user_id = user.id, "Bearer token accepted");
                Ok(Self(user))
            }
            None => {
                tracing::warn!("Bearer token rejected");
                Err(ApiError::Unauthenticated)
            }
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; the token itself is returned
/// verbatim. Returns `None` for a missing header, another scheme, or an
/// empty token.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<ApiToken> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.is_empty())
        .then(|| ApiToken::new(token))
}
