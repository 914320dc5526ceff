//! The authenticated user.
//!
//! Users are owned by the credential store; this service only reads them.

use std::fmt;

use serde::Serialize;

/// Opaque API token presented as a bearer credential.
///
/// `Debug` output is redacted so tokens never reach the logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiToken(String);

impl ApiToken {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ApiToken(***)")
    }
}

/// Profile of a user who may call protected endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: i64,
    /// Display name.
    pub name: String,
    #[serde(skip)]
    pub api_token: ApiToken,
}

impl UserProfile {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, api_token: ApiToken) -> Self {
        Self {
            id,
            name: name.into(),
            api_token,
        }
    }
}
