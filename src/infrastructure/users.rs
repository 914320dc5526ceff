//! Credential validation: resolving a bearer token to a user.
//!
//! Authentication is a replaceable capability. The API layer only depends on
//! [`CredentialValidator`]; this module provides a PostgreSQL lookup against
//! the `users` table and an in-memory directory.
//!
//! Tokens are compared by exact equality. Hashing and expiry are left to
//! whichever validator replaces these.

use std::collections::HashMap;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::{ApiToken, UserProfile};

/// Failure of the credential store itself, as opposed to a rejected token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

/// Resolves bearer tokens to user profiles.
pub trait CredentialValidator: Send + Sync {
    /// Looks up the user owning `token`.
    ///
    /// Returns `Ok(None)` when no user owns the token.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Unavailable` if the store cannot be queried.
    fn validate(
        &self,
        token: &ApiToken,
    ) -> BoxFuture<'static, Result<Option<UserProfile>, CredentialError>>;
}

// =============================================================================
// PostgreSQL
// =============================================================================

/// Looks tokens up in the `users.api_token` column.
#[derive(Debug, Clone)]
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    api_token: String,
}

impl CredentialValidator for PostgresUserDirectory {
    fn validate(
        &self,
        token: &ApiToken,
    ) -> BoxFuture<'static, Result<Option<UserProfile>, CredentialError>> {
        let pool = self.pool.clone();
        let token = token.clone();

        async move {
            let row: Option<UserRow> =
                sqlx::query_as("SELECT id, name, api_token FROM users WHERE api_token = $1")
                    .bind(token.as_str())
                    .fetch_optional(&pool)
                    .await
                    .map_err(|error| {
                        tracing::error!(error = %error, "User lookup failed");
                        CredentialError::Unavailable(error.to_string())
                    })?;

            Ok(row.map(|row| UserProfile::new(row.id, row.name, ApiToken::new(row.api_token))))
        }
        .boxed()
    }
}

// =============================================================================
// In-Memory
// =============================================================================

/// In-memory user directory keyed by token.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<ApiToken, UserProfile>>>,
}

impl InMemoryUserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding `users`.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = UserProfile>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.api_token.clone(), user))
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Adds `user`, replacing any user holding the same token.
    pub async fn insert(&self, user: UserProfile) {
        self.users
            .write()
            .await
            .insert(user.api_token.clone(), user);
    }
}

impl CredentialValidator for InMemoryUserDirectory {
    fn validate(
        &self,
        token: &ApiToken,
    ) -> BoxFuture<'static, Result<Option<UserProfile>, CredentialError>> {
        let users = Arc::clone(&self.users);
        let token = token.clone();

        async move { Ok(users.read().await.get(&token).cloned()) }.boxed()
    }
}
