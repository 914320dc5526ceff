//! Dependency injection container.
//!
//! [`AppDependencies`] is the axum router state. Storage backends are held
//! as trait objects so handlers run unchanged against PostgreSQL or the
//! in-memory implementations.

use std::sync::Arc;

use super::config::AppConfig;
use super::database::{DatabaseError, connect_and_migrate};
use super::ledger::{InMemoryPointLedger, PointLedger, PostgresPointLedger};
use super::users::{CredentialValidator, InMemoryUserDirectory, PostgresUserDirectory};
use crate::domain::{ApiToken, CustomerId, UserProfile};

/// Identifier shared by the demo user and demo customer in in-memory mode.
const DEMO_IDENTIFIER: i64 = 1;

/// Application dependency container.
///
/// Cloning is cheap: every backend sits behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use loyalty_points::infrastructure::{
///     AppConfig, AppDependencies, InMemoryPointLedger, InMemoryUserDirectory,
/// };
///
/// let dependencies = AppDependencies::new(
///     AppConfig::default(),
///     Arc::new(InMemoryPointLedger::new()),
///     Arc::new(InMemoryUserDirectory::new()),
/// );
///
/// assert_eq!(dependencies.config().app_port, 8080);
/// ```
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    ledger: Arc<dyn PointLedger>,
    credentials: Arc<dyn CredentialValidator>,
}

impl AppDependencies {
    #[must_use]
    pub fn new(
        config: AppConfig,
        ledger: Arc<dyn PointLedger>,
        credentials: Arc<dyn CredentialValidator>,
    ) -> Self {
        Self {
            config,
            ledger,
            credentials,
        }
    }

    /// Wires the storage backends selected by `config`.
    ///
    /// With `database_url` set, connects to PostgreSQL and runs the
    /// migrations; otherwise falls back to [`in_memory`](Self::in_memory).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database is unreachable or a migration
    /// fails.
    pub async fn from_config(config: AppConfig) -> Result<Self, DatabaseError> {
        let Some(database_url) = config.database_url.clone() else {
            return Ok(Self::in_memory(config));
        };

        let pool = connect_and_migrate(&database_url, config.database_max_connections).await?;
        tracing::info!("Storage: PostgreSQL");

        Ok(Self::new(
            config,
            Arc::new(PostgresPointLedger::new(pool.clone())),
            Arc::new(PostgresUserDirectory::new(pool)),
        ))
    }

    /// Wires the in-memory backends.
    ///
    /// When `demo_api_token` is configured, a demo user holding that token
    /// and a demo customer are seeded so the protected endpoints can be
    /// exercised without a database.
    #[must_use]
    pub fn in_memory(config: AppConfig) -> Self {
        let (ledger, users) = match config.demo_api_token.as_deref() {
            Some(token) => {
                tracing::info!(customer_id = DEMO_IDENTIFIER, "Seeding demo user and customer");
                (
                    InMemoryPointLedger::with_customers([CustomerId::from_stored(DEMO_IDENTIFIER)]),
                    InMemoryUserDirectory::with_users([UserProfile::new(
                        DEMO_IDENTIFIER,
                        "demo",
                        ApiToken::new(token),
                    )]),
                )
            }
            None => (InMemoryPointLedger::new(), InMemoryUserDirectory::new()),
        };
        tracing::warn!("Storage: in-memory, data is lost on shutdown");

        Self::new(config, Arc::new(ledger), Arc::new(users))
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the point ledger.
    #[must_use]
    pub fn ledger(&self) -> &Arc<dyn PointLedger> {
        &self.ledger
    }

    /// Returns the credential validator used by the auth guard.
    #[must_use]
    pub fn credentials(&self) -> &Arc<dyn CredentialValidator> {
        &self.credentials
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("bind_address", &self.config.bind_address())
            .finish_non_exhaustive()
    }
}
