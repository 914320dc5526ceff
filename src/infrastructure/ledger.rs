//! Point ledger: append-only storage of point events.
//!
//! # Design
//!
//! - **Trait-based abstraction**: [`PointLedger`] has a PostgreSQL
//!   implementation for production and an in-memory one for tests and the
//!   database-less demo mode.
//! - **Append-only**: events are inserted and read, never updated or deleted.
//! - **Deferred execution**: operations return a boxed future that performs
//!   the I/O when awaited.
//!
//! # Table Schema
//!
//! ```sql
//! CREATE TABLE customer_point_events (
//!     id BIGSERIAL PRIMARY KEY,
//!     customer_id BIGINT NOT NULL REFERENCES customers (id),
//!     event VARCHAR(255) NOT NULL,
//!     point BIGINT NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use futures::future::BoxFuture;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::{CustomerId, EventLabel, LedgerRecord, PointEvent, Timestamp};

/// Errors raised while writing to or reading from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The event references a customer that does not exist.
    #[error("Customer {0} does not exist")]
    UnknownCustomer(CustomerId),
    /// Any other storage failure (connection loss, constraint, decode).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Append-only store of point events.
///
/// Each call to [`register`](Self::register) inserts exactly one record.
/// Concurrent calls are independent of each other.
pub trait PointLedger: Send + Sync {
    /// Stores `event` and returns the record as persisted.
    ///
    /// # Errors
    ///
    /// - `LedgerError::UnknownCustomer` if the customer does not exist
    /// - `LedgerError::Storage` if the write fails for any other reason
    fn register(&self, event: PointEvent) -> BoxFuture<'static, Result<LedgerRecord, LedgerError>>;

    /// Returns every record of `customer_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the read fails.
    fn records_for(
        &self,
        customer_id: CustomerId,
    ) -> BoxFuture<'static, Result<Vec<LedgerRecord>, LedgerError>>;
}

// =============================================================================
// PostgreSQL
// =============================================================================

/// PostgreSQL implementation writing to `customer_point_events`.
///
/// The customer foreign key is enforced by the database; a violation is
/// reported as [`LedgerError::UnknownCustomer`].
#[derive(Debug, Clone)]
pub struct PostgresPointLedger {
    pool: PgPool,
}

impl PostgresPointLedger {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LedgerRow {
    id: i64,
    customer_id: i64,
    event: String,
    point: i64,
    created_at: DateTime<Utc>,
}

impl From<LedgerRow> for LedgerRecord {
    fn from(row: LedgerRow) -> Self {
        Self {
            id: row.id,
            customer_id: CustomerId::from_stored(row.customer_id),
            event: EventLabel::from_stored(row.event),
            point: row.point,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

fn ledger_error(error: &sqlx::Error, customer_id: CustomerId) -> LedgerError {
    match error {
        sqlx::Error::Database(database_error) if database_error.is_foreign_key_violation() => {
            LedgerError::UnknownCustomer(customer_id)
        }
        other => LedgerError::Storage(other.to_string()),
    }
}

impl PointLedger for PostgresPointLedger {
    fn register(&self, event: PointEvent) -> BoxFuture<'static, Result<LedgerRecord, LedgerError>> {
        let pool = self.pool.clone();

        async move {
            let customer_id = event.customer_id();
            let id: i64 = sqlx::query_scalar(
                "INSERT INTO customer_point_events (customer_id, event, point, created_at) \
                 VALUES ($1, $2, $3, $4) RETURNING id",
            )
            .bind(customer_id.value())
            .bind(event.event().as_str())
            .bind(event.point())
            .bind(*event.created_at().as_datetime())
            .fetch_one(&pool)
            .await
            .map_err(|error| {
                tracing::warn!(%customer_id, error = %error, "Point event insert failed");
                ledger_error(&error, customer_id)
            })?;

            tracing::debug!(id, %customer_id, point = event.point(), "Point event registered");
            Ok(LedgerRecord::from_event(id, event))
        }
        .boxed()
    }

    fn records_for(
        &self,
        customer_id: CustomerId,
    ) -> BoxFuture<'static, Result<Vec<LedgerRecord>, LedgerError>> {
        let pool = self.pool.clone();

        async move {
            let rows: Vec<LedgerRow> = sqlx::query_as(
                "SELECT id, customer_id, event, point, created_at \
                 FROM customer_point_events WHERE customer_id = $1 ORDER BY id ASC",
            )
            .bind(customer_id.value())
            .fetch_all(&pool)
            .await
            .map_err(|error| LedgerError::Storage(error.to_string()))?;

            Ok(rows.into_iter().map(LedgerRecord::from).collect())
        }
        .boxed()
    }
}

// =============================================================================
// In-Memory
// =============================================================================

#[derive(Debug, Default)]
struct LedgerState {
    customers: HashSet<CustomerId>,
    records: Vec<LedgerRecord>,
}

/// In-memory ledger.
///
/// Mirrors the database's foreign key: customers must be added with
/// [`add_customer`](Self::add_customer) before events for them are accepted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPointLedger {
    state: Arc<RwLock<LedgerState>>,
}

impl InMemoryPointLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger that already knows the given customers.
    #[must_use]
    pub fn with_customers(customers: impl IntoIterator<Item = CustomerId>) -> Self {
        let state = LedgerState {
            customers: customers.into_iter().collect(),
            records: Vec::new(),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Makes `customer_id` a valid target for point events.
    pub async fn add_customer(&self, customer_id: CustomerId) {
        self.state.write().await.customers.insert(customer_id);
    }

    /// Returns every stored record across all customers, in insertion order.
    pub async fn all_records(&self) -> Vec<LedgerRecord> {
        self.state.read().await.records.clone()
    }
}

impl PointLedger for InMemoryPointLedger {
    fn register(&self, event: PointEvent) -> BoxFuture<'static, Result<LedgerRecord, LedgerError>> {
        let state = Arc::clone(&self.state);

        async move {
            let mut guard = state.write().await;
            let customer_id = event.customer_id();
            if !guard.customers.contains(&customer_id) {
                return Err(LedgerError::UnknownCustomer(customer_id));
            }

            let id = i64::try_from(guard.records.len())
                .map_err(|error| LedgerError::Storage(error.to_string()))?
                + 1;
            let record = LedgerRecord::from_event(id, event);
            guard.records.push(record.clone());
            drop(guard);

            Ok(record)
        }
        .boxed()
    }

    fn records_for(
        &self,
        customer_id: CustomerId,
    ) -> BoxFuture<'static, Result<Vec<LedgerRecord>, LedgerError>> {
        let state = Arc::clone(&self.state);

        async move {
            let guard = state.read().await;
            Ok(guard
                .records
                .iter()
                .filter(|record| record.customer_id == customer_id)
                .cloned()
                .collect())
        }
        .boxed()
    }
}
