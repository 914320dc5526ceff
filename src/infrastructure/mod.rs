//! Infrastructure layer.
//!
//! - `config` - Application settings loaded from environment variables
//! - `database` - PostgreSQL pool creation and embedded migrations
//! - `ledger` - Point ledger trait with PostgreSQL and in-memory backends
//! - `users` - Bearer token validation with PostgreSQL and in-memory backends
//! - `dependencies` - Dependency injection container used as router state

mod config;
mod database;
mod dependencies;
mod ledger;
mod users;

pub use config::{AppConfig, ConfigError, LogFormat};
pub use database::{DatabaseError, MIGRATOR, connect_and_migrate};
pub use dependencies::AppDependencies;
pub use ledger::{InMemoryPointLedger, LedgerError, PointLedger, PostgresPointLedger};
pub use users::{
    CredentialError, CredentialValidator, InMemoryUserDirectory, PostgresUserDirectory,
};
