//! API layer.
//!
//! ```text
//! HTTP Request
//!     │
//!     ▼
//! ┌───────────────┐
//! │  Auth guard   │ ── Resolve bearer token (protected routes only)
//! └───────────────┘
//!     │
//!     ▼
//! ┌───────────────┐
//! │   Handlers    │ ── Extract request, call workflow or ledger
//! └───────────────┘
//!     │
//!     ▼
//! JSON Response
//! ```
//!
//! # Modules
//!
//! - [`auth`]: Bearer-token extractor
//! - [`dto`]: Request and response bodies
//! - [`error`]: `ApiError` and its HTTP rendering
//! - [`handlers`]: Axum handlers
//! - [`routes`]: Router configuration

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use auth::AuthenticatedUser;
pub use error::ApiError;
pub use routes::create_router;
