//! Loyalty point service.
//!
//! A small HTTP service that converts purchases into loyalty points and keeps
//! an append-only ledger of point events.
//!
//! # Architecture
//!
//! - **Domain Layer**: point formula, point events, user profile (pure)
//! - **Application Layer**: the add-point workflow
//! - **Infrastructure Layer**: configuration, PostgreSQL and in-memory storage
//! - **API Layer**: axum router, bearer-token guard, handlers
//!
//! # Endpoints
//!
//! - `GET /api/ping` - liveness probe
//! - `GET /api/user` - authenticated caller's profile
//! - `POST /api/points` - award points for a purchase
//! - `GET /api/customers/{customer_id}/point-events` - ledger history

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
