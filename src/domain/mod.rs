//! Domain layer for the loyalty point service.
//!
//! Pure business rules with no knowledge of HTTP or storage.
//!
//! # Structure
//!
//! - [`value_objects`] - Identifiers and timestamps shared across the domain
//! - [`point`] - Point calculation, point events and ledger records
//! - [`user`] - The authenticated user's profile

pub mod point;
pub mod user;
pub mod value_objects;

pub use point::*;
pub use user::*;
pub use value_objects::*;
