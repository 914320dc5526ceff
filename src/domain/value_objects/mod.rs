//! Value objects for the loyalty point domain.
//!
//! # Available Value Objects
//!
//! - [`CustomerId`] - Identifier of a customer earning points
//! - [`Timestamp`] - UTC timestamp at storage precision

mod customer_id;
mod timestamp;

pub use customer_id::{CustomerId, CustomerIdError};
pub use timestamp::Timestamp;
