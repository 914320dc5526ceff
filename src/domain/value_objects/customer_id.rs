//! Customer ID value object.
//!
//! Customers are keyed by the auto-increment primary key of the
//! `customers` table, so the identifier is a positive 64-bit integer.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for `CustomerId`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerIdError {
    /// The identifier is zero or negative.
    #[error("Customer ID must be positive, got {0}")]
    NotPositive(i64),
}

/// Identifier of a customer that earns or spends points.
///
/// # Examples
///
/// ```rust
/// use loyalty_points::domain::CustomerId;
///
/// let id = CustomerId::create(1).unwrap();
/// assert_eq!(id.value(), 1);
///
/// assert!(CustomerId::create(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct CustomerId(i64);

impl CustomerId {
    /// Creates a `CustomerId` after checking the value is positive.
    ///
    /// # Errors
    ///
    /// Returns `CustomerIdError::NotPositive` for zero or negative values.
    pub const fn create(value: i64) -> Result<Self, CustomerIdError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(CustomerIdError::NotPositive(value))
        }
    }

    /// Wraps a value read back from storage, where the key is known to be valid.
    #[must_use]
    pub const fn from_stored(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl TryFrom<i64> for CustomerId {
    type Error = CustomerIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl From<CustomerId> for i64 {
    fn from(customer_id: CustomerId) -> Self {
        customer_id.0
    }
}
