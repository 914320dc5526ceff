//! Point events and their persisted form.
//!
//! A [`PointEvent`] describes one grant (or deduction) of points before it
//! is stored; a [`LedgerRecord`] is the same event after the ledger has
//! assigned it an identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::{CustomerId, Timestamp};

/// Maximum label length, matching the `event` column width.
pub const MAX_EVENT_LABEL_LENGTH: usize = 255;

/// Label used when a purchase earns points and the caller gave no label.
pub const DEFAULT_PURCHASE_LABEL: &str = "purchase";

/// Validation errors for point events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointEventError {
    /// The label is empty or whitespace only.
    #[error("Event label must not be blank")]
    BlankLabel,
    /// The label does not fit in the ledger column.
    #[error("Event label is {length} characters, maximum is {max}", max = MAX_EVENT_LABEL_LENGTH)]
    LabelTooLong {
        /// Length of the rejected label in characters.
        length: usize,
    },
}

/// Short text describing why points were granted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventLabel(String);

impl EventLabel {
    /// Creates a label, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - `PointEventError::BlankLabel` if nothing is left after trimming
    /// - `PointEventError::LabelTooLong` if the label exceeds
    ///   [`MAX_EVENT_LABEL_LENGTH`] characters
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loyalty_points::domain::point::EventLabel;
    ///
    /// let label = EventLabel::create("  birthday bonus ").unwrap();
    /// assert_eq!(label.as_str(), "birthday bonus");
    ///
    /// assert!(EventLabel::create("   ").is_err());
    /// ```
    pub fn create(value: &str) -> Result<Self, PointEventError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(PointEventError::BlankLabel);
        }

        let length = trimmed.chars().count();
        if length > MAX_EVENT_LABEL_LENGTH {
            return Err(PointEventError::LabelTooLong { length });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The label granted for purchases when none is specified.
    #[must_use]
    pub fn purchase() -> Self {
        Self(DEFAULT_PURCHASE_LABEL.to_string())
    }

    /// Wraps a label read back from storage.
    #[must_use]
    pub const fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventLabel {
    type Error = PointEventError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<EventLabel> for String {
    fn from(label: EventLabel) -> Self {
        label.0
    }
}

impl fmt::Display for EventLabel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// A single grant or deduction of points for a customer.
///
/// Immutable once constructed; it exists only to be handed to a
/// [`PointLedger`](crate::infrastructure::PointLedger).
///
/// # Examples
///
/// ```rust
/// use loyalty_points::domain::{CustomerId, EventLabel, PointEvent, Timestamp};
///
/// let event = PointEvent::new(
///     CustomerId::create(1).unwrap(),
///     EventLabel::create("sign-up bonus").unwrap(),
///     100,
///     Timestamp::from_ymd_hms(2018, 8, 4, 12, 34, 56).unwrap(),
/// );
///
/// assert_eq!(event.point(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointEvent {
    customer_id: CustomerId,
    event: EventLabel,
    point: i64,
    created_at: Timestamp,
}

impl PointEvent {
    /// Creates an event with an explicit timestamp.
    #[must_use]
    pub const fn new(
        customer_id: CustomerId,
        event: EventLabel,
        point: i64,
        created_at: Timestamp,
    ) -> Self {
        Self {
            customer_id,
            event,
            point,
            created_at,
        }
    }

    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn occurring_now(customer_id: CustomerId, event: EventLabel, point: i64) -> Self {
        Self::new(customer_id, event, point, Timestamp::now())
    }

    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    #[must_use]
    pub const fn event(&self) -> &EventLabel {
        &self.event
    }

    /// Point delta; negative values are deductions.
    #[must_use]
    pub const fn point(&self) -> i64 {
        self.point
    }

    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// A point event as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Identifier assigned by the ledger.
    pub id: i64,
    pub customer_id: CustomerId,
    pub event: EventLabel,
    pub point: i64,
    pub created_at: Timestamp,
}

impl LedgerRecord {
    /// Materializes `event` under the ledger-assigned `id`.
    #[must_use]
    pub fn from_event(id: i64, event: PointEvent) -> Self {
        Self {
            id,
            customer_id: event.customer_id,
            event: event.event,
            point: event.point,
            created_at: event.created_at,
        }
    }

    /// Returns `true` when every stored field equals the event's field.
    #[must_use]
    pub fn mirrors(&self, event: &PointEvent) -> bool {
        self.customer_id == event.customer_id
            && self.event == event.event
            && self.point == event.point
            && self.created_at == event.created_at
    }
}
