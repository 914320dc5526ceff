//! Add-point workflow.
//!
//! Turns a purchase into a ledger entry.
//!
//! # Workflow Steps
//!
//! 1. Calculate the award for the purchase amount (pure)
//! 2. Build the `PointEvent` stamped with the given time (pure)
//! 3. Register the event with the ledger (I/O)
//!
//! # Examples
//!
//! ```rust
//! use loyalty_points::application::add_point::{AddPointCommand, plan_point_event};
//! use loyalty_points::domain::{CustomerId, EventLabel, Timestamp};
//!
//! let command = AddPointCommand::new(CustomerId::create(1).unwrap(), 12_000, EventLabel::purchase());
//! let event = plan_point_event(&command, Timestamp::now());
//!
//! assert_eq!(event.point(), 200);
//! ```

use crate::domain::{CustomerId, EventLabel, LedgerRecord, PointEvent, Timestamp, calc_point};
use crate::infrastructure::{LedgerError, PointLedger};

/// Request to award points for a purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPointCommand {
    /// The customer who made the purchase.
    pub customer_id: CustomerId,
    /// Purchase amount.
    pub amount: u64,
    /// Reason recorded in the ledger.
    pub label: EventLabel,
}

impl AddPointCommand {
    #[must_use]
    pub const fn new(customer_id: CustomerId, amount: u64, label: EventLabel) -> Self {
        Self {
            customer_id,
            amount,
            label,
        }
    }
}

/// Builds the point event for `command` without touching storage.
#[must_use]
pub fn plan_point_event(command: &AddPointCommand, now: Timestamp) -> PointEvent {
    // Awards never exceed PREMIUM_TIER_POINTS, so saturation is unreachable.
    let point = i64::try_from(calc_point(command.amount)).unwrap_or(i64::MAX);

    PointEvent::new(command.customer_id, command.label.clone(), point, now)
}

/// Calculates the award for `command` and registers it with `ledger`.
///
/// A purchase below the first tier still produces a zero-point record, so
/// the ledger keeps a trace of every purchase.
///
/// # Errors
///
/// Propagates the ledger's `LedgerError` unchanged.
pub async fn add_point(
    ledger: &dyn PointLedger,
    command: &AddPointCommand,
    now: Timestamp,
) -> Result<LedgerRecord, LedgerError> {
    let event = plan_point_event(command, now);
    tracing::info!(
        customer_id = %command.customer_id,
        amount = command.amount,
        point = event.point(),
        "Adding points for purchase"
    );

    ledger.register(event).await
}
