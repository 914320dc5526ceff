//! Application layer.
//!
//! Workflows that combine pure domain rules with the ledger port.

pub mod add_point;

pub use add_point::{AddPointCommand, add_point, plan_point_event};
