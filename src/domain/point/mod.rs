//! Loyalty points: the award formula and the events the ledger stores.

mod calculator;
mod event;

pub use calculator::{
    AMOUNT_PER_POINT, POINT_TIERS, PREMIUM_TIER_POINTS, PREMIUM_TIER_THRESHOLD, PointTier,
    STANDARD_TIER_THRESHOLD, calc_point,
};
pub use event::{
    DEFAULT_PURCHASE_LABEL, EventLabel, LedgerRecord, MAX_EVENT_LABEL_LENGTH, PointEvent,
    PointEventError,
};
