//! HTTP handlers.
//!
//! - [`ping`] - liveness probe
//! - [`user`] - the authenticated caller's profile
//! - [`points`] - point accrual and ledger history

pub mod ping;
pub mod points;
pub mod user;

pub use ping::ping;
pub use points::{add_points, point_history};
pub use user::current_user;
