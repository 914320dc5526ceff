//! API integration tests.

pub mod point_history_tests;
pub mod points_tests;
