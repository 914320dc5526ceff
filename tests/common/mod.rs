//! Common test utilities for integration tests.

pub mod assertions;
pub mod client;
pub mod fixtures;

pub use assertions::*;
pub use client::*;
pub use doubles::*;
pub use fixtures::*;
