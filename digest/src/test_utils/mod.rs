//! Test utilities
//!
//! Manual mock implementations of the ports and test fixtures.
//! Mocks record the calls they receive and can be configured to fail.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
