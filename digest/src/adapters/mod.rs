//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod github;
pub mod telegram;

pub use github::{GitHubClientImpl, TrendingPageScraper};
pub use telegram::TelegramClientImpl;
