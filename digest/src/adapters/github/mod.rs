//! GitHub adapter
//!
//! REST API client for the social graph and the trending page scraper.

pub mod client;
pub mod parse;
pub mod trending;

pub use client::GitHubClientImpl;
pub use trending::TrendingPageScraper;
