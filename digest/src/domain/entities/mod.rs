//! Domain entities
//!
//! Pure domain models: accounts, the relevance set, and trending listings.
//! All of them live for a single run.

pub mod account;
pub mod trending;

pub use account::{AccountId, RelevanceSet};
pub use trending::{RepoMatch, TimeWindow, TrendingDeveloper, TrendingRepo, WindowedResults};
