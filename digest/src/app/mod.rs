//! Application layer
//!
//! Services coordinate the ports to build, filter, render and deliver
//! the digest.

pub mod digest_service;
pub mod relevance_service;
pub mod trending_service;

pub use digest_service::DigestService;
pub use relevance_service::{RelevanceService, FOLLOWING_PAGE_SIZE};
pub use trending_service::{filter_developers, filter_repos, TrendingService};
