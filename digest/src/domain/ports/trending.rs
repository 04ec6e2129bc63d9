//! Trending source port trait

use async_trait::async_trait;

use crate::domain::entities::{TimeWindow, TrendingDeveloper, TrendingRepo};
use crate::error::ScrapeError;

/// Source of trending listings, in the platform's ranking order
#[async_trait]
pub trait TrendingSource: Send + Sync {
    async fn trending_repos(&self, window: TimeWindow) -> Result<Vec<TrendingRepo>, ScrapeError>;

    async fn trending_developers(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<TrendingDeveloper>, ScrapeError>;
}
