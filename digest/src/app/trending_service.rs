//! Trending service
//!
//! Reads every time window from the trending source and keeps the listings
//! tied to the relevance set. Windows are filtered independently and the
//! source's ranking order is preserved.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{
    RelevanceSet, RepoMatch, TimeWindow, TrendingDeveloper, TrendingRepo, WindowedResults,
};
use crate::domain::ports::TrendingSource;
use crate::error::AppError;

/// Keep repos with at least one relevant author or contributor
pub fn filter_repos(repos: Vec<TrendingRepo>, relevance: &RelevanceSet) -> Vec<RepoMatch> {
    repos
        .into_iter()
        .filter_map(|repo| {
            let matched = relevance.matching(repo.associated_accounts());
            if matched.is_empty() {
                None
            } else {
                Some(RepoMatch { repo, matched })
            }
        })
        .collect()
}

/// Keep developers whose username is relevant
pub fn filter_developers(
    developers: Vec<TrendingDeveloper>,
    relevance: &RelevanceSet,
) -> Vec<TrendingDeveloper> {
    developers
        .into_iter()
        .filter(|developer| relevance.contains(developer.username.as_str()))
        .collect()
}

pub struct TrendingService<TS>
where
    TS: TrendingSource,
{
    source: Arc<TS>,
}

impl<TS> TrendingService<TS>
where
    TS: TrendingSource,
{
    pub fn new(source: Arc<TS>) -> Self {
        Self { source }
    }

    /// Relevant trending repos for every window
    pub async fn trending_repos(
        &self,
        relevance: &RelevanceSet,
    ) -> Result<WindowedResults<RepoMatch>, AppError> {
        let mut results = WindowedResults::new();

        for window in TimeWindow::ALL {
            let repos = self.source.trending_repos(window).await?;
            let scraped = repos.len();
            let matches = filter_repos(repos, relevance);
            info!(
                window = window.as_str(),
                scraped,
                matched = matches.len(),
                "Filtered trending repos"
            );
            results.set(window, matches);
        }

        Ok(results)
    }

    /// Relevant trending developers for every window
    pub async fn trending_developers(
        &self,
        relevance: &RelevanceSet,
    ) -> Result<WindowedResults<TrendingDeveloper>, AppError> {
        let mut results = WindowedResults::new();

        for window in TimeWindow::ALL {
            let developers = self.source.trending_developers(window).await?;
            let scraped = developers.len();
            let matches = filter_developers(developers, relevance);
            info!(
                window = window.as_str(),
                scraped,
                matched = matches.len(),
                "Filtered trending developers"
            );
            results.set(window, matches);
        }

        Ok(results)
    }
}
