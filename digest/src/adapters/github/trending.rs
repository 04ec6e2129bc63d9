//! Trending page scraper
//!
//! Fetches the public trending listings and hands the HTML to `parse`.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::debug;

use super::client::USER_AGENT;
use super::parse::{parse_developers, parse_repos, DeveloperSelectors, RepoSelectors};
use crate::domain::entities::{TimeWindow, TrendingDeveloper, TrendingRepo};
use crate::domain::ports::TrendingSource;
use crate::error::ScrapeError;

pub struct TrendingPageScraper {
    http: Client,
    base_url: String,
    repo_selectors: RepoSelectors,
    developer_selectors: DeveloperSelectors,
}

impl TrendingPageScraper {
    pub fn new(base_url: &str) -> Result<Self, ScrapeError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            repo_selectors: RepoSelectors::new()?,
            developer_selectors: DeveloperSelectors::new()?,
        })
    }

    fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_page(&self, path: &str, window: TimeWindow) -> Result<String, ScrapeError> {
        let url = self.page_url(path);
        debug!(%url, since = window.as_str(), "Fetching trending page");

        let response = self
            .http
            .get(&url)
            .query(&[("since", window.as_str())])
            .header(ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl TrendingSource for TrendingPageScraper {
    async fn trending_repos(&self, window: TimeWindow) -> Result<Vec<TrendingRepo>, ScrapeError> {
        let html = self.fetch_page("/trending", window).await?;
        let repos = parse_repos(&html, &self.repo_selectors)?;
        debug!(window = window.as_str(), count = repos.len(), "Parsed trending repos");
        Ok(repos)
    }

    async fn trending_developers(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<TrendingDeveloper>, ScrapeError> {
        let html = self.fetch_page("/trending/developers", window).await?;
        let developers = parse_developers(&html, &self.developer_selectors)?;
        debug!(
            window = window.as_str(),
            count = developers.len(),
            "Parsed trending developers"
        );
        Ok(developers)
    }
}
