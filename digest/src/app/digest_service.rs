//! Digest service
//!
//! Runs one digest end to end: relevance set, trending repos, trending
//! developers, rendering, delivery. Any failure aborts the run before
//! anything is sent.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::{GitHubClient, MessageSender, TrendingSource};
use crate::error::AppError;
use crate::message::render_digest;

use super::{RelevanceService, TrendingService};

pub struct DigestService<GC, TS, MS>
where
    GC: GitHubClient,
    TS: TrendingSource,
    MS: MessageSender,
{
    relevance: RelevanceService<GC>,
    trending: TrendingService<TS>,
    sender: Arc<MS>,
    chat_id: String,
    github_url: String,
}

impl<GC, TS, MS> DigestService<GC, TS, MS>
where
    GC: GitHubClient,
    TS: TrendingSource,
    MS: MessageSender,
{
    /// `github_url` is the web base used for links in the message
    pub fn new(
        relevance: RelevanceService<GC>,
        trending: TrendingService<TS>,
        sender: Arc<MS>,
        chat_id: String,
        github_url: String,
    ) -> Self {
        Self {
            relevance,
            trending,
            sender,
            chat_id,
            github_url,
        }
    }

    /// Build and send the digest. Sends exactly one message on success.
    pub async fn run(&self) -> Result<(), AppError> {
        let relevance = self.relevance.build().await?;

        let repos = self.trending.trending_repos(&relevance).await?;
        let developers = self.trending.trending_developers(&relevance).await?;

        let message = render_digest(&repos, &developers, &self.github_url);
        if message.is_empty() {
            warn!("No relevant trending activity, sending an empty digest");
        }

        self.sender.send_message(&self.chat_id, &message).await?;

        info!(
            repos = repos.total(),
            developers = developers.total(),
            chat_id = %self.chat_id,
            "Digest sent"
        );
        Ok(())
    }
}
