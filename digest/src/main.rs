//! Trending Digest runner
//!
//! Sends one digest per invocation and exits. Scheduling is left to cron
//! or a CI timer.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trending_digest::adapters::{GitHubClientImpl, TelegramClientImpl, TrendingPageScraper};
use trending_digest::app::{DigestService, RelevanceService, TrendingService};
use trending_digest::config::Config;
use trending_digest::domain::entities::AccountId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,trending_digest=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting trending digest...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    // Create adapters
    let github = Arc::new(
        GitHubClientImpl::new(&config.github_api_url, &config.github_token)
            .context("Failed to build GitHub client")?,
    );
    let scraper = Arc::new(
        TrendingPageScraper::new(&config.github_url).context("Failed to build trending scraper")?,
    );
    let telegram = Arc::new(
        TelegramClientImpl::new(&config.telegram_api_url, &config.telegram_token)
            .context("Failed to build Telegram client")?,
    );

    // Create application services
    let service = DigestService::new(
        RelevanceService::new(github, config.github_user.clone().map(AccountId::from)),
        TrendingService::new(scraper),
        telegram,
        config.telegram_chat.clone(),
        config.github_url.clone(),
    );

    if let Err(e) = service.run().await {
        tracing::error!(error = %e, "Digest run failed");
        return Err(e.into());
    }

    tracing::info!("Done");
    Ok(())
}
