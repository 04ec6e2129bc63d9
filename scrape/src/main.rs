//! Trending scrape diagnostic
//!
//! Prints what the digest would see on the trending pages. Makes no
//! authenticated calls and sends nothing.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trending_digest::adapters::TrendingPageScraper;
use trending_digest::app::{filter_developers, filter_repos};
use trending_digest::config::DEFAULT_GITHUB_URL;
use trending_digest::domain::entities::{
    AccountId, RelevanceSet, RepoMatch, TimeWindow, TrendingDeveloper, TrendingRepo,
};
use trending_digest::domain::ports::TrendingSource;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Repos,
    Developers,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which trending page to read
    #[arg(short, long, value_enum, default_value = "repos")]
    kind: Kind,

    /// Time window (daily, weekly, monthly); repeat for several
    #[arg(short, long)]
    window: Vec<TimeWindow>,

    /// Keep only entries tied to these logins; repeat for several
    #[arg(short, long)]
    user: Vec<String>,

    /// Print JSON instead of text lines
    #[arg(long)]
    json: bool,

    /// GitHub web base URL
    #[arg(long, default_value = DEFAULT_GITHUB_URL)]
    github_url: String,
}

impl Cli {
    fn windows(&self) -> Vec<TimeWindow> {
        if self.window.is_empty() {
            TimeWindow::ALL.to_vec()
        } else {
            self.window.clone()
        }
    }

    /// The first login owns the set, the rest are treated as followed
    fn relevance(&self) -> Option<RelevanceSet> {
        let (owner, following) = self.user.split_first()?;
        Some(RelevanceSet::new(
            AccountId::from(owner.as_str()),
            following.iter().map(|login| AccountId::from(login.as_str())),
        ))
    }
}

#[derive(Serialize)]
struct Listing<T> {
    window: TimeWindow,
    entries: Vec<T>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,trending_digest=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed arguments");

    let scraper =
        TrendingPageScraper::new(&cli.github_url).context("Failed to build trending scraper")?;
    let relevance = cli.relevance();

    match cli.kind {
        Kind::Repos => {
            let mut listings = Vec::new();
            for window in cli.windows() {
                let repos = scraper
                    .trending_repos(window)
                    .await
                    .with_context(|| format!("Failed to scrape {} repos", window))?;
                listings.push(Listing {
                    window,
                    entries: match &relevance {
                        Some(relevance) => filter_repos(repos, relevance),
                        None => repos.into_iter().map(unfiltered).collect(),
                    },
                });
            }
            emit(&listings, cli.json, repo_line)
        }
        Kind::Developers => {
            let mut listings = Vec::new();
            for window in cli.windows() {
                let developers = scraper
                    .trending_developers(window)
                    .await
                    .with_context(|| format!("Failed to scrape {} developers", window))?;
                listings.push(Listing {
                    window,
                    entries: match &relevance {
                        Some(relevance) => filter_developers(developers, relevance),
                        None => developers,
                    },
                });
            }
            emit(&listings, cli.json, developer_line)
        }
    }
}

/// A repo shown without filtering has no matched accounts
fn unfiltered(repo: TrendingRepo) -> RepoMatch {
    RepoMatch {
        repo,
        matched: Default::default(),
    }
}

fn emit<T: Serialize>(
    listings: &[Listing<T>],
    json: bool,
    line: impl Fn(&T) -> String,
) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(listings).context("Failed to encode JSON")?;
        println!("{}", out);
        return Ok(());
    }

    for listing in listings {
        println!("# {} ({})", listing.window.label(), listing.entries.len());
        for entry in &listing.entries {
            println!("{}", line(entry));
        }
    }
    Ok(())
}

fn repo_line(m: &RepoMatch) -> String {
    let repo = &m.repo;
    let mut line = format!(
        "{}  [{}] stars={} forks={}",
        repo.url,
        if repo.language.is_empty() { "-" } else { repo.language.as_str() },
        repo.stars,
        repo.forks
    );
    if !m.matched.is_empty() {
        let matched: Vec<&str> = m.matched.iter().map(|a| a.as_str()).collect();
        line.push_str(&format!("  matched={}", matched.join(",")));
    }
    line
}

fn developer_line(d: &TrendingDeveloper) -> String {
    if d.repo.is_empty() {
        format!("{} ({})", d.name, d.username)
    } else {
        format!("{} ({})  {}", d.name, d.username, d.repo)
    }
}
