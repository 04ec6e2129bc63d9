//! Trending domain entities
//!
//! Listings scraped from the trending pages, the windows they are queried
//! for, and the per-window results that survive relevance filtering.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::account::AccountId;

/// Trending time range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Daily,
    Weekly,
    Monthly,
}

impl TimeWindow {
    /// Every window, in declaration order
    pub const ALL: [TimeWindow; 3] = [TimeWindow::Daily, TimeWindow::Weekly, TimeWindow::Monthly];

    /// Value of the `since` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Daily => "daily",
            TimeWindow::Weekly => "weekly",
            TimeWindow::Monthly => "monthly",
        }
    }

    /// Capitalized display label
    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Daily => "Daily",
            TimeWindow::Weekly => "Weekly",
            TimeWindow::Monthly => "Monthly",
        }
    }

    fn index(&self) -> usize {
        match self {
            TimeWindow::Daily => 0,
            TimeWindow::Weekly => 1,
            TimeWindow::Monthly => 2,
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(TimeWindow::Daily),
            "weekly" => Ok(TimeWindow::Weekly),
            "monthly" => Ok(TimeWindow::Monthly),
            _ => Err(format!("Unknown time window: {}", s)),
        }
    }
}

/// A repository listing from the trending page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingRepo {
    /// `owner/name` path, unique per listing
    pub url: String,
    pub description: String,
    pub language: String,
    pub stars: u64,
    pub forks: u64,
    pub author: AccountId,
    /// "Built by" avatars, in page order
    pub contributors: Vec<AccountId>,
}

impl TrendingRepo {
    /// Author followed by contributors
    pub fn associated_accounts(&self) -> impl Iterator<Item = &AccountId> {
        std::iter::once(&self.author)
            .chain(self.contributors.iter())
            .filter(|account| !account.as_str().is_empty())
    }
}

/// A developer listing from the trending developers page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingDeveloper {
    /// Display name
    pub name: String,
    pub username: AccountId,
    /// `owner/name` path of the highlighted repository, empty if none
    pub repo: String,
    pub repo_description: String,
}

/// A trending repository with the relevant accounts tied to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoMatch {
    pub repo: TrendingRepo,
    /// Non-empty subset of the relevance set
    pub matched: BTreeSet<AccountId>,
}

/// Results keyed by time window, iterated in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowedResults<T> {
    windows: [Vec<T>; 3],
}

impl<T> Default for WindowedResults<T> {
    fn default() -> Self {
        Self {
            windows: [Vec::new(), Vec::new(), Vec::new()],
        }
    }
}

impl<T> WindowedResults<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the results for one window
    pub fn set(&mut self, window: TimeWindow, items: Vec<T>) {
        self.windows[window.index()] = items;
    }

    pub fn with(mut self, window: TimeWindow, items: Vec<T>) -> Self {
        self.set(window, items);
        self
    }

    pub fn get(&self, window: TimeWindow) -> &[T] {
        &self.windows[window.index()]
    }

    /// Windows in declaration order, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (TimeWindow, &[T])> {
        TimeWindow::ALL
            .into_iter()
            .map(move |window| (window, self.get(window)))
    }

    /// True when every window is empty
    pub fn is_empty(&self) -> bool {
        self.windows.iter().all(|items| items.is_empty())
    }

    pub fn total(&self) -> usize {
        self.windows.iter().map(|items| items.len()).sum()
    }
}
