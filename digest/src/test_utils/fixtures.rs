//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::collections::BTreeSet;

use crate::domain::entities::{AccountId, RelevanceSet, RepoMatch, TrendingDeveloper, TrendingRepo};

/// Create a trending repo whose author is the first path segment of `url`
pub fn test_repo(url: &str, contributors: &[&str]) -> TrendingRepo {
    TrendingRepo {
        url: url.to_string(),
        description: format!("Description of {}", url),
        language: "Rust".to_string(),
        stars: 1234,
        forks: 56,
        author: AccountId::from(url.split('/').next().unwrap_or_default()),
        contributors: contributors.iter().map(|c| AccountId::from(*c)).collect(),
    }
}

/// Create a repo match with the given matched accounts
pub fn test_repo_match(url: &str, matched: &[&str]) -> RepoMatch {
    RepoMatch {
        repo: test_repo(url, &[]),
        matched: matched
            .iter()
            .map(|m| AccountId::from(*m))
            .collect::<BTreeSet<_>>(),
    }
}

/// Create a trending developer
pub fn test_developer(name: &str, username: &str, repo: &str) -> TrendingDeveloper {
    TrendingDeveloper {
        name: name.to_string(),
        username: AccountId::from(username),
        repo: repo.to_string(),
        repo_description: String::new(),
    }
}

/// Create a relevance set owned by `owner`
pub fn test_relevance(owner: &str, following: &[&str]) -> RelevanceSet {
    RelevanceSet::new(
        AccountId::from(owner),
        following.iter().map(|f| AccountId::from(*f)),
    )
}

/// `count` distinct logins: `user-0`, `user-1`, ...
pub fn test_logins(prefix: &str, count: usize) -> Vec<AccountId> {
    (0..count)
        .map(|i| AccountId(format!("{}-{}", prefix, i)))
        .collect()
}
