//! GitHub client port trait
//!
//! Defines the interface for the authenticated REST calls the relevance
//! set is built from.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::entities::AccountId;
use crate::error::GitHubError;

/// Minimal user representation returned by `/user` and `/user/following`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

impl From<GitHubUser> for AccountId {
    fn from(user: GitHubUser) -> Self {
        AccountId(user.login)
    }
}

/// GitHub REST API client trait
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Login of the account the token belongs to
    async fn authenticated_login(&self) -> Result<AccountId, GitHubError>;

    /// One page (1-based) of the accounts the caller follows.
    /// An empty page marks the end of the list.
    async fn following_page(&self, page: u32, per_page: u32)
        -> Result<Vec<AccountId>, GitHubError>;
}
