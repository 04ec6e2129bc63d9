//! Relevance service
//!
//! Builds the relevance set: the caller's identity plus every account it
//! follows. The set is built once per run and passed explicitly to the
//! filters.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{AccountId, RelevanceSet};
use crate::domain::ports::GitHubClient;
use crate::error::AppError;

/// Page size for `/user/following` (the API maximum)
pub const FOLLOWING_PAGE_SIZE: u32 = 100;

pub struct RelevanceService<GC>
where
    GC: GitHubClient,
{
    github: Arc<GC>,
    identity_override: Option<AccountId>,
}

impl<GC> RelevanceService<GC>
where
    GC: GitHubClient,
{
    /// `identity_override` skips the identity lookup when set
    pub fn new(github: Arc<GC>, identity_override: Option<AccountId>) -> Self {
        Self {
            github,
            identity_override,
        }
    }

    pub async fn build(&self) -> Result<RelevanceSet, AppError> {
        let owner = self.resolve_identity().await?;
        let following = self.fetch_following().await?;

        let set = RelevanceSet::new(owner, following);
        info!(
            owner = %set.owner(),
            accounts = set.len(),
            "Built relevance set"
        );
        Ok(set)
    }

    async fn resolve_identity(&self) -> Result<AccountId, AppError> {
        if let Some(login) = &self.identity_override {
            debug!(%login, "Using configured identity");
            return Ok(login.clone());
        }

        let login = self
            .github
            .authenticated_login()
            .await
            .map_err(AppError::from_identity)?;

        if login.as_str().is_empty() {
            return Err(AppError::Auth("identity endpoint returned an empty login".to_string()));
        }
        Ok(login)
    }

    /// Request pages until one comes back empty
    async fn fetch_following(&self) -> Result<Vec<AccountId>, AppError> {
        let mut following = Vec::new();
        let mut page = 1;

        loop {
            let batch = self
                .github
                .following_page(page, FOLLOWING_PAGE_SIZE)
                .await
                .map_err(AppError::from_following)?;

            if batch.is_empty() {
                break;
            }

            debug!(page, count = batch.len(), "Accumulated following page");
            following.extend(batch);
            page += 1;
        }

        Ok(following)
    }
}
