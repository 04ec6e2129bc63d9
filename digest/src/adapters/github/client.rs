//! GitHub REST API client implementation

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::AccountId;
use crate::domain::ports::{GitHubClient, GitHubUser};
use crate::error::GitHubError;

pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
pub const USER_AGENT: &str = concat!("trending-digest/", env!("CARGO_PKG_VERSION"));

/// Implementation of the GitHub REST client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
    token: String,
}

impl GitHubClientImpl {
    pub fn new(base_url: &str, token: &str) -> Result<Self, GitHubError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GitHubError> {
        let response = self
            .http
            .get(self.api_url(path))
            .query(query)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GitHubError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GitHubError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(GitHubError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl GitHubClient for GitHubClientImpl {
    async fn authenticated_login(&self) -> Result<AccountId, GitHubError> {
        let user: GitHubUser = self.get("/user", &[]).await?;
        debug!(login = %user.login, "Resolved authenticated user");
        Ok(user.into())
    }

    async fn following_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<AccountId>, GitHubError> {
        let users: Vec<GitHubUser> = self
            .get(
                "/user/following",
                &[("per_page", per_page.to_string()), ("page", page.to_string())],
            )
            .await?;
        debug!(page, count = users.len(), "Fetched following page");
        Ok(users.into_iter().map(AccountId::from).collect())
    }
}
