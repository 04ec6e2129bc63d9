//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record the calls they receive so tests can verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{AccountId, TimeWindow, TrendingDeveloper, TrendingRepo};
use crate::domain::ports::{GitHubClient, MessageSender, TrendingSource};
use crate::error::{GitHubError, ScrapeError, TelegramError};

/// Shared, ordered record of calls across mocks
pub type CallLog = Arc<RwLock<Vec<String>>>;

fn record(log: &Option<CallLog>, entry: String) {
    if let Some(log) = log {
        log.write().unwrap().push(entry);
    }
}

// ============================================================================
// Mock GitHub Client
// ============================================================================

#[derive(Default)]
pub struct MockGitHubClient {
    login: Option<String>,
    following: Vec<AccountId>,
    identity_error: Option<u16>,
    failing_page: Option<u32>,
    pub pages_requested: Arc<RwLock<Vec<u32>>>,
    pub identity_calls: Arc<RwLock<usize>>,
    log: Option<CallLog>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Login returned by the identity endpoint
    pub fn with_login(mut self, login: &str) -> Self {
        self.login = Some(login.to_string());
        self
    }

    /// Accounts served by the following endpoint, paginated on request
    pub fn with_following(mut self, following: Vec<AccountId>) -> Self {
        self.following = following;
        self
    }

    /// Reject the identity request with the given status (401 maps to Unauthorized)
    pub fn rejecting_identity(mut self, status: u16) -> Self {
        self.identity_error = Some(status);
        self
    }

    /// Fail when this page is requested
    pub fn failing_on_page(mut self, page: u32) -> Self {
        self.failing_page = Some(page);
        self
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn authenticated_login(&self) -> Result<AccountId, GitHubError> {
        *self.identity_calls.write().unwrap() += 1;
        record(&self.log, "identity".to_string());

        match (self.identity_error, &self.login) {
            (Some(401), _) => Err(GitHubError::Unauthorized),
            (Some(status), _) => Err(GitHubError::Api {
                status,
                message: "Mock failure".to_string(),
            }),
            (None, Some(login)) => Ok(AccountId::from(login.as_str())),
            (None, None) => Err(GitHubError::Deserialization(
                "missing field `login`".to_string(),
            )),
        }
    }

    async fn following_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<AccountId>, GitHubError> {
        self.pages_requested.write().unwrap().push(page);
        record(&self.log, format!("following:{}", page));

        if self.failing_page == Some(page) {
            return Err(GitHubError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        let start = (page.saturating_sub(1) as usize) * per_page as usize;
        Ok(self
            .following
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Mock Trending Source
// ============================================================================

#[derive(Default)]
pub struct MockTrendingSource {
    repos: HashMap<TimeWindow, Vec<TrendingRepo>>,
    developers: HashMap<TimeWindow, Vec<TrendingDeveloper>>,
    failing_repos: Option<TimeWindow>,
    failing_developers: Option<TimeWindow>,
    pub calls: Arc<RwLock<Vec<String>>>,
    log: Option<CallLog>,
}

impl MockTrendingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repos(mut self, window: TimeWindow, repos: Vec<TrendingRepo>) -> Self {
        self.repos.insert(window, repos);
        self
    }

    pub fn with_developers(
        mut self,
        window: TimeWindow,
        developers: Vec<TrendingDeveloper>,
    ) -> Self {
        self.developers.insert(window, developers);
        self
    }

    /// Fail the repos page for this window with a transport error
    pub fn failing_repos(mut self, window: TimeWindow) -> Self {
        self.failing_repos = Some(window);
        self
    }

    /// Fail the developers page for this window with a missing-field error
    pub fn failing_developers(mut self, window: TimeWindow) -> Self {
        self.failing_developers = Some(window);
        self
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }
}

#[async_trait]
impl TrendingSource for MockTrendingSource {
    async fn trending_repos(&self, window: TimeWindow) -> Result<Vec<TrendingRepo>, ScrapeError> {
        let call = format!("repos:{}", window);
        self.calls.write().unwrap().push(call.clone());
        record(&self.log, call);

        if self.failing_repos == Some(window) {
            return Err(ScrapeError::Status {
                status: 503,
                url: format!("mock://trending?since={}", window),
            });
        }

        Ok(self.repos.get(&window).cloned().unwrap_or_default())
    }

    async fn trending_developers(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<TrendingDeveloper>, ScrapeError> {
        let call = format!("developers:{}", window);
        self.calls.write().unwrap().push(call.clone());
        record(&self.log, call);

        if self.failing_developers == Some(window) {
            return Err(ScrapeError::MissingField {
                field: "developer name",
                index: 0,
            });
        }

        Ok(self.developers.get(&window).cloned().unwrap_or_default())
    }
}

// ============================================================================
// Mock Message Sender
// ============================================================================

#[derive(Default)]
pub struct MockMessageSender {
    /// (chat id, text) per delivered message
    pub sent: Arc<RwLock<Vec<(String, String)>>>,
    pub should_fail: Arc<RwLock<bool>>,
    log: Option<CallLog>,
}

impl MockMessageSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn sent_messages(&self) -> Vec<(String, String)> {
        self.sent.read().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for MockMessageSender {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        record(&self.log, "send".to_string());

        if *self.should_fail.read().unwrap() {
            return Err(TelegramError::Api {
                status: 400,
                message: "Mock failure".to_string(),
            });
        }

        self.sent
            .write()
            .unwrap()
            .push((chat_id.to_string(), text.to_string()));
        Ok(())
    }
}
