//! Error types for the trending digest
//!
//! One error type per layer:
//! - `GitHubError`: GitHub REST API client errors
//! - `ScrapeError`: trending page fetch and extraction errors
//! - `TelegramError`: Bot API delivery errors
//! - `ConfigError`: startup configuration errors
//! - `AppError`: the run-level taxonomy (auth, transport, parse)

use thiserror::Error;

/// GitHub REST API client errors
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid or expired token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Trending page errors
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Listing #{index} has no {field}")]
    MissingField { field: &'static str, index: usize },

    #[error("Invalid selector {css}: {reason}")]
    Selector { css: &'static str, reason: String },
}

/// Telegram Bot API errors
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Configuration errors, raised before any network call
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Run-level errors. Any of these aborts the run before a message is sent.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Auth error: {0}")]
    Auth(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ScrapeError> for AppError {
    fn from(e: ScrapeError) -> Self {
        match e {
            ScrapeError::Request(_) | ScrapeError::Status { .. } => {
                AppError::Transport(e.to_string())
            }
            ScrapeError::MissingField { .. } | ScrapeError::Selector { .. } => {
                AppError::Parse(e.to_string())
            }
        }
    }
}

impl From<TelegramError> for AppError {
    fn from(e: TelegramError) -> Self {
        AppError::Transport(e.to_string())
    }
}

impl AppError {
    /// Classify a failed identity lookup.
    ///
    /// Only a connection-level failure is a transport problem; a rejected
    /// request or a body without a login means the caller could not be
    /// identified.
    pub fn from_identity(e: GitHubError) -> Self {
        match e {
            GitHubError::Request(_) => AppError::Transport(e.to_string()),
            GitHubError::Api { .. }
            | GitHubError::Unauthorized
            | GitHubError::Deserialization(_) => AppError::Auth(e.to_string()),
        }
    }

    /// Classify a failed following-list page. Every failure aborts the build.
    pub fn from_following(e: GitHubError) -> Self {
        AppError::Transport(e.to_string())
    }
}
