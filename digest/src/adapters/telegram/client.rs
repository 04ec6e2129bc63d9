//! Telegram Bot API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::ports::MessageSender;
use crate::error::TelegramError;

/// Rich-text dialect the digest is escaped for
pub const PARSE_MODE: &str = "MarkdownV2";

/// Implementation of the Telegram sender
pub struct TelegramClientImpl {
    http: Client,
    base_url: String,
    token: String,
}

impl TelegramClientImpl {
    pub fn new(base_url: &str, token: &str) -> Result<Self, TelegramError> {
        let http = Client::builder()
            .build()
            .map_err(|e| TelegramError::Request(e.without_url()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }
}

#[derive(Serialize)]
struct SendMessageForm<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    description: Option<String>,
}

#[async_trait]
impl MessageSender for TelegramClientImpl {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        debug!(chat_id, length = text.len(), "Sending message to Telegram");

        // The token is part of the URL, so it is stripped from transport errors.
        let response = self
            .http
            .post(self.method_url("sendMessage"))
            .form(&SendMessageForm {
                chat_id,
                text,
                parse_mode: PARSE_MODE,
            })
            .send()
            .await
            .map_err(|e| TelegramError::Request(e.without_url()))?;

        let status = response.status();
        if status.is_success() {
            info!(chat_id, "Telegram message sent");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiResponse>(&body)
            .ok()
            .and_then(|r| r.description)
            .unwrap_or(body);

        Err(TelegramError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
