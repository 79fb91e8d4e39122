//! # Telegram API Client
//!
//! This module provides a client for sending messages through the Telegram
//! Bot API. Sending goes through the [`ReplySender`] trait so the webhook
//! handler can be exercised against a mock sender.

use super::outgoing_schemas::{SendMessageRequest, SendMessageResponse};
use crate::config;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Sends replies back to a chat through the bot that received the update
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait ReplySender {
    /// Sends a plain text message to `chat_id`
    async fn send_text(&self, bot_token: &str, chat_id: i64, body: &str) -> Result<()>;

    /// Sends an html formatted message to `chat_id`
    async fn send_html(&self, bot_token: &str, chat_id: i64, body: &str) -> Result<()>;
}

pub type ImplReplySender = Box<dyn ReplySender>;

/// Telegram Bot API client for sending messages
pub struct TelegramClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Base url of the Bot API
    api_base: String,
}

impl TelegramClient {
    /// Creates a new Telegram client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config::APP_CONFIG.telegram_api_base.clone(),
        }
    }

    /// Builds the `sendMessage` endpoint for `bot_token`
    fn send_message_endpoint(&self, bot_token: &str) -> String {
        format!(
            "{base}/bot{token}/sendMessage",
            base = self.api_base.trim_end_matches('/'),
            token = bot_token
        )
    }

    /// Internal method to call the `sendMessage` Bot API method
    async fn send_message(&self, bot_token: &str, message: &SendMessageRequest) -> Result<()> {
        let response = self
            .client
            .post(self.send_message_endpoint(bot_token))
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await
            .context("Failed to send request to Telegram Bot API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            anyhow::bail!("Telegram Bot API returned error status {}: {}", status, body);
        }

        let telegram_response: SendMessageResponse = response
            .json()
            .await
            .context("Failed to parse Telegram Bot API response")?;

        if !telegram_response.ok {
            anyhow::bail!(
                "Telegram Bot API rejected sendMessage: {}",
                telegram_response
                    .description
                    .unwrap_or_else(|| "no description".to_string())
            );
        }

        Ok(())
    }
}

#[async_trait]
impl ReplySender for TelegramClient {
    async fn send_text(&self, bot_token: &str, chat_id: i64, body: &str) -> Result<()> {
        let message = SendMessageRequest::new_text(chat_id, body.to_string());
        self.send_message(bot_token, &message).await
    }

    async fn send_html(&self, bot_token: &str, chat_id: i64, body: &str) -> Result<()> {
        let message = SendMessageRequest::new_html(chat_id, body.to_string());
        self.send_message(bot_token, &message).await
    }
}

impl Default for TelegramClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_endpoint_embeds_bot_token() {
        let client = TelegramClient {
            client: reqwest::Client::new(),
            api_base: "https://api.telegram.org".to_string(),
        };

        assert_eq!(
            client.send_message_endpoint("123456:test-token"),
            "https://api.telegram.org/bot123456:test-token/sendMessage"
        );
    }

    #[test]
    fn test_send_message_endpoint_trims_trailing_slash() {
        let client = TelegramClient {
            client: reqwest::Client::new(),
            api_base: "http://localhost:8081/".to_string(),
        };

        assert_eq!(
            client.send_message_endpoint("123456:test-token"),
            "http://localhost:8081/bot123456:test-token/sendMessage"
        );
    }
}
