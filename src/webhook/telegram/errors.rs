use derive_more::{Display, Error};

use crate::api::chat::RegistryError;

/// Failures while receiving or processing a webhook delivery
#[derive(Debug, Display, Error)]
pub enum WebhookError {
    /// The request body was not a decodable update payload
    #[display("undecodable update payload: {_0}")]
    Decode(#[error(not(source))] String),

    /// The bot token in the url does not belong to a provisioned bot
    #[display("update routed to an unprovisioned bot")]
    ConfigurationMissing,

    /// The update carries a message but no usable chat id
    #[display("update message carries no chat id")]
    MalformedPayload,

    /// The chat store failed while resolving the bot or registering the chat
    #[display("chat store failure: {_0}")]
    Persistence(#[error(not(source))] String),

    /// The reply could not be delivered through the bot api
    #[display("reply delivery failure: {_0}")]
    Delivery(#[error(not(source))] String),
}

impl WebhookError {
    /// Stable label used to dimension the webhook error metric
    pub fn metric_label(&self) -> &'static str {
        match self {
            WebhookError::Decode(_) => "decode",
            WebhookError::ConfigurationMissing => "configuration_missing",
            WebhookError::MalformedPayload => "malformed_payload",
            WebhookError::Persistence(_) => "persistence",
            WebhookError::Delivery(_) => "delivery",
        }
    }
}

impl From<RegistryError> for WebhookError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::BotNotFound { .. } => Self::ConfigurationMissing,
            RegistryError::Persistence(msg) => Self::Persistence(msg),
        }
    }
}
