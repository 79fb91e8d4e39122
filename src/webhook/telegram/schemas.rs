//! # Telegram Webhook Schemas
//!
//! This module contains the data structures for Telegram Bot API webhooks.
//! These schemas define the JSON payload Telegram posts for every update.
//!
//! Telegram sends many more fields than the ones modeled here; serde drops
//! the rest during deserialization.

use serde::{Deserialize, Serialize};

/// Root update payload posted by Telegram
#[derive(Debug, Deserialize, Serialize)]
pub struct Update {
    /// The message the update carries, absent for non-message updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

/// Message object inside an update
#[derive(Debug, Deserialize, Serialize)]
pub struct Message {
    /// Chat the message was sent in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<Chat>,
    /// Message text, absent for stickers, photos, joins, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Message {
    /// Telegram chat identifier, when the payload carries one
    pub fn chat_id(&self) -> Option<i64> {
        self.chat.as_ref().and_then(|chat| chat.id)
    }

    /// First name of the chat peer, when the payload carries one
    pub fn sender_first_name(&self) -> Option<&str> {
        self.chat
            .as_ref()
            .and_then(|chat| chat.first_name.as_deref())
    }

    /// Message text, empty string when the message has none
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// Chat object inside a message
#[derive(Debug, Deserialize, Serialize)]
pub struct Chat {
    /// Unique chat identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// First name for private chats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}
