//! # Chat Registry Module
//!
//! This module handles chat registration for the bots served by the webhook.
//! A chat is registered the first time it talks to a bot and every later
//! update resolves to that same row.

use crate::{metric, models, repo};
use derive_more::{Display, Error};

/// Failures while resolving or registering a chat
#[derive(Debug, Display, Error)]
pub enum RegistryError {
    /// The update was routed to a bot id with no provisioned row
    #[display("bot {bot_id} is not a provisioned bot")]
    BotNotFound { bot_id: i64 },

    /// The chat store failed while reading or writing the row
    #[display("chat store failure: {_0}")]
    Persistence(#[error(not(source))] String),
}

impl From<anyhow::Error> for RegistryError {
    fn from(err: anyhow::Error) -> Self {
        Self::Persistence(format!("{err:#}"))
    }
}

/// Resolves the chat registered for `(bot_id, chat_id)`, creating it on first contact.
///
/// This function implements a get-or-create pattern over the chat registry.
/// Redelivered and concurrent updates for the same chat all converge on one
/// stored row, so registration is idempotent.
///
/// # Arguments
/// * `repo` - Repository instance for database operations
/// * `bot_id` - Internal id of the bot the update was routed to
/// * `chat_id` - Telegram chat identifier taken from the update
/// * `fallback_name` - Display name used only when the row is created
///
/// # Returns
/// * The stored chat and whether this call created it
///
/// # Process
/// 1. Return the existing chat when the pair is already registered
/// 2. Reject bot ids without a provisioned row
/// 3. Insert the first-contact row, ignoring unique conflicts
/// 4. On a lost insert race, re-read the row the winner stored
///
/// # Errors
/// Returns [RegistryError::BotNotFound] when `bot_id` is not provisioned and
/// [RegistryError::Persistence] when the chat store fails.
pub async fn resolve_or_create_chat(
    repo: &repo::ImplAppRepo,
    bot_id: i64,
    chat_id: i64,
    fallback_name: Option<&str>,
) -> Result<(models::chat::Chat, bool), RegistryError> {
    if let Some(chat) = repo.get_chat(bot_id, chat_id).await? {
        return Ok((chat, false));
    }

    if repo.get_bot_by_id(bot_id).await?.is_none() {
        return Err(RegistryError::BotNotFound { bot_id });
    }

    let chat = models::chat::Chat::create_from_first_contact(bot_id, chat_id, fallback_name);
    if let Some(stored) = repo.insert_chat_if_absent(&chat).await? {
        metric::incr_register_chat_statds();
        return Ok((stored, true));
    }

    // A swallowed insert means a concurrent delivery won the unique index,
    // so the row the winner stored is the one to hand back
    let stored = repo.get_chat(bot_id, chat_id).await?.ok_or_else(|| {
        RegistryError::Persistence(format!(
            "chat {chat_id} of bot {bot_id} missing after conflict-ignored insert"
        ))
    })?;

    Ok((stored, false))
}
