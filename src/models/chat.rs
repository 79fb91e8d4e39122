use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts;

/// A Telegram chat registered to one of the served bots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub bot_id: i64,
    /// Telegram chat identifier, unique within a bot
    pub chat_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// Builds the row persisted the first time a chat talks to `bot_id`.
    ///
    /// Blank or missing names fall back to [consts::DEFAULT_CHAT_NAME]
    pub fn create_from_first_contact(bot_id: i64, chat_id: i64, name: Option<&str>) -> Self {
        Self {
            id: 0,
            bot_id,
            chat_id,
            name: name
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(consts::DEFAULT_CHAT_NAME)
                .to_string(),
            created_at: Utc::now(),
        }
    }
}
