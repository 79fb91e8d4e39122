use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Telegram bot served by the webhook, identified by its api token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    pub id: i64,
    pub name: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
}
