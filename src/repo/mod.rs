pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait AppRepo {
    async fn get_bot_by_token(&self, bot_token: &str) -> anyhow::Result<Option<models::bot::Bot>>;

    async fn get_bot_by_id(&self, bot_id: i64) -> anyhow::Result<Option<models::bot::Bot>>;

    async fn get_chat(
        &self,
        bot_id: i64,
        chat_id: i64,
    ) -> anyhow::Result<Option<models::chat::Chat>>;

    /// Inserts `chat` unless the `(bot_id, chat_id)` pair already exists.
    ///
    /// Returns the stored row when this call created it, `None` when a
    /// concurrent delivery registered the pair first
    async fn insert_chat_if_absent(
        &self,
        chat: &models::chat::Chat,
    ) -> anyhow::Result<Option<models::chat::Chat>>;
}

pub type ImplAppRepo = Box<dyn AppRepo>;
