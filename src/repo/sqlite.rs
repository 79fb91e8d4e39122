use crate::models;
use async_trait::async_trait;
use sqlx::{FromRow, Row, SqlitePool, sqlite::SqliteRow};

use super::{AppRepo, sqlite_queries};

#[derive(Clone)]
pub struct SqlxSqliteRepo {
    pub db_pool: SqlitePool,
}

impl FromRow<'_, SqliteRow> for models::bot::Bot {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            token: row.try_get("token")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::chat::Chat {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            bot_id: row.try_get("bot_id")?,
            chat_id: row.try_get("chat_id")?,
            name: row.try_get("name")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl AppRepo for SqlxSqliteRepo {
    async fn get_bot_by_token(&self, bot_token: &str) -> anyhow::Result<Option<models::bot::Bot>> {
        Ok(
            sqlx::query_as::<_, models::bot::Bot>(sqlite_queries::QUERY_GET_BOT_BY_TOKEN)
                .bind(bot_token)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn get_bot_by_id(&self, bot_id: i64) -> anyhow::Result<Option<models::bot::Bot>> {
        Ok(
            sqlx::query_as::<_, models::bot::Bot>(sqlite_queries::QUERY_GET_BOT_BY_ID)
                .bind(bot_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn get_chat(
        &self,
        bot_id: i64,
        chat_id: i64,
    ) -> anyhow::Result<Option<models::chat::Chat>> {
        Ok(
            sqlx::query_as::<_, models::chat::Chat>(sqlite_queries::QUERY_GET_CHAT)
                .bind(bot_id)
                .bind(chat_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_chat_if_absent(
        &self,
        chat: &models::chat::Chat,
    ) -> anyhow::Result<Option<models::chat::Chat>> {
        Ok(
            sqlx::query_as::<_, models::chat::Chat>(sqlite_queries::QUERY_INSERT_CHAT_IF_ABSENT)
                .bind(chat.bot_id)
                .bind(chat.chat_id)
                .bind(&chat.name)
                .bind(chat.created_at)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }
}
