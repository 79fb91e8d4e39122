use crate::config;
use anyhow::Context;
use sqlx::{
    Row, SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
};
use std::{path::Path, str::FromStr};

/// Executes a sql file from the workspace level `migrations/` directory
pub async fn run_migrations(db_pool: &SqlitePool, file_name: &str) -> anyhow::Result<()> {
    let migration_path = Path::new("migrations").join(file_name);
    let migration_sql = std::fs::read_to_string(&migration_path)
        .with_context(|| format!("Failed to read migration file {}", migration_path.display()))?;

    sqlx::query(&migration_sql).execute(db_pool).await?;
    Ok(())
}

/// Registers a bot row so the webhook accepts deliveries for its token
pub async fn add_bot(db_pool: &SqlitePool, name: &str, token: &str) -> anyhow::Result<()> {
    let row = sqlx::query("INSERT INTO bot (name,token,created_at) VALUES($1,$2,$3) RETURNING id;")
        .bind(name)
        .bind(token)
        .bind(chrono::Utc::now())
        .fetch_one(db_pool)
        .await?;

    let bot_id: i64 = row.try_get("id")?;
    println!("registered bot {name} with id {bot_id}");

    Ok(())
}

/// Calls the Telegram `setWebhook` method so updates for `token` land on
/// `{base_url}/webhook/{token}`
pub async fn register_webhook(
    token: &str,
    base_url: &str,
    secret: Option<&str>,
) -> anyhow::Result<()> {
    let webhook_url = format!(
        "{base}/webhook/{token}",
        base = base_url.trim_end_matches('/'),
    );

    let mut payload = serde_json::json!({ "url": webhook_url });
    if let Some(secret) = secret {
        payload["secret_token"] = serde_json::json!(secret);
    }

    let response = reqwest::Client::new()
        .post(format!("https://api.telegram.org/bot{token}/setWebhook"))
        .json(&payload)
        .send()
        .await
        .context("Failed to send setWebhook request to Telegram")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response body".to_string());

        anyhow::bail!("Telegram setWebhook returned error status {}: {}", status, body);
    }

    let result: serde_json::Value = response
        .json()
        .await
        .context("Failed to parse setWebhook response")?;

    if !result["ok"].as_bool().unwrap_or(false) {
        anyhow::bail!("Telegram rejected setWebhook: {}", result);
    }

    println!("webhook registered at {webhook_url}");

    Ok(())
}

pub async fn setup_sqlite_db_pool(encrypted: bool) -> anyhow::Result<SqlitePool> {
    if encrypted {
        return Ok(SqlitePool::connect_with(
            SqliteConnectOptions::from_str(&config::APP_CONFIG.db_host)?
                .create_if_missing(true)
                .pragma("key", &config::APP_CONFIG.db_pass_encrypt)
                .pragma("cipher_page_size", "1024")
                .pragma("kdf_iter", "64000")
                .pragma("cipher_hmac_algorithm", "HMAC_SHA1")
                .pragma("cipher_kdf_algorithm", "PBKDF2_HMAC_SHA1")
                .pragma("foreign_keys", "ON")
                .journal_mode(SqliteJournalMode::Delete),
        )
        .await?);
    }

    Ok(SqlitePool::connect_with(
        SqliteConnectOptions::from_str(&config::APP_CONFIG.db_host)?
            .create_if_missing(true)
            .pragma("foreign_keys", "ON"),
    )
    .await?)
}
