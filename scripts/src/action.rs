use clap::{Args, Parser, Subcommand};

use crate::{config, utils};

#[derive(Args, Debug, Clone)]
pub struct RunMigrationsArgs {
    /// Sql file under migrations/ to execute
    #[arg(short, long)]
    file: String,
}

#[derive(Args, Debug, Clone)]
pub struct AddBotArgs {
    /// Display name for the bot
    #[arg(short, long)]
    name: String,

    /// Token issued by BotFather
    #[arg(short, long)]
    token: String,
}

#[derive(Args, Debug, Clone)]
pub struct SetWebhookArgs {
    /// Token issued by BotFather
    #[arg(short, long)]
    token: String,

    /// Public base url of the deployment, e.g. https://bot.example.com
    #[arg(short, long)]
    url: String,

    /// Secret Telegram will echo back on every webhook delivery
    #[arg(short, long)]
    secret: Option<String>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    /// Apply a sql migration to the bot database
    RunMigrations(RunMigrationsArgs),
    /// Provision a bot so the webhook accepts its deliveries
    AddBot(AddBotArgs),
    /// Point Telegram at the deployed webhook url
    SetWebhook(SetWebhookArgs),
}

/// Provisioning tool for the echo bot deployment
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct AppArgs {
    #[command(subcommand)]
    pub action: Action,
}

impl AppArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        match &self.action {
            Action::RunMigrations(RunMigrationsArgs { file }) => {
                let db_pool = utils::setup_sqlite_db_pool(config::APP_CONFIG.is_prod()).await?;

                utils::run_migrations(&db_pool, file).await
            }
            Action::AddBot(AddBotArgs { name, token }) => {
                let db_pool = utils::setup_sqlite_db_pool(config::APP_CONFIG.is_prod()).await?;

                utils::add_bot(&db_pool, name, token).await
            }
            Action::SetWebhook(SetWebhookArgs { token, url, secret }) => {
                utils::register_webhook(token, url, secret.as_deref()).await
            }
        }
    }
}
