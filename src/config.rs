//! Application configuration management with security considerations.
//!
//! This module handles all configuration values required for the application.
//! It includes secure storage indicators for sensitive configuration fields.
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - Production environments should use secure secret management systems

use envconfig::Envconfig;
use std::sync::LazyLock;

/// Application configuration with security-aware field management.
///
/// This struct contains all environment variables used to configure the application.
/// Sensitive fields are clearly marked and include security guidance.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Database host value (NON-SENSITIVE)
    /// Example: "sqlite:data/app.db"
    pub db_host: String,

    /// SENSITIVE: Database password to encrypt SQLite data
    pub db_pass_encrypt: String,

    /// Host address for web server binding (NON-SENSITIVE)
    /// Example: "0.0.0.0", "localhost"
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    /// Common values: 80 (HTTP), 443 (HTTPS), 8080 (dev)
    #[envconfig(default = "8080")]
    pub web_server_port: u64,

    /// Path to SSL private key file (SENSITIVE PATH)
    /// Security: File should have 600 permissions, store path securely
    /// Example: "/etc/ssl/private/server.key"
    #[envconfig(default = "server.key")]
    pub private_key_path: String,

    /// Path to SSL certificate file (NON-SENSITIVE)
    /// Example: "/etc/ssl/certs/server.crt"
    #[envconfig(default = "server.crt")]
    pub certificate_path: String,

    /// Base url of the Telegram Bot API (NON-SENSITIVE)
    /// Override it to point at a self-hosted bot api gateway
    #[envconfig(default = "https://api.telegram.org")]
    pub telegram_api_base: String,

    /// SENSITIVE: Shared secret Telegram echoes back on every webhook
    /// delivery in the `X-Telegram-Bot-Api-Secret-Token` header.
    /// Leave it unset to skip the header check
    pub webhook_secret_token: Option<String>,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }
}

/// Global application configuration instance with validation
///
/// This configuration is validated on first access. If validation fails,
/// the application will panic with a descriptive error message.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env()
        .expect("Failed to load the application configuration. Check environment variables.")
});
