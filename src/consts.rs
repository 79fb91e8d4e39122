/// Display name stored for a chat when Telegram sends no `first_name`
pub const DEFAULT_CHAT_NAME: &str = "User";

pub const START_COMMAND: &str = "/start";

/// Greeting sent for [START_COMMAND], formatted with Telegram html parse mode
pub const START_GREETING_HTML: &str = "<strong>Hello!</strong>\n\nI'm here!";

pub const TELEGRAM_SECRET_TOKEN_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";
