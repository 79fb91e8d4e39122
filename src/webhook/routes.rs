use ntex::web;

/// Configures webhook routes for external integrations.
///
/// These routes are public endpoints without a user session; each delivery
/// authenticates itself through the bot token path segment and, optionally,
/// the webhook secret token header.
///
/// # Routes
/// - `POST /webhook/{bot_token}` - Telegram webhook receiver
pub fn telegram(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/webhook").service(super::telegram::receive));
}
