//! Telegram webhook endpoint handlers
//!
//! This module handles incoming webhook requests from the Telegram Bot API.
//! Telegram posts every update for a bot to `POST /webhook/{bot_token}`.
//!
//! # Security
//!
//! The bot token in the path proves the sender knows the token Telegram
//! assigned to the bot. When a webhook secret token is configured, the
//! `X-Telegram-Bot-Api-Secret-Token` header is verified on top of it and
//! requests failing the check are rejected with a 401 response.
//!
//! # Acknowledgment contract
//!
//! Telegram retries deliveries that do not come back with a 200 status.
//! Every authenticated delivery is therefore acknowledged with
//! `{"ok": true}`, including the ones that fail while being processed;
//! those failures are logged and counted instead of changing the status.

use super::{errors::WebhookError, handler, schemas, security};
use crate::{
    config, consts,
    front::{AppState, errors},
    metric,
};
use ntex::{util::Bytes, web};

/// Webhook receiver endpoint (POST)
///
/// Receives update deliveries from the Telegram Bot API, registers the
/// originating chat on first contact and replies to the message.
///
/// # Processing
///
/// Process the update synchronously. One registry roundtrip plus one
/// `sendMessage` call stays well inside the response time Telegram tolerates.
#[web::post("/{bot_token}")]
pub async fn receive(
    req: web::HttpRequest,
    path: web::types::Path<(String,)>,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let app_config = &*config::APP_CONFIG;

    // Verify the secret token header when one is configured
    if let Some(expected) = &app_config.webhook_secret_token {
        let received = req
            .headers()
            .get(consts::TELEGRAM_SECRET_TOKEN_HEADER)
            .and_then(|header_value| header_value.to_str().ok());

        if !security::verify_secret_token(received, expected) {
            return Err(errors::UserError::Unauthorized.into());
        }
    }

    let bot_token = path.0.to_string();

    // Parse the JSON payload after the secret verification
    let update: schemas::Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            report_failure(WebhookError::Decode(e.to_string()));
            return Ok(acknowledge());
        }
    };

    // Resolve which provisioned bot the delivery was addressed to
    let bot = match app_state.repo.get_bot_by_token(&bot_token).await {
        Ok(Some(bot)) => bot,
        Ok(None) => {
            report_failure(WebhookError::ConfigurationMissing);
            return Ok(acknowledge());
        }
        Err(e) => {
            report_failure(WebhookError::Persistence(format!("{e:#}")));
            return Ok(acknowledge());
        }
    };

    match handler::process_update(update, &bot, &app_state.repo, &app_state.reply_sender).await {
        Ok(handler::UpdateOutcome::NoMessage) => {}
        Ok(handler::UpdateOutcome::Replied {
            chat_id,
            chat_created,
            reply,
        }) => {
            metric::incr_webhook_reply_statds(reply.metric_label());

            let chat_id = chat_id.to_string();
            let chat_created = chat_created.to_string();
            logfire::info!(
                "Replied to chat {chat_id} (created: {chat_created})",
                chat_id = chat_id,
                chat_created = chat_created
            );
        }
        Err(e) => report_failure(e),
    }

    Ok(acknowledge())
}

/// Body every authenticated delivery is acknowledged with
fn acknowledge() -> web::HttpResponse {
    web::HttpResponse::Ok().json(&serde_json::json!({ "ok": true }))
}

/// Counts and logs a processing failure that still gets acknowledged
fn report_failure(err: WebhookError) {
    metric::incr_webhook_error_statds(err.metric_label());
    logfire::error!("Failed to process update: {error}", error = err.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledge_is_always_ok() {
        assert_eq!(acknowledge().status(), ntex::http::StatusCode::OK);
    }
}
