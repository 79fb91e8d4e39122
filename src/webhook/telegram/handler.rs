//! # Telegram Webhook Handler
//!
//! This module turns decoded Telegram updates into chat registrations and
//! replies. Every reply decision lives here; the http layer only decodes,
//! authenticates and acknowledges deliveries.

use super::{client, errors::WebhookError, schemas};
use crate::{api, consts, models, repo};

/// Reply selected for an incoming message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Html greeting for the exact start command
    Greeting,
    /// Plain text echo of the received text
    Echo(String),
}

impl Reply {
    /// Selects the reply for the received message text
    pub fn select(text: &str) -> Self {
        if text == consts::START_COMMAND {
            return Self::Greeting;
        }
        Self::Echo(format!("You said: {text}"))
    }

    /// Label used to dimension the reply metric
    pub fn metric_label(&self) -> &'static str {
        match self {
            Reply::Greeting => "greeting",
            Reply::Echo(_) => "echo",
        }
    }
}

/// Outcome of processing one update
#[derive(Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The update carried no message, nothing to do
    NoMessage,
    /// A reply was delivered to the chat
    Replied {
        chat_id: i64,
        chat_created: bool,
        reply: Reply,
    },
}

/// Processes one decoded update for `bot`.
///
/// Registers the originating chat on first contact, selects the reply for
/// the message text and delivers it through `sender`.
///
/// # Arguments
/// * `update` - Decoded update payload
/// * `bot` - Bot the update was routed to, resolved from the url token
/// * `repo` - Repository instance for database operations
/// * `sender` - Reply sender talking to the bot api
///
/// # Errors
/// Returns [WebhookError::MalformedPayload] when the message carries no chat
/// id, the [WebhookError] conversion of registry failures, and
/// [WebhookError::Delivery] when the bot api rejects the reply.
pub async fn process_update(
    update: schemas::Update,
    bot: &models::bot::Bot,
    repo: &repo::ImplAppRepo,
    sender: &client::ImplReplySender,
) -> Result<UpdateOutcome, WebhookError> {
    let Some(message) = update.message else {
        return Ok(UpdateOutcome::NoMessage);
    };

    let chat_id = message.chat_id().ok_or(WebhookError::MalformedPayload)?;

    let (_, chat_created) =
        api::chat::resolve_or_create_chat(repo, bot.id, chat_id, message.sender_first_name())
            .await?;

    let reply = Reply::select(message.text_or_empty());
    dispatch_reply(sender, &bot.token, chat_id, &reply).await?;

    Ok(UpdateOutcome::Replied {
        chat_id,
        chat_created,
        reply,
    })
}

/// Delivers `reply` to `chat_id` through the bot api
async fn dispatch_reply(
    sender: &client::ImplReplySender,
    bot_token: &str,
    chat_id: i64,
    reply: &Reply,
) -> Result<(), WebhookError> {
    let delivery = match reply {
        Reply::Greeting => {
            sender
                .send_html(bot_token, chat_id, consts::START_GREETING_HTML)
                .await
        }
        Reply::Echo(body) => sender.send_text(bot_token, chat_id, body).await,
    };

    delivery.map_err(|err| WebhookError::Delivery(format!("{err:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use crate::webhook::telegram::client::MockReplySender;
    use chrono::Utc;
    use mockall::predicate::*;

    fn create_test_bot(id: i64) -> models::bot::Bot {
        models::bot::Bot {
            id,
            name: "echo-bot".to_string(),
            token: "123456:test-token".to_string(),
            created_at: Utc::now(),
        }
    }

    fn create_test_chat(bot_id: i64, chat_id: i64, name: &str) -> models::chat::Chat {
        models::chat::Chat {
            id: 1,
            bot_id,
            chat_id,
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    fn parse_update(raw: &str) -> schemas::Update {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_reply_selection() {
        assert_eq!(Reply::select("/start"), Reply::Greeting);
        assert_eq!(Reply::select("hi"), Reply::Echo("You said: hi".to_string()));
        assert_eq!(Reply::select(""), Reply::Echo("You said: ".to_string()));
        // only the bare command greets, trailing content echoes
        assert_eq!(
            Reply::select("/start now"),
            Reply::Echo("You said: /start now".to_string())
        );
    }

    #[ntex::test]
    async fn test_update_without_message_has_no_side_effects() {
        let bot = create_test_bot(7);
        let repo: Box<dyn repo::AppRepo> = Box::new(MockAppRepo::new());
        let sender: Box<dyn client::ReplySender> = Box::new(MockReplySender::new());

        let outcome = process_update(parse_update("{}"), &bot, &repo, &sender).await;

        assert!(outcome.is_ok_and(|o| o == UpdateOutcome::NoMessage));
    }

    #[ntex::test]
    async fn test_start_command_registers_chat_and_sends_greeting() {
        let bot = create_test_bot(7);

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_chat()
            .with(eq(7), eq(42))
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(None) }));
        mock_repo
            .expect_get_bot_by_id()
            .with(eq(7))
            .times(1)
            .returning(|bot_id| Box::pin(async move { Ok(Some(create_test_bot(bot_id))) }));
        mock_repo
            .expect_insert_chat_if_absent()
            .withf(|chat| chat.bot_id == 7 && chat.chat_id == 42 && chat.name == "Alex")
            .times(1)
            .returning(|chat| {
                let stored = chat.clone();
                Box::pin(async move { Ok(Some(stored)) })
            });

        let mut mock_sender = MockReplySender::new();
        mock_sender
            .expect_send_html()
            .with(
                eq("123456:test-token"),
                eq(42),
                eq(consts::START_GREETING_HTML),
            )
            .times(1)
            .returning(|_, _, _| Box::pin(async move { Ok(()) }));

        let repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let sender: Box<dyn client::ReplySender> = Box::new(mock_sender);

        let outcome = process_update(
            parse_update(r#"{"message":{"chat":{"id":42,"first_name":"Alex"},"text":"/start"}}"#),
            &bot,
            &repo,
            &sender,
        )
        .await;

        assert!(outcome.is_ok_and(|o| {
            o == UpdateOutcome::Replied {
                chat_id: 42,
                chat_created: true,
                reply: Reply::Greeting,
            }
        }));
    }

    #[ntex::test]
    async fn test_text_message_echoes_to_known_chat() {
        let bot = create_test_bot(7);

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_chat()
            .with(eq(7), eq(42))
            .times(1)
            .returning(|bot_id, chat_id| {
                let chat = create_test_chat(bot_id, chat_id, "Alex");
                Box::pin(async move { Ok(Some(chat)) })
            });

        let mut mock_sender = MockReplySender::new();
        mock_sender
            .expect_send_text()
            .with(eq("123456:test-token"), eq(42), eq("You said: hi"))
            .times(1)
            .returning(|_, _, _| Box::pin(async move { Ok(()) }));

        let repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let sender: Box<dyn client::ReplySender> = Box::new(mock_sender);

        let outcome = process_update(
            parse_update(r#"{"message":{"chat":{"id":42,"first_name":"Alex"},"text":"hi"}}"#),
            &bot,
            &repo,
            &sender,
        )
        .await;

        assert!(outcome.is_ok_and(|o| {
            o == UpdateOutcome::Replied {
                chat_id: 42,
                chat_created: false,
                reply: Reply::Echo("You said: hi".to_string()),
            }
        }));
    }

    #[ntex::test]
    async fn test_message_without_chat_id_is_malformed() {
        let bot = create_test_bot(7);
        let repo: Box<dyn repo::AppRepo> = Box::new(MockAppRepo::new());
        let sender: Box<dyn client::ReplySender> = Box::new(MockReplySender::new());

        let outcome = process_update(
            parse_update(r#"{"message":{"chat":{"first_name":"Alex"},"text":"hi"}}"#),
            &bot,
            &repo,
            &sender,
        )
        .await;

        assert!(matches!(outcome, Err(WebhookError::MalformedPayload)));
    }

    #[ntex::test]
    async fn test_message_without_text_registers_default_name_and_echoes_empty() {
        let bot = create_test_bot(7);

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_chat()
            .with(eq(7), eq(9))
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(None) }));
        mock_repo
            .expect_get_bot_by_id()
            .with(eq(7))
            .times(1)
            .returning(|bot_id| Box::pin(async move { Ok(Some(create_test_bot(bot_id))) }));
        mock_repo
            .expect_insert_chat_if_absent()
            .withf(|chat| chat.chat_id == 9 && chat.name == "User")
            .times(1)
            .returning(|chat| {
                let stored = chat.clone();
                Box::pin(async move { Ok(Some(stored)) })
            });

        let mut mock_sender = MockReplySender::new();
        mock_sender
            .expect_send_text()
            .with(eq("123456:test-token"), eq(9), eq("You said: "))
            .times(1)
            .returning(|_, _, _| Box::pin(async move { Ok(()) }));

        let repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let sender: Box<dyn client::ReplySender> = Box::new(mock_sender);

        let outcome = process_update(
            parse_update(r#"{"message":{"chat":{"id":9}}}"#),
            &bot,
            &repo,
            &sender,
        )
        .await;

        assert!(outcome.is_ok_and(|o| {
            o == UpdateOutcome::Replied {
                chat_id: 9,
                chat_created: true,
                reply: Reply::Echo("You said: ".to_string()),
            }
        }));
    }

    #[ntex::test]
    async fn test_reply_delivery_failure_is_reported() {
        let bot = create_test_bot(7);

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_chat()
            .times(1)
            .returning(|bot_id, chat_id| {
                let chat = create_test_chat(bot_id, chat_id, "Alex");
                Box::pin(async move { Ok(Some(chat)) })
            });

        let mut mock_sender = MockReplySender::new();
        mock_sender.expect_send_text().times(1).returning(|_, _, _| {
            Box::pin(async move { Err(anyhow::anyhow!("Telegram Bot API returned error status 502")) })
        });

        let repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let sender: Box<dyn client::ReplySender> = Box::new(mock_sender);

        let outcome = process_update(
            parse_update(r#"{"message":{"chat":{"id":42,"first_name":"Alex"},"text":"hi"}}"#),
            &bot,
            &repo,
            &sender,
        )
        .await;

        assert!(outcome.is_err());
        assert!(
            outcome
                .unwrap_err()
                .to_string()
                .contains("error status 502")
        );
    }
}
