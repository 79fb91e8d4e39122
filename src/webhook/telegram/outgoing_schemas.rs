//! # Telegram Outgoing Message Schemas
//!
//! This module contains the data structures for sending messages through
//! the Telegram Bot API `sendMessage` method.

use serde::{Deserialize, Serialize};

/// Message to send through the `sendMessage` method
#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// Target chat identifier
    pub chat_id: i64,
    /// Message body
    pub text: String,
    /// Telegram formatting mode, omitted for plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
}

impl SendMessageRequest {
    /// Creates a plain text message
    pub fn new_text(chat_id: i64, text: String) -> Self {
        Self {
            chat_id,
            text,
            parse_mode: None,
        }
    }

    /// Creates an html formatted message
    pub fn new_html(chat_id: i64, text: String) -> Self {
        Self {
            chat_id,
            text,
            parse_mode: Some("HTML".to_string()),
        }
    }
}

/// Response envelope returned by Bot API methods
#[derive(Debug, Deserialize, Serialize)]
pub struct SendMessageResponse {
    /// Whether Telegram accepted the request
    pub ok: bool,
    /// Human readable error when `ok` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The sent message when `ok` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SentMessage>,
}

/// Subset of the message object Telegram returns after a send
#[derive(Debug, Deserialize, Serialize)]
pub struct SentMessage {
    /// Identifier Telegram assigned to the sent message
    pub message_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_request_plain_text_serialization() {
        let request = SendMessageRequest::new_text(42, "You said: hi".to_string());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["chat_id"], 42);
        assert_eq!(json["text"], "You said: hi");
        assert!(json.get("parse_mode").is_none());
    }

    #[test]
    fn test_send_message_request_html_serialization() {
        let request = SendMessageRequest::new_html(42, "<strong>Hello!</strong>".to_string());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["parse_mode"], "HTML");
    }

    #[test]
    fn test_send_message_response_error_deserialization() {
        let json =
            r#"{"ok":false,"error_code":403,"description":"Forbidden: bot was blocked by the user"}"#;
        let response: SendMessageResponse = serde_json::from_str(json).unwrap();

        assert!(!response.ok);
        assert!(response.description.unwrap().contains("blocked"));
        assert!(response.result.is_none());
    }
}
