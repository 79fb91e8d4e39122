//! Security utilities for Telegram webhook verification
//!
//! This module verifies the `X-Telegram-Bot-Api-Secret-Token` header on
//! incoming webhook requests. The secret is registered with Telegram through
//! the `setWebhook` method and Telegram echoes it back on every delivery,
//! which lets the receiver reject requests forged by third parties.
//!
//! # Important Notes
//!
//! - The comparison must be constant-time to prevent timing attacks
//! - Deliveries failing the check are rejected before the body is parsed

use subtle::ConstantTimeEq;

/// Verifies the secret token header against the configured value
///
/// # Arguments
///
/// * `received` - The header value, `None` when the request carried none
/// * `expected` - The secret registered with Telegram via `setWebhook`
///
/// # Returns
///
/// * `true` if the header matches the configured secret
/// * `false` if the header is missing or does not match
pub fn verify_secret_token(received: Option<&str>, expected: &str) -> bool {
    let Some(received) = received else {
        logfire::warn!("Missing secret token header - webhook verification failed");
        return false;
    };

    // ct_eq already reports a mismatch for inputs of differing length
    let is_valid: bool = received.as_bytes().ct_eq(expected.as_bytes()).into();

    if !is_valid {
        logfire::warn!("Webhook secret token verification failed: tokens do not match");
    }

    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_secret_token_valid() {
        assert!(verify_secret_token(Some("hunter2-secret"), "hunter2-secret"));
    }

    #[test]
    fn test_verify_secret_token_mismatch() {
        assert!(!verify_secret_token(Some("hunter3-secret"), "hunter2-secret"));
    }

    #[test]
    fn test_verify_secret_token_length_mismatch() {
        assert!(!verify_secret_token(Some("hunter2"), "hunter2-secret"));
    }

    #[test]
    fn test_verify_secret_token_missing_header() {
        assert!(!verify_secret_token(None, "hunter2-secret"));
    }

    #[test]
    fn test_verify_secret_token_empty_expected() {
        assert!(verify_secret_token(Some(""), ""));
        assert!(!verify_secret_token(Some("hunter2-secret"), ""));
    }
}
