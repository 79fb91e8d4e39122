//! Telegram webhook integration module
//!
//! This module provides webhook handling for the Telegram Bot API.
//! It includes the HTTP route handlers, the business logic for processing
//! updates and the client used to send replies.
//!
//! ## Submodules
//!
//! - [`client`] - Bot API client for sending replies
//! - [`errors`] - Failure taxonomy for webhook processing
//! - [`handler`] - Business logic for processing update payloads
//! - [`outgoing_schemas`] - Data structures for `sendMessage` calls
//! - [`routes`] - HTTP endpoint handlers for Telegram webhooks
//! - [`schemas`] - Data structures for incoming update payloads
//! - [`security`] - Secret token verification for deliveries

pub mod client;
pub mod errors;
pub mod handler;
pub mod outgoing_schemas;
pub mod routes;
pub mod schemas;
pub mod security;

// Re-export commonly used items for convenience
pub use routes::receive;
