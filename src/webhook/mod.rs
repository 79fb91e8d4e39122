//! Webhook handlers for external integrations
//!
//! This module contains webhook endpoint handlers for the external services
//! that push events into the Echo Bot application.
//!
//! ## Modules
//!
//! - [`telegram`] - Telegram Bot API webhook handlers

pub mod routes;
pub mod telegram;
