//! # API Module
//!
//! This module contains the business logic of the Echo Bot application.
//!
//! ## Modules
//!
//! - [`chat`] - Chat registry, keyed by bot and Telegram chat id

pub mod chat;
