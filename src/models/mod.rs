pub mod bot;
pub mod chat;
