pub mod errors;
pub mod server;

use crate::{repo, webhook};

pub struct AppState {
    pub repo: repo::ImplAppRepo,
    pub reply_sender: webhook::telegram::client::ImplReplySender,
}
