mod chat;
mod input;
mod upload;

use std::path::PathBuf;

use tokio::sync::mpsc;

use super::App;
use crate::api::ChatReply;
use crate::core::document::UploadedDocument;
use crate::core::errors::{ChatError, UploadError};

pub enum AppAction {
    SelectDocument { path: PathBuf },
    UploadSucceeded,
    UploadFailed { error: UploadError },
    SubmitMessage { text: String },
    ChatReplied { reply: ChatReply },
    ChatFailed { error: ChatError },
    OpenFilePrompt,
    CancelFilePrompt,
    SubmitFilePrompt { input: String },
    DismissAlert,
    ScrollUp { lines: u16 },
    ScrollDown { lines: u16 },
    ScrollToBottom,
    Quit,
}

/// Queues actions for the event loop from background tasks.
#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppAction>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppAction>) -> Self {
        Self { tx }
    }

    pub fn dispatch_many<I>(&self, actions: I)
    where
        I: IntoIterator<Item = AppAction>,
    {
        for action in actions.into_iter() {
            let _ = self.tx.send(action);
        }
    }

    pub fn dispatch(&self, action: AppAction) {
        self.dispatch_many([action]);
    }
}

/// Network work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Upload(UploadedDocument),
    SendChat { message: String },
}

pub fn apply_actions(
    app: &mut App,
    actions: impl IntoIterator<Item = AppAction>,
) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    for action in actions {
        if let Some(cmd) = apply_action(app, action) {
            commands.push(cmd);
        }
    }
    commands
}

pub fn apply_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SelectDocument { .. }
        | AppAction::UploadSucceeded
        | AppAction::UploadFailed { .. } => upload::handle_upload_action(app, action),

        AppAction::SubmitMessage { .. }
        | AppAction::ChatReplied { .. }
        | AppAction::ChatFailed { .. } => chat::handle_chat_action(app, action),

        AppAction::OpenFilePrompt
        | AppAction::CancelFilePrompt
        | AppAction::SubmitFilePrompt { .. }
        | AppAction::DismissAlert
        | AppAction::ScrollUp { .. }
        | AppAction::ScrollDown { .. }
        | AppAction::ScrollToBottom
        | AppAction::Quit => input::handle_input_action(app, action),
    }
}
