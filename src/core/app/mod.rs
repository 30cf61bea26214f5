//! Client state and its transitions.
//!
//! [`App`] is the single state record: transcript, active document, the
//! in-flight operation and UI state. It is only mutated through
//! [`apply_action`]/[`apply_actions`], which return [`AppCommand`]s for the
//! network work the caller has to run.

use crate::core::document::UploadedDocument;
use crate::core::message::ChatMessage;

pub mod actions;
pub mod conversation;
pub mod ui_state;

pub use actions::{
    apply_action, apply_actions, AppAction, AppActionDispatcher, AppCommand,
};
pub use conversation::Conversation;
pub use ui_state::{FilePrompt, ScrollState, UiState};

/// The operation currently awaiting a server response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InFlight {
    /// Uploading a document, already recorded as the active one.
    Upload(UploadedDocument),
    Chat,
}

#[derive(Debug, Clone)]
pub struct SessionContext {
    pub server_url: String,
}

#[derive(Debug, Clone)]
pub struct App {
    pub session: SessionContext,
    pub conversation: Conversation,
    /// Most recently selected PDF, set as soon as its upload is sent.
    pub document: Option<UploadedDocument>,
    pub in_flight: Option<InFlight>,
    pub ui: UiState,
}

impl App {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            session: SessionContext {
                server_url: server_url.into(),
            },
            conversation: Conversation::new(),
            document: None,
            in_flight: None,
            ui: UiState::new(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Whether the draft can be edited and sent.
    pub fn input_enabled(&self) -> bool {
        self.has_document() && !self.is_pending()
    }

    pub fn upload_enabled(&self) -> bool {
        !self.is_pending()
    }

    pub fn input_placeholder(&self) -> &'static str {
        if self.has_document() {
            "Send a message..."
        } else {
            "Upload a PDF to start chatting"
        }
    }

    pub fn upload_label(&self) -> &'static str {
        if self.is_pending() {
            "Processing..."
        } else {
            "Ctrl+O upload PDF"
        }
    }

    /// Append to the transcript and follow the newest row.
    pub(crate) fn append_message(&mut self, message: ChatMessage) {
        self.conversation.push(message);
        self.ui.scroll.scroll_to_bottom();
    }
}

#[cfg(test)]
mod tests;
