use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{ChatReply, DocumentChatBackend, UploadAck};
use crate::core::app::{apply_action, App, AppAction, AppCommand};
use crate::core::document::UploadedDocument;
use crate::core::errors::{ChatError, UploadError};

pub fn create_test_app() -> App {
    App::new("http://localhost:8000")
}

/// An app whose server has already accepted `report.pdf`.
pub fn create_test_app_with_document() -> App {
    let mut app = create_test_app();
    app.document = Some(UploadedDocument::from_path("/tmp/report.pdf").unwrap());
    app
}

pub fn reply(text: &str) -> ChatReply {
    ChatReply {
        text: text.to_string(),
        sources: Vec::new(),
    }
}

/// Backend double that replays queued results and records every call.
#[derive(Default)]
pub struct MockBackend {
    upload_results: Mutex<VecDeque<Result<UploadAck, UploadError>>>,
    chat_results: Mutex<VecDeque<Result<ChatReply, ChatError>>>,
    pub uploads: Mutex<Vec<String>>,
    pub chats: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_upload(self, result: Result<UploadAck, UploadError>) -> Self {
        self.upload_results.lock().unwrap().push_back(result);
        self
    }

    pub fn queue_chat(self, result: Result<ChatReply, ChatError>) -> Self {
        self.chat_results.lock().unwrap().push_back(result);
        self
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn chat_count(&self) -> usize {
        self.chats.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentChatBackend for MockBackend {
    async fn upload_pdf(&self, _path: &Path, file_name: &str) -> Result<UploadAck, UploadError> {
        self.uploads.lock().unwrap().push(file_name.to_string());
        self.upload_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(UploadAck::default()))
    }

    async fn send_chat(&self, message: &str) -> Result<ChatReply, ChatError> {
        self.chats.lock().unwrap().push(message.to_string());
        self.chat_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Transport("no reply queued".into())))
    }
}

/// Apply `action`, then run any resulting command to completion against
/// `backend` and apply its completion action.
pub async fn drive(app: &mut App, backend: &MockBackend, action: AppAction) -> Option<AppCommand> {
    let command = apply_action(app, action)?;
    let completion = crate::core::operations::execute_command(backend, command.clone()).await;
    apply_action(app, completion);
    Some(command)
}
