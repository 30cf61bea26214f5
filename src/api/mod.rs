//! Wire types and the backend seam for the document Q&A server.
//!
//! The server exposes three endpoints: `POST /upload-pdf` (multipart, field
//! `file`), `POST /chat` (JSON `{ "message": ... }`) and `GET /health`.
//! [`DocumentChatBackend`] abstracts them so the chat state machine can be
//! driven against [`client::HttpBackend`] or a test double.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::{ChatError, UploadError};

pub mod client;

pub use client::HttpBackend;

#[derive(Serialize, Clone, Debug)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub source_documents: Option<Vec<SourceDocument>>,
}

/// Retrieval hit returned by the reference server. `page` is zero-based.
#[derive(Deserialize, Debug, Clone)]
pub struct SourceDocument {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub content: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct UploadAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error payload shape used by the server for non-success responses.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

/// Reply to a chat message, with sources flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub sources: Vec<String>,
}

impl ChatResponse {
    pub fn into_reply(self) -> ChatReply {
        let mut sources = self.sources.unwrap_or_default();
        if let Some(documents) = self.source_documents {
            sources.extend(documents.iter().map(SourceDocument::display_label));
        }
        ChatReply {
            text: self.response,
            sources,
        }
    }
}

impl SourceDocument {
    pub fn display_label(&self) -> String {
        let content = self.content.trim();
        match self.page {
            Some(page) => format!("Page {}: {}", page + 1, content),
            None => content.to_string(),
        }
    }
}

impl ErrorBody {
    /// The user-facing text the server attached to a failure, preferring
    /// `detail` over `message`.
    pub fn summary(&self) -> Option<String> {
        [&self.detail, &self.message]
            .into_iter()
            .flatten()
            .find_map(|value| match value {
                serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
                serde_json::Value::Null => None,
                serde_json::Value::String(_) => None,
                other => Some(other.to_string()),
            })
    }
}

#[async_trait]
pub trait DocumentChatBackend: Send + Sync {
    /// Upload the PDF at `path` as the multipart field `file`.
    async fn upload_pdf(&self, path: &Path, file_name: &str) -> Result<UploadAck, UploadError>;

    async fn send_chat(&self, message: &str) -> Result<ChatReply, ChatError>;
}
