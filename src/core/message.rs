//! Transcript rows.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptRole {
    User,
    Assistant,
}

/// One row of the transcript. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: TranscriptRole,
    pub text: String,
    /// Passages the server cited; empty when it cited none.
    pub sources: Vec<String>,
}

impl TranscriptRole {
    pub fn is_user(self) -> bool {
        self == TranscriptRole::User
    }

    pub fn is_assistant(self) -> bool {
        self == TranscriptRole::Assistant
    }
}

impl ChatMessage {
    pub fn new(role: TranscriptRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            sources: Vec::new(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TranscriptRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(TranscriptRole::Assistant, text)
    }

    pub fn assistant_with_sources(text: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            role: TranscriptRole::Assistant,
            text: text.into(),
            sources,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role.is_user()
    }

    pub fn is_assistant(&self) -> bool {
        self.role.is_assistant()
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}
