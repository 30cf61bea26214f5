//! Failure kinds for the two network operations.
//!
//! Upload failures are surfaced to the user as alerts, so their `Display`
//! output is the alert text. Chat failures never reach the user verbatim; the
//! transcript shows [`CHAT_FALLBACK_MESSAGE`] instead.

use std::error::Error as StdError;
use std::fmt;

pub const CHAT_FALLBACK_MESSAGE: &str =
    "I apologize, but I encountered an error processing your request.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The server answered with a non-success status.
    Server {
        status: u16,
        /// `detail` or `message` from the response body, if present.
        message: Option<String>,
    },

    /// The request was sent but no response arrived.
    NoResponse {
        /// Port of the configured server, used to point the user at it.
        port: Option<u16>,
        reason: String,
    },

    /// The request could not be built (unreadable file, invalid part, ...).
    Request { message: String },
}

impl UploadError {
    pub fn kind_label(&self) -> &'static str {
        match self {
            UploadError::Server { .. } => "server",
            UploadError::NoResponse { .. } => "no-response",
            UploadError::Request { .. } => "request",
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Server { message, .. } => write!(
                f,
                "Server error: {}",
                message.as_deref().unwrap_or("Unknown error")
            ),
            UploadError::NoResponse { port: Some(port), .. } => write!(
                f,
                "Server is not responding. Please check if the server is running on port {port}"
            ),
            UploadError::NoResponse { port: None, .. } => {
                write!(
                    f,
                    "Server is not responding. Please check if the server is running"
                )
            }
            UploadError::Request { message } => {
                write!(f, "Error setting up request: {message}")
            }
        }
    }
}

impl StdError for UploadError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    Status { status: u16, body: String },
    Transport(String),
    Decode(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Status { status, body } => {
                write!(f, "chat request failed with status {status}: {body}")
            }
            ChatError::Transport(reason) => write!(f, "chat request failed: {reason}"),
            ChatError::Decode(reason) => write!(f, "chat response could not be decoded: {reason}"),
        }
    }
}

impl StdError for ChatError {}
