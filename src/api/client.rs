use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use tracing::debug;

use super::{
    ChatReply, ChatRequest, ChatResponse, DocumentChatBackend, ErrorBody, HealthResponse,
    UploadAck,
};
use crate::core::document::PDF_MEDIA_TYPE;
use crate::core::errors::{ChatError, UploadError};
use crate::utils::url::construct_api_url;

pub const UPLOAD_ENDPOINT: &str = "upload-pdf";
pub const CHAT_ENDPOINT: &str = "chat";
pub const HEALTH_ENDPOINT: &str = "health";

/// reqwest-backed client for the document Q&A server.
///
/// The underlying client is built without a timeout: both operations wait
/// until the server answers or the connection fails.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn server_port(&self) -> Option<u16> {
        Url::parse(&self.base_url)
            .ok()
            .and_then(|url| url.port_or_known_default())
    }

    fn classify_send_error(&self, err: reqwest::Error) -> UploadError {
        if err.is_builder() {
            UploadError::Request {
                message: err.to_string(),
            }
        } else {
            UploadError::NoResponse {
                port: self.server_port(),
                reason: err.to_string(),
            }
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, Box<dyn std::error::Error>> {
        let url = construct_api_url(&self.base_url, HEALTH_ENDPOINT);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("Health check failed with status {status}: {error_text}").into());
        }

        Ok(response.json::<HealthResponse>().await?)
    }
}

#[async_trait]
impl DocumentChatBackend for HttpBackend {
    async fn upload_pdf(&self, path: &Path, file_name: &str) -> Result<UploadAck, UploadError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| UploadError::Request {
                message: err.to_string(),
            })?;

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(PDF_MEDIA_TYPE)
            .map_err(|err| UploadError::Request {
                message: err.to_string(),
            })?;
        let form = Form::new().part("file", part);

        let url = construct_api_url(&self.base_url, UPLOAD_ENDPOINT);
        debug!(%url, file_name, "Uploading document");

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| self.classify_send_error(err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.summary());
            return Err(UploadError::Server {
                status: status.as_u16(),
                message,
            });
        }

        // The acknowledgement body is informational; an unexpected shape does
        // not turn an accepted upload into a failure.
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<UploadAck>(&body).unwrap_or_default())
    }

    async fn send_chat(&self, message: &str) -> Result<ChatReply, ChatError> {
        let url = construct_api_url(&self.base_url, CHAT_ENDPOINT);
        let request = ChatRequest {
            message: message.to_string(),
        };

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|err| ChatError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response
            .json::<ChatResponse>()
            .await
            .map_err(|err| ChatError::Decode(err.to_string()))?;
        Ok(parsed.into_reply())
    }
}
