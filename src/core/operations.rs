//! Runs [`AppCommand`]s against a backend and turns the outcome into the
//! completion action the state machine expects.

use tracing::debug;

use crate::api::DocumentChatBackend;
use crate::core::app::{AppAction, AppCommand};

pub async fn execute_command(backend: &dyn DocumentChatBackend, command: AppCommand) -> AppAction {
    match command {
        AppCommand::Upload(document) => {
            match backend.upload_pdf(&document.path, &document.name).await {
                Ok(ack) => {
                    debug!(name = %document.name, ack = ?ack.message, "Upload acknowledged");
                    AppAction::UploadSucceeded
                }
                Err(error) => AppAction::UploadFailed { error },
            }
        }
        AppCommand::SendChat { message } => match backend.send_chat(&message).await {
            Ok(reply) => AppAction::ChatReplied { reply },
            Err(error) => AppAction::ChatFailed { error },
        },
    }
}
