use std::path::Path;

use tracing::{debug, info, warn};

use super::{App, AppAction, AppCommand};
use crate::core::app::InFlight;
use crate::core::document::UploadedDocument;
use crate::core::errors::UploadError;
use crate::core::message::ChatMessage;

pub(super) fn handle_upload_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SelectDocument { path } => select_document(app, &path),
        AppAction::UploadSucceeded => {
            complete_upload(app);
            None
        }
        AppAction::UploadFailed { error } => {
            fail_upload(app, error);
            None
        }
        _ => None,
    }
}

pub(super) fn select_document(app: &mut App, path: &Path) -> Option<AppCommand> {
    if app.is_pending() {
        debug!(path = %path.display(), "Ignoring document selection while a request is in flight");
        return None;
    }

    match UploadedDocument::from_path(path) {
        Ok(document) => {
            info!(name = %document.name, "Uploading document");
            app.document = Some(document.clone());
            app.in_flight = Some(InFlight::Upload(document.clone()));
            Some(AppCommand::Upload(document))
        }
        Err(err) => {
            debug!(path = %path.display(), error = ?err, "Rejected document selection");
            app.ui.show_alert(err.to_string());
            None
        }
    }
}

pub(crate) fn upload_success_message(name: &str) -> String {
    format!("PDF \"{name}\" has been uploaded successfully. How can I help you with this document?")
}

fn complete_upload(app: &mut App) {
    match app.in_flight.take() {
        Some(InFlight::Upload(document)) => {
            info!(name = %document.name, "Document accepted by server");
            app.append_message(ChatMessage::assistant(upload_success_message(&document.name)));
        }
        other => {
            app.in_flight = other;
            warn!("Upload completion received with no upload in flight");
        }
    }
}

fn fail_upload(app: &mut App, error: UploadError) {
    match app.in_flight.take() {
        Some(InFlight::Upload(document)) => {
            // The selection stays active so the user can still ask about it.
            warn!(name = %document.name, kind = error.kind_label(), %error, "Upload failed");
        }
        other => {
            app.in_flight = other;
            warn!("Upload failure received with no upload in flight");
            return;
        }
    }
    app.ui.show_alert(error.to_string());
}
