use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use super::AppHandle;

use crate::core::app::{App, AppAction};

/// Startup parameters for an interactive session.
#[derive(Debug, Clone)]
pub struct ChatOptions {
    pub server_url: String,
    /// Document to upload as soon as the loop starts.
    pub initial_pdf: Option<PathBuf>,
}

/// Build the shared app state and the actions to run before the first frame.
pub fn bootstrap_app(options: &ChatOptions) -> (AppHandle, Vec<AppAction>) {
    info!(server_url = %options.server_url, "Starting chat session");
    let app = App::new(options.server_url.clone());

    let startup_actions = options
        .initial_pdf
        .iter()
        .map(|path| AppAction::SelectDocument { path: path.clone() })
        .collect();

    (AppHandle::new(Arc::new(Mutex::new(app))), startup_actions)
}
