use std::sync::Arc;

use tracing::debug;

use crate::api::DocumentChatBackend;
use crate::core::app::{AppActionDispatcher, AppCommand};
use crate::core::operations::execute_command;

/// Run `command` on a background task and dispatch its completion action.
pub fn spawn_command(
    backend: Arc<dyn DocumentChatBackend>,
    dispatcher: AppActionDispatcher,
    command: AppCommand,
) {
    debug!(?command, "Spawning command");
    tokio::spawn(async move {
        let action = execute_command(backend.as_ref(), command).await;
        dispatcher.dispatch(action);
    });
}
