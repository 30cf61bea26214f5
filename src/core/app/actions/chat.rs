use tracing::{debug, info, warn};

use super::{App, AppAction, AppCommand};
use crate::core::app::InFlight;
use crate::core::errors::CHAT_FALLBACK_MESSAGE;
use crate::core::message::ChatMessage;

pub(super) fn handle_chat_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SubmitMessage { text } => submit_message(app, text),
        AppAction::ChatReplied { reply } => {
            if take_chat_in_flight(app) {
                info!(sources = reply.sources.len(), "Chat reply received");
                app.append_message(ChatMessage::assistant_with_sources(
                    reply.text,
                    reply.sources,
                ));
            }
            None
        }
        AppAction::ChatFailed { error } => {
            if take_chat_in_flight(app) {
                warn!(%error, "Chat request failed");
                app.append_message(ChatMessage::assistant(CHAT_FALLBACK_MESSAGE));
            }
            None
        }
        _ => None,
    }
}

fn submit_message(app: &mut App, text: String) -> Option<AppCommand> {
    if text.trim().is_empty() {
        return None;
    }
    if !app.has_document() {
        debug!("Ignoring message: no document uploaded");
        return None;
    }
    if app.is_pending() {
        debug!("Ignoring message while a request is in flight");
        return None;
    }

    app.append_message(ChatMessage::user(text.clone()));
    app.in_flight = Some(InFlight::Chat);
    info!(chars = text.chars().count(), "Sending chat message");
    Some(AppCommand::SendChat { message: text })
}

fn take_chat_in_flight(app: &mut App) -> bool {
    if app.in_flight == Some(InFlight::Chat) {
        app.in_flight = None;
        true
    } else {
        warn!("Chat completion received with no chat in flight");
        false
    }
}
