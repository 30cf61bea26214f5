//! Key routing for the chat loop.
//!
//! Keys either edit a textarea in place or resolve to an [`AppAction`] for
//! the loop to dispatch. The alert takes precedence over the file prompt,
//! which takes precedence over the draft input.

use crate::core::app::{App, AppAction};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input as TAInput;

pub fn handle_key(app: &mut App, key: &KeyEvent) -> Option<AppAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppAction::Quit);
    }

    if app.ui.has_alert() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(AppAction::DismissAlert),
            _ => None,
        };
    }

    if app.ui.file_prompt().is_some() {
        return match key.code {
            KeyCode::Esc => Some(AppAction::CancelFilePrompt),
            KeyCode::Enter => Some(AppAction::SubmitFilePrompt {
                input: app.ui.file_prompt().map(|p| p.text()).unwrap_or_default(),
            }),
            _ => {
                app.ui.apply_file_prompt_edit(|ta| {
                    ta.input(TAInput::from(*key));
                });
                None
            }
        };
    }

    handle_chat_keys(app, key)
}

fn handle_chat_keys(app: &mut App, key: &KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppAction::OpenFilePrompt)
        }
        KeyCode::Up => Some(AppAction::ScrollUp { lines: 1 }),
        KeyCode::Down => Some(AppAction::ScrollDown { lines: 1 }),
        KeyCode::PageUp => Some(AppAction::ScrollUp {
            lines: app.ui.scroll.page_size(),
        }),
        KeyCode::PageDown => Some(AppAction::ScrollDown {
            lines: app.ui.scroll.page_size(),
        }),
        KeyCode::End => Some(AppAction::ScrollToBottom),
        KeyCode::Enter => {
            let text = app.ui.get_input_text();
            if !app.input_enabled() || text.trim().is_empty() {
                return None;
            }
            // Keys after Enter in the same batch land in a fresh draft.
            app.ui.clear_input();
            Some(AppAction::SubmitMessage { text })
        }
        KeyCode::Char(_)
        | KeyCode::Backspace
        | KeyCode::Delete
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Home => {
            if app.input_enabled() {
                app.ui.apply_textarea_edit(|ta| {
                    ta.input(TAInput::from(*key));
                });
            }
            None
        }
        _ => None,
    }
}

/// Normalize pasted text for the single-line inputs.
pub(crate) fn sanitize_pasted_text(text: &str) -> String {
    let without_crlf = text.replace("\r\n", " ");
    let flattened = without_crlf.replace(['\r', '\n', '\t'], " ");
    flattened.chars().filter(|c| !c.is_control()).collect()
}

/// Insert pasted text into the file prompt if open, else into the draft.
pub fn handle_paste(app: &mut App, text: &str) {
    let text = sanitize_pasted_text(text);
    if text.is_empty() || app.ui.has_alert() {
        return;
    }
    if app.ui.file_prompt().is_some() {
        app.ui.apply_file_prompt_edit(|ta| {
            ta.insert_str(&text);
        });
    } else if app.input_enabled() {
        app.ui.apply_textarea_edit(|ta| {
            ta.insert_str(&text);
        });
    }
}
