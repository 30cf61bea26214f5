use super::{upload, App, AppAction, AppCommand};
use crate::core::document::parse_selected_path;

pub(super) fn handle_input_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::OpenFilePrompt => {
            if app.upload_enabled() {
                let initial = app
                    .document
                    .as_ref()
                    .and_then(|doc| doc.path.parent())
                    .map(|dir| {
                        let mut dir = dir.display().to_string();
                        if !dir.is_empty() && !dir.ends_with(std::path::MAIN_SEPARATOR) {
                            dir.push(std::path::MAIN_SEPARATOR);
                        }
                        dir
                    })
                    .unwrap_or_default();
                app.ui.start_file_prompt(&initial);
            }
            None
        }
        AppAction::CancelFilePrompt => {
            app.ui.cancel_file_prompt();
            None
        }
        AppAction::SubmitFilePrompt { input } => {
            app.ui.cancel_file_prompt();
            let path = parse_selected_path(&input)?;
            upload::select_document(app, &path)
        }
        AppAction::DismissAlert => {
            app.ui.dismiss_alert();
            None
        }
        AppAction::ScrollUp { lines } => {
            app.ui.scroll.scroll_up(lines);
            None
        }
        AppAction::ScrollDown { lines } => {
            app.ui.scroll.scroll_down(lines);
            None
        }
        AppAction::ScrollToBottom => {
            app.ui.scroll.scroll_to_bottom();
            None
        }
        AppAction::Quit => {
            app.ui.exit_requested = true;
            None
        }
        _ => None,
    }
}
