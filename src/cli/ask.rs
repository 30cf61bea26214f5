//! TUI-less "ask" command: upload a PDF, ask one question, print the answer.

use std::error::Error;
use std::path::Path;

use tracing::info;

use crate::api::{DocumentChatBackend, HttpBackend};
use crate::core::app::{apply_action, App, AppAction};
use crate::core::message::ChatMessage;
use crate::core::operations::execute_command;

/// Apply `action` and run any command it produces to completion.
async fn run_to_completion(
    app: &mut App,
    backend: &dyn DocumentChatBackend,
    action: AppAction,
) -> bool {
    let Some(command) = apply_action(app, action) else {
        return false;
    };
    let completion = execute_command(backend, command).await;
    apply_action(app, completion);
    true
}

/// Upload `pdf` and ask `question` through the same state machine the TUI
/// uses. Returns the assistant's reply, or the alert that stopped the flow.
pub async fn ask_document(
    app: &mut App,
    backend: &dyn DocumentChatBackend,
    pdf: &Path,
    question: &str,
) -> Result<ChatMessage, String> {
    run_to_completion(
        app,
        backend,
        AppAction::SelectDocument {
            path: pdf.to_path_buf(),
        },
    )
    .await;
    if let Some(alert) = app.ui.alert.take() {
        return Err(alert);
    }

    let sent = run_to_completion(
        app,
        backend,
        AppAction::SubmitMessage {
            text: question.to_string(),
        },
    )
    .await;
    if !sent {
        return Err("Question must not be empty".to_string());
    }

    app.conversation
        .last()
        .filter(|message| message.is_assistant())
        .cloned()
        .ok_or_else(|| "No reply received".to_string())
}

pub async fn run_ask(
    server_url: String,
    pdf: &Path,
    question: Vec<String>,
) -> Result<(), Box<dyn Error>> {
    let question = question.join(" ");
    if question.trim().is_empty() {
        eprintln!("Usage: pdfchat ask --pdf <PDF> <QUESTION>...");
        std::process::exit(1);
    }

    info!(%server_url, pdf = %pdf.display(), "Asking question");
    let backend = HttpBackend::new(server_url.clone());
    let mut app = App::new(server_url);

    match ask_document(&mut app, &backend, pdf, &question).await {
        Ok(reply) => {
            println!("{}", reply.text);
            if reply.has_sources() {
                println!();
                println!("Sources:");
                for source in &reply.sources {
                    println!("  - {source}");
                }
            }
            Ok(())
        }
        Err(alert) => {
            eprintln!("❌ {alert}");
            std::process::exit(1);
        }
    }
}
