use super::*;
use crate::api::UploadAck;
use crate::core::errors::{ChatError, UploadError, CHAT_FALLBACK_MESSAGE};
use crate::core::message::TranscriptRole;
use crate::utils::test_utils::{
    create_test_app, create_test_app_with_document, drive, reply, MockBackend,
};
use std::path::PathBuf;

fn select(path: &str) -> AppAction {
    AppAction::SelectDocument {
        path: PathBuf::from(path),
    }
}

fn submit(text: &str) -> AppAction {
    AppAction::SubmitMessage {
        text: text.to_string(),
    }
}

#[tokio::test]
async fn uploading_a_pdf_appends_one_assistant_message_and_enables_input() {
    let mut app = create_test_app();
    let backend = MockBackend::new();
    assert!(!app.input_enabled());

    let command = drive(&mut app, &backend, select("/docs/report.pdf")).await;

    assert!(matches!(command, Some(AppCommand::Upload(ref doc)) if doc.name == "report.pdf"));
    assert_eq!(backend.upload_count(), 1);
    assert_eq!(app.conversation.len(), 1);
    let message = &app.conversation.messages()[0];
    assert!(message.is_assistant());
    assert!(message.text.contains("report.pdf"));
    assert_eq!(
        message.text,
        "PDF \"report.pdf\" has been uploaded successfully. How can I help you with this document?"
    );
    assert!(app.input_enabled());
    assert!(!app.is_pending());
    assert!(app.ui.alert.is_none());
}

#[tokio::test]
async fn selecting_a_text_file_alerts_without_network() {
    let mut app = create_test_app();
    let backend = MockBackend::new();

    let command = drive(&mut app, &backend, select("/docs/notes.txt")).await;

    assert!(command.is_none());
    assert_eq!(backend.upload_count(), 0);
    assert_eq!(app.ui.alert.as_deref(), Some("Please upload a PDF file"));
    assert!(app.conversation.is_empty());
    assert!(!app.input_enabled());
    assert!(!app.is_pending());
}

#[test]
fn upload_sets_pending_and_records_document_before_completion() {
    let mut app = create_test_app();

    let command = apply_action(&mut app, select("/docs/report.pdf"));

    assert!(command.is_some());
    assert!(app.is_pending());
    assert_eq!(app.upload_label(), "Processing...");
    assert_eq!(app.document.as_ref().map(|d| d.name.as_str()), Some("report.pdf"));
    assert!(app.conversation.is_empty());
    assert!(!app.input_enabled());
}

#[tokio::test]
async fn upload_server_error_alerts_and_leaves_transcript_unchanged() {
    let mut app = create_test_app();
    let backend = MockBackend::new().queue_upload(Err(UploadError::Server {
        status: 500,
        message: Some("PDF has no text".into()),
    }));

    drive(&mut app, &backend, select("/docs/scan.pdf")).await;

    assert_eq!(app.ui.alert.as_deref(), Some("Server error: PDF has no text"));
    assert!(app.conversation.is_empty());
    assert!(!app.is_pending());
    assert!(app.upload_enabled());
}

#[tokio::test]
async fn failed_first_upload_keeps_document_selected_and_chat_enabled() {
    let mut app = create_test_app();
    let backend = MockBackend::new()
        .queue_upload(Err(UploadError::Server {
            status: 500,
            message: Some("boom".into()),
        }))
        .queue_chat(Ok(reply("Still here.")));

    drive(&mut app, &backend, select("/docs/report.pdf")).await;

    assert_eq!(app.ui.alert.as_deref(), Some("Server error: boom"));
    assert_eq!(app.document.as_ref().map(|d| d.name.as_str()), Some("report.pdf"));
    assert!(app.input_enabled());
    assert_eq!(app.input_placeholder(), "Send a message...");

    app.ui.dismiss_alert();
    drive(&mut app, &backend, submit("anything?")).await;

    assert_eq!(backend.chat_count(), 1);
    assert_eq!(app.conversation.len(), 2);
    assert_eq!(app.conversation.messages()[1].text, "Still here.");
}

#[tokio::test]
async fn upload_without_response_alerts_about_server() {
    let mut app = create_test_app();
    let backend = MockBackend::new().queue_upload(Err(UploadError::NoResponse {
        port: Some(8000),
        reason: "connection refused".into(),
    }));

    drive(&mut app, &backend, select("/docs/report.pdf")).await;

    assert_eq!(
        app.ui.alert.as_deref(),
        Some("Server is not responding. Please check if the server is running on port 8000")
    );
    assert!(app.conversation.is_empty());
}

#[tokio::test]
async fn failed_reupload_keeps_new_selection_active() {
    let mut app = create_test_app_with_document();
    let backend = MockBackend::new().queue_upload(Err(UploadError::Request {
        message: "permission denied".into(),
    }));

    drive(&mut app, &backend, select("/docs/other.pdf")).await;

    assert_eq!(
        app.ui.alert.as_deref(),
        Some("Error setting up request: permission denied")
    );
    assert_eq!(app.document.as_ref().map(|d| d.name.as_str()), Some("other.pdf"));
    assert!(app.conversation.is_empty());
    assert!(app.input_enabled());
}

#[tokio::test]
async fn successful_reupload_replaces_document_and_keeps_transcript() {
    let mut app = create_test_app();
    let backend = MockBackend::new()
        .queue_upload(Ok(UploadAck::default()))
        .queue_chat(Ok(reply("First answer")))
        .queue_upload(Ok(UploadAck::default()));

    drive(&mut app, &backend, select("/docs/first.pdf")).await;
    drive(&mut app, &backend, submit("question")).await;
    drive(&mut app, &backend, select("/docs/second.pdf")).await;

    assert_eq!(app.conversation.len(), 4);
    assert!(app.conversation.messages()[3].text.contains("second.pdf"));
    assert_eq!(app.document.as_ref().map(|d| d.name.as_str()), Some("second.pdf"));
}

#[test]
fn selection_while_pending_is_ignored() {
    let mut app = create_test_app();
    assert!(apply_action(&mut app, select("/docs/a.pdf")).is_some());

    assert!(apply_action(&mut app, select("/docs/b.pdf")).is_none());
    assert!(apply_action(&mut app, select("/docs/b.txt")).is_none());
    assert!(app.ui.alert.is_none());
    assert_eq!(app.document.as_ref().map(|d| d.name.as_str()), Some("a.pdf"));
}

#[tokio::test]
async fn sending_a_question_appends_user_then_assistant() {
    let mut app = create_test_app_with_document();
    let backend = MockBackend::new().queue_chat(Ok(reply("It is about X.")));

    let command = drive(&mut app, &backend, submit("What is the summary?")).await;

    assert_eq!(
        command,
        Some(AppCommand::SendChat {
            message: "What is the summary?".into()
        })
    );
    assert_eq!(*backend.chats.lock().unwrap(), vec!["What is the summary?"]);
    let messages = app.conversation.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, TranscriptRole::User);
    assert_eq!(messages[0].text, "What is the summary?");
    assert_eq!(messages[1].role, TranscriptRole::Assistant);
    assert_eq!(messages[1].text, "It is about X.");
    assert!(!app.is_pending());
}

#[test]
fn submit_appends_user_message_before_reply() {
    let mut app = create_test_app_with_document();

    let command = apply_action(&mut app, submit("hello"));

    assert!(command.is_some());
    assert_eq!(app.conversation.len(), 1);
    assert!(app.conversation.messages()[0].is_user());
    assert_eq!(app.in_flight, Some(InFlight::Chat));
    assert!(!app.input_enabled());
}

#[tokio::test]
async fn chat_reply_sources_are_kept_on_the_message() {
    let mut app = create_test_app_with_document();
    let backend = MockBackend::new().queue_chat(Ok(crate::api::ChatReply {
        text: "See page 2.".into(),
        sources: vec!["Page 2: Revenue grew...".into()],
    }));

    drive(&mut app, &backend, submit("revenue?")).await;

    let answer = app.conversation.last().expect("assistant reply");
    assert_eq!(answer.sources, vec!["Page 2: Revenue grew..."]);
}

#[tokio::test]
async fn chat_network_error_appends_fallback_without_alert() {
    let mut app = create_test_app_with_document();
    let backend =
        MockBackend::new().queue_chat(Err(ChatError::Transport("connection reset".into())));

    drive(&mut app, &backend, submit("hello")).await;

    assert_eq!(app.conversation.len(), 2);
    let last = app.conversation.last().unwrap();
    assert!(last.is_assistant());
    assert_eq!(last.text, CHAT_FALLBACK_MESSAGE);
    assert!(app.ui.alert.is_none());
    assert!(!app.is_pending());
}

#[test]
fn send_while_pending_is_rejected() {
    let mut app = create_test_app_with_document();
    assert!(apply_action(&mut app, submit("first")).is_some());
    app.ui.set_input_text("second");

    assert!(apply_action(&mut app, submit("second")).is_none());
    assert_eq!(app.conversation.len(), 1);
    assert_eq!(app.ui.get_input_text(), "second");
}

#[test]
fn whitespace_only_messages_are_ignored() {
    let mut app = create_test_app_with_document();
    for text in ["", "   ", "\t \n"] {
        assert!(apply_action(&mut app, submit(text)).is_none());
    }
    assert!(app.conversation.is_empty());
    assert!(!app.is_pending());
}

#[test]
fn sending_without_a_document_is_ignored() {
    let mut app = create_test_app();
    assert!(apply_action(&mut app, submit("hello?")).is_none());
    assert!(app.conversation.is_empty());
}

#[tokio::test]
async fn n_round_trips_yield_alternating_transcript_of_2n() {
    let mut app = create_test_app_with_document();
    let mut backend = MockBackend::new();
    for i in 0..5 {
        backend = backend.queue_chat(Ok(reply(&format!("answer {i}"))));
    }

    for i in 0..5 {
        drive(&mut app, &backend, submit(&format!("question {i}"))).await;
    }

    let messages = app.conversation.messages();
    assert_eq!(messages.len(), 10);
    for (i, pair) in messages.chunks(2).enumerate() {
        assert!(pair[0].is_user());
        assert_eq!(pair[0].text, format!("question {i}"));
        assert!(pair[1].is_assistant());
        assert_eq!(pair[1].text, format!("answer {i}"));
    }
}

#[test]
fn stale_completions_are_ignored() {
    let mut app = create_test_app_with_document();

    apply_action(&mut app, AppAction::UploadSucceeded);
    apply_action(
        &mut app,
        AppAction::ChatReplied {
            reply: reply("orphan"),
        },
    );

    assert!(app.conversation.is_empty());
    assert!(!app.is_pending());
}

#[test]
fn stale_upload_completion_does_not_release_an_outstanding_chat() {
    let mut app = create_test_app_with_document();
    assert!(apply_action(&mut app, submit("first")).is_some());

    apply_action(&mut app, AppAction::UploadSucceeded);
    assert_eq!(app.in_flight, Some(InFlight::Chat));
    assert_eq!(app.conversation.len(), 1);
    assert!(apply_action(&mut app, submit("second")).is_none());

    apply_action(
        &mut app,
        AppAction::UploadFailed {
            error: UploadError::Request {
                message: "late".into(),
            },
        },
    );
    assert_eq!(app.in_flight, Some(InFlight::Chat));
    assert!(app.ui.alert.is_none());
}

#[test]
fn new_messages_re_arm_auto_scroll() {
    let mut app = create_test_app_with_document();
    app.ui.scroll.max_offset = 30;
    apply_action(&mut app, AppAction::ScrollUp { lines: 10 });
    assert!(!app.ui.scroll.auto_scroll);

    apply_action(&mut app, submit("follow me"));
    assert!(app.ui.scroll.auto_scroll);
}

#[test]
fn file_prompt_submission_starts_upload_and_closes_prompt() {
    let mut app = create_test_app();
    apply_action(&mut app, AppAction::OpenFilePrompt);
    assert!(app.ui.file_prompt().is_some());

    let command = apply_action(
        &mut app,
        AppAction::SubmitFilePrompt {
            input: " '/docs/report.pdf' ".into(),
        },
    );

    assert!(matches!(
        command,
        Some(AppCommand::Upload(ref doc)) if doc.path == PathBuf::from("/docs/report.pdf")
    ));
    assert!(app.ui.file_prompt().is_none());
}

#[test]
fn empty_file_prompt_submission_just_closes() {
    let mut app = create_test_app();
    apply_action(&mut app, AppAction::OpenFilePrompt);

    let command = apply_action(&mut app, AppAction::SubmitFilePrompt { input: "  ".into() });

    assert!(command.is_none());
    assert!(app.ui.file_prompt().is_none());
    assert!(app.ui.alert.is_none());
}

#[test]
fn file_prompt_cannot_open_while_pending() {
    let mut app = create_test_app_with_document();
    apply_action(&mut app, submit("busy"));

    apply_action(&mut app, AppAction::OpenFilePrompt);
    assert!(app.ui.file_prompt().is_none());
}

#[test]
fn file_prompt_starts_in_active_document_directory() {
    let mut app = create_test_app_with_document();
    apply_action(&mut app, AppAction::OpenFilePrompt);
    let prompt = app.ui.file_prompt().expect("prompt open");
    assert_eq!(prompt.text(), format!("/tmp{}", std::path::MAIN_SEPARATOR));
}

#[test]
fn dismiss_alert_and_quit() {
    let mut app = create_test_app();
    apply_action(&mut app, select("notes.docx"));
    assert!(app.ui.has_alert());

    let commands = apply_actions(&mut app, [AppAction::DismissAlert, AppAction::Quit]);
    assert!(commands.is_empty());
    assert!(!app.ui.has_alert());
    assert!(app.ui.exit_requested);
}

#[test]
fn placeholder_tracks_document_presence() {
    let app = create_test_app();
    assert_eq!(app.input_placeholder(), "Upload a PDF to start chatting");
    let app = create_test_app_with_document();
    assert_eq!(app.input_placeholder(), "Send a message...");
    assert_eq!(app.upload_label(), "Ctrl+O upload PDF");
}
