//! Projection of the conversation into pre-wrapped terminal lines.
//!
//! Lines are wrapped here rather than by the `Paragraph` widget so the
//! renderer knows the exact line count when it clamps the scroll offset.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::app::App;
use crate::core::message::{ChatMessage, TranscriptRole};

pub const PROCESSING_TEXT: &str = "Processing your request...";

const USER_LABEL: &str = "You:";
const ASSISTANT_LABEL: &str = "Assistant:";
const SOURCE_INDENT: &str = "  - ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptRow<'a> {
    Message(&'a ChatMessage),
    /// Trailing row shown while an upload or chat request is in flight.
    Processing,
}

pub fn transcript_rows(app: &App) -> Vec<TranscriptRow<'_>> {
    let mut rows: Vec<_> = app.conversation.iter().map(TranscriptRow::Message).collect();
    if app.is_pending() {
        rows.push(TranscriptRow::Processing);
    }
    rows
}

fn label_for(role: TranscriptRole) -> &'static str {
    match role {
        TranscriptRole::User => USER_LABEL,
        TranscriptRole::Assistant => ASSISTANT_LABEL,
    }
}

fn label_style(role: TranscriptRole) -> Style {
    match role {
        TranscriptRole::User => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        TranscriptRole::Assistant => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}

fn body_style(role: TranscriptRole) -> Style {
    match role {
        TranscriptRole::User => Style::default().fg(Color::Cyan),
        TranscriptRole::Assistant => Style::default(),
    }
}

/// Build every transcript line for a viewport `width` columns wide.
pub fn build_display_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let rows = transcript_rows(app);
    let mut lines = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        match row {
            TranscriptRow::Message(message) => push_message_lines(&mut lines, message, width),
            TranscriptRow::Processing => {
                let text = format!("{ASSISTANT_LABEL} {PROCESSING_TEXT}");
                let style = Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC);
                lines.extend(
                    wrap_text(&text, width)
                        .into_iter()
                        .map(|line| Line::from(Span::styled(line, style))),
                );
            }
        }
    }

    lines
}

fn push_message_lines(lines: &mut Vec<Line<'static>>, message: &ChatMessage, width: usize) {
    let label = label_for(message.role);
    let body = body_style(message.role);
    let text = format!("{label} {}", message.text);

    for (i, line) in wrap_text(&text, width).into_iter().enumerate() {
        match line.strip_prefix(label) {
            Some(rest) if i == 0 => lines.push(Line::from(vec![
                Span::styled(label.to_string(), label_style(message.role)),
                Span::styled(rest.to_string(), body),
            ])),
            _ => lines.push(Line::from(Span::styled(line, body))),
        }
    }

    if message.sources.is_empty() {
        return;
    }

    let source_style = Style::default().fg(Color::DarkGray);
    lines.push(Line::from(Span::styled(
        "Sources:".to_string(),
        source_style.add_modifier(Modifier::BOLD),
    )));
    let indent_width = UnicodeWidthStr::width(SOURCE_INDENT);
    let continuation = " ".repeat(indent_width);
    for source in &message.sources {
        let wrapped = wrap_text(source, width.saturating_sub(indent_width).max(1));
        for (i, line) in wrapped.into_iter().enumerate() {
            let lead = if i == 0 { SOURCE_INDENT } else { continuation.as_str() };
            lines.push(Line::from(Span::styled(format!("{lead}{line}"), source_style)));
        }
    }
}

/// Split a line into alternating runs of whitespace and non-whitespace.
fn split_runs(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != is_space)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(run)
    })
}

/// Word-wrap `text` to `width` display columns. Newlines are kept as hard
/// breaks, spacing inside a line is kept as typed, and words wider than the
/// line are split by character. Whitespace at a wrap point is dropped.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut wrapper = LineWrapper::new(width.max(1));

    for paragraph in text.split('\n') {
        let mut gap = "";
        for run in split_runs(paragraph) {
            if run.starts_with(char::is_whitespace) {
                gap = run;
            } else {
                wrapper.place(gap, run);
                gap = "";
            }
        }
        wrapper.finish_line();
    }

    wrapper.lines
}

struct LineWrapper {
    width: usize,
    lines: Vec<String>,
    current: String,
    current_width: usize,
}

impl LineWrapper {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            current: String::new(),
            current_width: 0,
        }
    }

    fn finish_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.current_width = 0;
    }

    fn push(&mut self, text: &str, text_width: usize) {
        self.current.push_str(text);
        self.current_width += text_width;
    }

    /// Append `word` preceded by `gap`, or start a new line with the bare word.
    fn place(&mut self, gap: &str, word: &str) {
        let gap_width = UnicodeWidthStr::width(gap);
        let word_width = UnicodeWidthStr::width(word);
        if self.current_width + gap_width + word_width <= self.width {
            self.push(gap, gap_width);
            self.push(word, word_width);
            return;
        }

        if self.current_width > 0 {
            self.finish_line();
        }
        if word_width <= self.width {
            self.push(word, word_width);
            return;
        }
        for ch in word.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if self.current_width > 0 && self.current_width + ch_width > self.width {
                self.finish_line();
            }
            self.current.push(ch);
            self.current_width += ch_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::{apply_action, AppAction};
    use crate::utils::test_utils::{create_test_app, create_test_app_with_document};

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn wrap_text_breaks_on_word_boundaries() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_text_keeps_inner_spacing() {
        assert_eq!(wrap_text("let  x =   1;", 40), vec!["let  x =   1;"]);
        assert_eq!(wrap_text("    indented", 40), vec!["    indented"]);
        assert_eq!(wrap_text("aaaa    bbbb", 6), vec!["aaaa", "bbbb"]);
    }

    #[test]
    fn wrap_text_splits_overlong_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_text_counts_wide_characters() {
        // Each ideograph occupies two columns.
        assert_eq!(wrap_text("文書文書", 4), vec!["文書", "文書"]);
    }

    #[test]
    fn empty_idle_app_has_no_rows() {
        let app = create_test_app();
        assert!(transcript_rows(&app).is_empty());
        assert!(build_display_lines(&app, 80).is_empty());
    }

    #[test]
    fn pending_app_ends_with_processing_row() {
        let mut app = create_test_app_with_document();
        apply_action(
            &mut app,
            AppAction::SubmitMessage {
                text: "What is the summary?".into(),
            },
        );

        let rows = transcript_rows(&app);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], TranscriptRow::Processing);

        let lines = build_display_lines(&app, 80);
        let rendered: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(
            rendered,
            vec![
                "You: What is the summary?".to_string(),
                String::new(),
                format!("Assistant: {PROCESSING_TEXT}"),
            ]
        );
    }

    #[test]
    fn sources_render_indented_under_the_reply() {
        let mut app = create_test_app_with_document();
        app.conversation.push(ChatMessage::assistant_with_sources(
            "Revenue grew.",
            vec!["Page 2: Revenue grew by ten percent".to_string()],
        ));

        let rendered: Vec<String> = build_display_lines(&app, 24).iter().map(plain).collect();
        assert_eq!(
            rendered,
            vec![
                "Assistant: Revenue grew.",
                "Sources:",
                "  - Page 2: Revenue grew",
                "    by ten percent",
            ]
        );
    }
}
