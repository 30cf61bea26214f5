use ratatui::style::{Color, Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Path entry overlay opened with Ctrl+O.
#[derive(Debug, Clone)]
pub struct FilePrompt {
    pub textarea: TextArea<'static>,
}

impl FilePrompt {
    fn new(initial: &str) -> Self {
        let mut textarea = TextArea::from([initial.to_string()]);
        textarea.move_cursor(CursorMove::End);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("path/to/document.pdf");
        Self { textarea }
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("")
    }
}

/// Transcript scroll position, in wrapped lines from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    /// Follow the newest row. Re-armed whenever the transcript grows.
    pub auto_scroll: bool,
    /// Largest valid offset for the last rendered viewport.
    pub max_offset: u16,
    /// Height of the last rendered transcript viewport.
    pub viewport_height: u16,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
            max_offset: 0,
            viewport_height: 0,
        }
    }
}

impl ScrollState {
    /// Offset to render with, given the current content and viewport size.
    pub fn effective_offset(&self, max_offset: u16) -> u16 {
        if self.auto_scroll {
            max_offset
        } else {
            self.offset.min(max_offset)
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        let current = self.effective_offset(self.max_offset);
        self.offset = current.saturating_sub(lines);
        self.auto_scroll = false;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let current = self.effective_offset(self.max_offset);
        self.offset = current.saturating_add(lines).min(self.max_offset);
        self.auto_scroll = self.offset >= self.max_offset;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.auto_scroll = true;
        self.offset = self.max_offset;
    }

    pub fn page_size(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    textarea: TextArea<'static>,
    file_prompt: Option<FilePrompt>,
    /// Modal notice for upload and validation failures.
    pub alert: Option<String>,
    pub scroll: ScrollState,
    pub exit_requested: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        let mut ui = Self {
            textarea: TextArea::default(),
            file_prompt: None,
            alert: None,
            scroll: ScrollState::default(),
            exit_requested: false,
        };
        ui.configure_textarea();
        ui
    }

    pub(crate) fn configure_textarea(&mut self) {
        self.textarea.set_style(Style::default().fg(Color::Reset));
        self.textarea
            .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea
            .set_placeholder_style(Style::default().fg(Color::DarkGray));
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Current draft. The input is single-line, so lines are joined without a
    /// separator.
    pub fn get_input_text(&self) -> String {
        self.textarea.lines().join("")
    }

    pub fn set_input_text(&mut self, text: &str) {
        self.textarea = TextArea::from([text.to_string()]);
        self.textarea.move_cursor(CursorMove::End);
        self.configure_textarea();
    }

    pub fn clear_input(&mut self) {
        self.textarea = TextArea::default();
        self.configure_textarea();
    }

    pub fn apply_textarea_edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        f(&mut self.textarea);
    }

    pub fn file_prompt(&self) -> Option<&FilePrompt> {
        self.file_prompt.as_ref()
    }

    pub fn start_file_prompt(&mut self, initial: &str) {
        self.file_prompt = Some(FilePrompt::new(initial));
    }

    pub fn cancel_file_prompt(&mut self) {
        self.file_prompt = None;
    }

    pub fn apply_file_prompt_edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        if let Some(prompt) = self.file_prompt.as_mut() {
            f(&mut prompt.textarea);
        }
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }
}
