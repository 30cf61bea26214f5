use crate::core::app::App;
use crate::ui::transcript::build_display_lines;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_transcript(f, app, chunks[1]);
    render_input(f, app, chunks[2]);

    if app.ui.file_prompt().is_some() {
        render_file_prompt(f, app);
    }
    if app.ui.has_alert() {
        render_alert(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let document = app
        .document
        .as_ref()
        .map(|doc| doc.name.as_str())
        .unwrap_or("no document");
    let upload_style = if app.is_pending() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let header = Line::from(vec![
        Span::styled("pdfchat", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" • "),
        Span::styled(document.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(" • "),
        Span::styled(app.upload_label(), upload_style),
        Span::raw(" • "),
        Span::styled(
            app.session.server_url.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn render_transcript(f: &mut Frame, app: &mut App, area: Rect) {
    let lines = build_display_lines(app, area.width);
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_offset = total.saturating_sub(area.height);

    let scroll = &mut app.ui.scroll;
    scroll.max_offset = max_offset;
    scroll.viewport_height = area.height;
    let offset = scroll.effective_offset(max_offset);
    scroll.offset = offset;

    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let enabled = app.input_enabled();
    let mut textarea = app.ui.textarea().clone();
    textarea.set_placeholder_text(app.input_placeholder());

    let border_style = if enabled {
        Style::default().fg(Color::Cyan)
    } else {
        textarea.set_style(Style::default().fg(Color::DarkGray));
        textarea.set_cursor_style(Style::default());
        Style::default().fg(Color::DarkGray)
    };
    let title = if app.ui.file_prompt().is_some() || !enabled {
        "Ctrl+C to quit"
    } else {
        "Enter to send • Ctrl+O upload • Ctrl+C to quit"
    };

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    f.render_widget(&textarea, area);
}

fn render_file_prompt(f: &mut Frame, app: &App) {
    let Some(prompt) = app.ui.file_prompt() else {
        return;
    };
    let area = centered_rect(70, 3, f.area());
    let mut textarea = prompt.textarea.clone();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title("Upload PDF (Enter to upload, Esc to cancel)"),
    );

    f.render_widget(Clear, area);
    f.render_widget(&textarea, area);
}

fn render_alert(f: &mut Frame, app: &App) {
    let Some(message) = app.ui.alert.as_deref() else {
        return;
    };
    let outer = f.area();
    let width = outer.width.saturating_mul(3) / 5;
    let inner_width = usize::from(width.saturating_sub(2).max(1));
    let text_lines = crate::ui::transcript::wrap_text(message, inner_width).len();
    let height = u16::try_from(text_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let area = centered_rect(60, height, outer);

    let alert = Paragraph::new(message.to_string())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Alert (Enter to dismiss)"),
        );

    f.render_widget(Clear, area);
    f.render_widget(alert, area);
}

/// A rect `percent_x` wide and `height` rows tall centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(percent_x.min(100)) / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
