//! UI rendering logic
//!
//! Handles layout and rendering of the application using Ratatui.
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Document editor (upper half)
//! - Span list (lower half)
//! - Status line (1 line, fixed)

use super::app::{App, Focus, Mode, StatusKind};
use super::viewer::Pane;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use scour_core::stats;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 50;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Check minimum width
    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    // Split layout vertically: title, editor, span list, status line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Title bar
            Constraint::Percentage(50),             // Document editor
            Constraint::Min(3),                     // Span list
            Constraint::Length(STATUS_LINE_HEIGHT), // Status line
        ])
        .split(size);

    render_title_bar(frame, chunks[0], app);
    render_editor(frame, chunks[1], app);
    render_span_list(frame, chunks[2], app);
    render_status_line(frame, chunks[3], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!("scour:: {}", app.source_name);
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_editor(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::Editor {
        " [FOCUSED]"
    } else {
        ""
    };
    let lock_indicator = if app.session.is_locked() {
        " (locked for review)"
    } else {
        ""
    };

    let title = format!("Document{}{}", focus_indicator, lock_indicator);
    let block = Block::default().borders(Borders::ALL).title(title);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    app.editor.render(frame, inner_area, &app.session);
}

fn render_span_list(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::SpanList {
        " [FOCUSED]"
    } else {
        ""
    };

    let title = if app.session.spans().is_empty() {
        format!("Parentheticals{}", focus_indicator)
    } else {
        format!(
            "Parentheticals{} ({} keep / {} delete)",
            focus_indicator,
            app.session.kept_count(),
            app.session.deleted_count()
        )
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    app.span_list.render(frame, inner_area, &app.session);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.mode {
        Mode::SavePrompt { name } => Line::from(vec![
            Span::styled(
                "Save as: ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(name.clone()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
            Span::styled(
                "  (Enter: write · Esc: cancel)",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Mode::ConfirmReset => {
            let mut parts = Vec::new();
            if let Some(status) = &app.status {
                parts.push(Span::styled(
                    status.text.clone(),
                    Style::default().fg(Color::Green),
                ));
                parts.push(Span::raw(" "));
            }
            parts.push(Span::styled(
                "Clear for the next document? (y/n)",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            Line::from(parts)
        }
        Mode::Main => main_status_line(app),
    };

    let paragraph =
        Paragraph::new(line).style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(paragraph, area);
}

fn main_status_line(app: &App) -> Line<'static> {
    let mut parts = Vec::new();

    if app.session.is_locked() {
        parts.push(Span::styled(
            "REVIEW",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        parts.push(Span::styled(
            "EDIT",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    parts.push(Span::raw(" | "));

    let counts = stats(app.session.text());
    parts.push(Span::styled("Chars: ", Style::default().fg(Color::Yellow)));
    parts.push(Span::raw(format!(
        "{} ({} no-space)",
        counts.total, counts.non_space
    )));
    parts.push(Span::raw(" | "));

    if let Some(status) = &app.status {
        let style = match status.kind {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Warn => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        parts.push(Span::styled(status.text.clone(), style));
    } else {
        parts.push(Span::styled(
            "^O strip * · ^B analyze · ^S save · ^N reset · ^Q quit",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(parts)
}
