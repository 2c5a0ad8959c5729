//! Span list pane - displays the extracted parentheticals and their decisions
//!
//! One entry per span: a decision marker plus the literal content, and a
//! dimmed context line showing up to 15 characters on either side of the
//! match. Up/Down move the selection, Space (or Enter) flips the selected
//! span between keep and delete.

use super::viewer::{Pane, PaneEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span as UiSpan};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use scour_core::{context_window, Phase, Session};

/// Lines each entry occupies in the list (content + context)
const LINES_PER_ENTRY: usize = 2;

/// Flatten newlines so multi-line span content renders in one list row.
fn one_line(content: &str) -> String {
    content.replace('\n', " ")
}

/// Span list pane - selectable keep/delete list over the extracted spans
#[derive(Debug, Default)]
pub struct SpanListPane {
    /// Index of the selected span
    selected: usize,
}

impl SpanListPane {
    pub fn new() -> Self {
        SpanListPane::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Back to the top (after reset or a fresh extraction pass)
    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self, span_count: usize) {
        if self.selected + 1 < span_count {
            self.selected += 1;
        }
    }
}

impl Pane for SpanListPane {
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        if session.phase() == Phase::Editing {
            let hint = Paragraph::new("Press Ctrl-B to analyze parentheticals.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, area);
            return;
        }

        if session.spans().is_empty() {
            let notice = Paragraph::new("No parenthetical content found.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(notice, area);
            return;
        }

        let mut lines = Vec::with_capacity(session.spans().len() * LINES_PER_ENTRY);
        for (index, span) in session.spans().iter().enumerate() {
            let (marker, marker_style) = if span.keep {
                (
                    "[KEEP]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("[DEL ]", Style::default().fg(Color::Red))
            };

            let mut content_style = Style::default();
            if index == self.selected {
                content_style = content_style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }

            lines.push(Line::from(vec![
                UiSpan::styled(marker, marker_style),
                UiSpan::styled(format!(" {}", one_line(&span.content)), content_style),
            ]));

            let ctx = context_window(session.text(), span);
            lines.push(Line::from(UiSpan::styled(
                format!("       ...{} [here] {}...", ctx.before, ctx.after),
                Style::default().fg(Color::DarkGray),
            )));
        }

        // Keep the selected entry inside the viewport
        let selected_bottom = (self.selected + 1) * LINES_PER_ENTRY;
        let scroll = selected_bottom.saturating_sub(area.height as usize) as u16;
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
    }

    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Option<PaneEvent> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Some(PaneEvent::NoChange);
        }

        let span_count = session.spans().len();
        match key.code {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(span_count),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = span_count.saturating_sub(1),
            KeyCode::Char(' ') | KeyCode::Enter if span_count > 0 => {
                return Some(PaneEvent::ToggleKeep(self.selected));
            }
            _ => {}
        }
        Some(PaneEvent::NoChange)
    }
}
