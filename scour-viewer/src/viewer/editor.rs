//! Editor pane - displays and edits the document text
//!
//! The editor shows the raw document with a cursor that can be moved with
//! the arrow keys. Edits are not applied directly: every keystroke that
//! would change the text becomes a `PaneEvent` with byte offsets, and the
//! app applies it through the session (which refuses edits once the
//! document is locked for review). The pane remembers where the cursor
//! should land if the edit goes through and commits or discards that on
//! the app's signal.

use super::viewer::{Pane, PaneEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use scour_core::Session;

/// Byte offset of the start of the line containing `cursor`.
fn line_start(text: &str, cursor: usize) -> usize {
    text[..cursor].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Byte offset of the end of the line containing `cursor` (at the `\n` or
/// the end of text).
fn line_end(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .find('\n')
        .map(|i| cursor + i)
        .unwrap_or(text.len())
}

/// Byte offset of the `col`-th character within `line`, clamped to its end.
fn offset_in_line(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

/// (row, col) of a byte offset, with col counted in characters.
fn row_col(text: &str, cursor: usize) -> (usize, usize) {
    let row = text[..cursor].matches('\n').count();
    let col = text[line_start(text, cursor)..cursor].chars().count();
    (row, col)
}

/// Editor pane - cursor-tracked view of the document buffer
#[derive(Debug, Default)]
pub struct EditorPane {
    /// Cursor position as a byte offset, always on a char boundary
    cursor: usize,
    /// Where the cursor lands if the pending edit is applied
    pending_cursor: Option<usize>,
}

impl EditorPane {
    pub fn new() -> Self {
        EditorPane::default()
    }

    /// Current cursor position (byte offset)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Place the cursor at the end of `text` (used after preloading a file)
    pub fn move_to_end(&mut self, text: &str) {
        self.cursor = text.len();
    }

    /// Pull the cursor back inside `text` after an external change
    /// (star removal, reset).
    pub fn clamp(&mut self, text: &str) {
        if self.cursor > text.len() {
            self.cursor = text.len();
        }
        while !text.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    /// The edit was applied: move the cursor where the event said it lands.
    pub fn commit_pending(&mut self) {
        if let Some(cursor) = self.pending_cursor.take() {
            self.cursor = cursor;
        }
    }

    /// The edit was refused: the cursor stays put.
    pub fn clear_pending(&mut self) {
        self.pending_cursor = None;
    }

    /// Build an insertion event at the cursor (also used for paste).
    pub fn begin_insert(&mut self, text: &str) -> PaneEvent {
        self.pending_cursor = Some(self.cursor + text.len());
        PaneEvent::Insert {
            at: self.cursor,
            text: text.to_string(),
        }
    }

    fn begin_backspace(&mut self, text: &str) -> PaneEvent {
        match text[..self.cursor].chars().next_back() {
            Some(ch) => {
                let from = self.cursor - ch.len_utf8();
                self.pending_cursor = Some(from);
                PaneEvent::Delete {
                    from,
                    to: self.cursor,
                }
            }
            None => PaneEvent::NoChange,
        }
    }

    fn begin_delete_forward(&mut self, text: &str) -> PaneEvent {
        match text[self.cursor..].chars().next() {
            Some(ch) => {
                self.pending_cursor = Some(self.cursor);
                PaneEvent::Delete {
                    from: self.cursor,
                    to: self.cursor + ch.len_utf8(),
                }
            }
            None => PaneEvent::NoChange,
        }
    }

    fn move_left(&mut self, text: &str) {
        if let Some(ch) = text[..self.cursor].chars().next_back() {
            self.cursor -= ch.len_utf8();
        }
    }

    fn move_right(&mut self, text: &str) {
        if let Some(ch) = text[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    fn move_up(&mut self, text: &str) {
        let start = line_start(text, self.cursor);
        if start == 0 {
            return;
        }
        let col = text[start..self.cursor].chars().count();
        let prev_start = line_start(text, start - 1);
        let prev_line = &text[prev_start..start - 1];
        self.cursor = prev_start + offset_in_line(prev_line, col);
    }

    fn move_down(&mut self, text: &str) {
        let end = line_end(text, self.cursor);
        if end == text.len() {
            return;
        }
        let start = line_start(text, self.cursor);
        let col = text[start..self.cursor].chars().count();
        let next_start = end + 1;
        let next_line = &text[next_start..line_end(text, next_start)];
        self.cursor = next_start + offset_in_line(next_line, col);
    }
}

impl Pane for EditorPane {
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let text = session.text();
        let cursor = self.cursor.min(text.len());
        let (cursor_row, cursor_col) = row_col(text, cursor);

        let lines: Vec<Line> = text
            .split('\n')
            .enumerate()
            .map(|(row_idx, line_text)| {
                if row_idx == cursor_row {
                    // This is the row with the cursor - render with cursor
                    // highlight
                    let mut spans = Vec::new();
                    let chars: Vec<char> = line_text.chars().collect();

                    for (col_idx, ch) in chars.iter().enumerate() {
                        if col_idx == cursor_col {
                            spans.push(Span::styled(
                                ch.to_string(),
                                Style::default()
                                    .bg(Color::Yellow)
                                    .fg(Color::Black)
                                    .add_modifier(Modifier::BOLD),
                            ));
                        } else {
                            spans.push(Span::raw(ch.to_string()));
                        }
                    }

                    // Cursor at end of line gets a highlighted virtual space
                    if cursor_col >= chars.len() {
                        spans.push(Span::styled(
                            " ",
                            Style::default().bg(Color::Yellow).fg(Color::Black),
                        ));
                    }

                    Line::from(spans)
                } else {
                    Line::from(line_text.to_string())
                }
            })
            .collect();

        // Keep the cursor row inside the viewport
        let scroll = (cursor_row + 1).saturating_sub(area.height as usize) as u16;
        let paragraph = Paragraph::new(lines).scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Option<PaneEvent> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Some(PaneEvent::NoChange);
        }

        let text = session.text();
        match key.code {
            KeyCode::Left => self.move_left(text),
            KeyCode::Right => self.move_right(text),
            KeyCode::Up => self.move_up(text),
            KeyCode::Down => self.move_down(text),
            KeyCode::Home => self.cursor = line_start(text, self.cursor),
            KeyCode::End => self.cursor = line_end(text, self.cursor),
            KeyCode::Char(ch) => return Some(self.begin_insert(&ch.to_string())),
            KeyCode::Enter => return Some(self.begin_insert("\n")),
            KeyCode::Backspace => return Some(self.begin_backspace(text)),
            KeyCode::Delete => return Some(self.begin_delete_forward(text)),
            _ => {}
        }
        Some(PaneEvent::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_editor_starts_at_origin() {
        let editor = EditorPane::new();
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_char_key_emits_insert_at_cursor() {
        let mut editor = EditorPane::new();
        let session = Session::with_text("ab");
        editor.move_to_end(session.text());

        let event = editor.handle_key(key(KeyCode::Char('c')), &session);
        assert_eq!(
            event,
            Some(PaneEvent::Insert {
                at: 2,
                text: "c".to_string()
            })
        );
        editor.commit_pending();
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_refused_edit_keeps_cursor() {
        let mut editor = EditorPane::new();
        let session = Session::with_text("ab");
        let _ = editor.handle_key(key(KeyCode::Char('x')), &session);
        editor.clear_pending();
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_backspace_deletes_previous_char() {
        let mut editor = EditorPane::new();
        let session = Session::with_text("a文b");
        editor.move_to_end(session.text());
        editor.move_left(session.text()); // before 'b'

        let event = editor.handle_key(key(KeyCode::Backspace), &session);
        // '文' is three bytes
        assert_eq!(event, Some(PaneEvent::Delete { from: 1, to: 4 }));
        editor.commit_pending();
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut editor = EditorPane::new();
        let session = Session::with_text("ab");
        let event = editor.handle_key(key(KeyCode::Backspace), &session);
        assert_eq!(event, Some(PaneEvent::NoChange));
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let text = "long first line\nab\nanother long line";
        let mut editor = EditorPane::new();
        let session = Session::with_text(text);
        editor.cursor = 10; // middle of the first line

        editor.handle_key(key(KeyCode::Down), &session);
        // Second line is short, cursor clamps to its end
        assert_eq!(editor.cursor(), text.find("ab").unwrap() + 2);

        // The clamped column carries forward (no column memory)
        editor.handle_key(key(KeyCode::Down), &session);
        let third_start = text.rfind('\n').unwrap() + 1;
        assert_eq!(editor.cursor(), third_start + 2);

        editor.handle_key(key(KeyCode::Up), &session);
        editor.handle_key(key(KeyCode::Up), &session);
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_home_and_end() {
        let text = "first\nsecond";
        let mut editor = EditorPane::new();
        let session = Session::with_text(text);
        editor.cursor = 8; // inside "second"

        editor.handle_key(key(KeyCode::End), &session);
        assert_eq!(editor.cursor(), text.len());
        editor.handle_key(key(KeyCode::Home), &session);
        assert_eq!(editor.cursor(), 6);
    }

    #[test]
    fn test_clamp_after_external_shrink() {
        let mut editor = EditorPane::new();
        editor.cursor = 10;
        editor.clamp("short");
        assert_eq!(editor.cursor(), 5);
    }

    #[test]
    fn test_clamp_lands_on_char_boundary() {
        let mut editor = EditorPane::new();
        editor.cursor = 2; // inside the three-byte '文'
        editor.clamp("文abc");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_control_modified_keys_are_ignored() {
        let mut editor = EditorPane::new();
        let session = Session::with_text("ab");
        let event = editor.handle_key(
            KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL),
            &session,
        );
        assert_eq!(event, Some(PaneEvent::NoChange));
    }
}
