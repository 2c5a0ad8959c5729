//! Application state and orchestration
//!
//! The App owns the session, the two panes, the focus, and the interaction
//! mode (main view, save prompt, reset confirmation). It is the single place
//! where pane events and keyboard shortcuts are applied to the session, and
//! where every `SessionError` or informational outcome is translated into a
//! status-line message. Nothing here touches the terminal, so the whole
//! flow is testable without one.

use super::editor::EditorPane;
use super::spanlist::SpanListPane;
use super::viewer::{Pane, PaneEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scour_core::{derive_name, stats, Session, SessionError};
use std::fs;

/// Which pane currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Document editor has focus
    #[default]
    Editor,
    /// Span list has focus
    SpanList,
}

impl Focus {
    /// Toggle focus to the other pane
    pub fn toggle(&self) -> Focus {
        match self {
            Focus::Editor => Focus::SpanList,
            Focus::SpanList => Focus::Editor,
        }
    }
}

/// Interaction mode of the whole application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Normal editing/reviewing view
    Main,
    /// Filename prompt before writing the result
    SavePrompt { name: String },
    /// Post-save question: clear everything for the next document?
    ConfirmReset,
}

/// Severity of the last status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warn,
}

/// Outcome of the last user action, shown in the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// The application: session, panes, focus, mode, and status
pub struct App {
    pub session: Session,
    pub editor: EditorPane,
    pub span_list: SpanListPane,
    pub focus: Focus,
    pub mode: Mode,
    pub status: Option<StatusMessage>,
    pub source_name: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, source_name: String) -> Self {
        let mut editor = EditorPane::new();
        editor.move_to_end(session.text());
        App {
            session,
            editor,
            span_list: SpanListPane::new(),
            focus: Focus::Editor,
            mode: Mode::Main,
            status: None,
            source_name,
            should_quit: false,
        }
    }

    /// Toggle focus between the editor and the span list
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Handle one keyboard event according to the current mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                _ => {}
            }
        }

        match self.mode.clone() {
            Mode::Main => self.handle_main_key(key),
            Mode::SavePrompt { name } => self.handle_save_prompt_key(key, name),
            Mode::ConfirmReset => self.handle_confirm_reset_key(key),
        }
    }

    /// Handle pasted clipboard content (bracketed paste)
    pub fn handle_paste(&mut self, data: &str) {
        match &mut self.mode {
            Mode::Main => {
                let event = self.editor.begin_insert(data);
                self.apply_event(event);
            }
            Mode::SavePrompt { name } => {
                // Filenames are single-line
                name.extend(data.chars().filter(|&ch| ch != '\n' && ch != '\r'));
            }
            Mode::ConfirmReset => {}
        }
    }

    fn handle_main_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('o') => self.remove_stars(),
                KeyCode::Char('b') => self.analyze(),
                KeyCode::Char('s') => self.open_save_prompt(),
                KeyCode::Char('n') => {
                    self.reset_session();
                    self.info("Session cleared.");
                }
                _ => {}
            }
            return;
        }

        if key.code == KeyCode::Tab && self.session.is_locked() {
            self.toggle_focus();
            return;
        }

        let event = match self.focus {
            Focus::Editor => self.editor.handle_key(key, &self.session),
            Focus::SpanList => self.span_list.handle_key(key, &self.session),
        };
        if let Some(event) = event {
            self.apply_event(event);
        }
    }

    fn handle_save_prompt_key(&mut self, key: KeyEvent, mut name: String) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Main;
                self.info("Save canceled.");
            }
            KeyCode::Enter => self.save(&name),
            KeyCode::Backspace => {
                name.pop();
                self.mode = Mode::SavePrompt { name };
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                name.push(ch);
                self.mode = Mode::SavePrompt { name };
            }
            _ => {}
        }
    }

    fn handle_confirm_reset_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.reset_session();
                self.info("Ready for the next document.");
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = Mode::Main;
            }
            _ => {}
        }
    }

    /// Apply a pane event to the session, committing or discarding the
    /// editor's pending cursor and surfacing refusals in the status line.
    fn apply_event(&mut self, event: PaneEvent) {
        match event {
            PaneEvent::Insert { at, text } => {
                match self.session.edit(|buffer| buffer.insert_str(at, &text)) {
                    Ok(()) => {
                        self.editor.commit_pending();
                        self.status = None;
                    }
                    Err(err) => {
                        self.editor.clear_pending();
                        self.warn_err(err);
                    }
                }
            }
            PaneEvent::Delete { from, to } => {
                match self.session.edit(|buffer| {
                    buffer.replace_range(from..to, "");
                }) {
                    Ok(()) => {
                        self.editor.commit_pending();
                        self.status = None;
                    }
                    Err(err) => {
                        self.editor.clear_pending();
                        self.warn_err(err);
                    }
                }
            }
            PaneEvent::ToggleKeep(index) => match self.session.toggle_keep(index) {
                Ok(keep) => {
                    let verb = if keep { "kept" } else { "deleted" };
                    self.info(format!("Span {} will be {}.", index + 1, verb));
                }
                Err(err) => self.warn_err(err),
            },
            PaneEvent::NoChange => {}
        }
    }

    fn remove_stars(&mut self) {
        match self.session.remove_stars() {
            Ok(0) => self.info("No asterisks found."),
            Ok(removed) => {
                self.editor.clamp(self.session.text());
                self.info(format!("Removed {} asterisk(s).", removed));
            }
            Err(err) => self.warn_err(err),
        }
    }

    fn analyze(&mut self) {
        match self.session.extract() {
            Ok(spans) => {
                let found = spans.len();
                self.span_list.reset_selection();
                self.focus = Focus::SpanList;
                if found == 0 {
                    self.info("No parenthetical content found.");
                } else {
                    self.info(format!(
                        "{} parenthetical span(s) found. Space toggles keep/delete.",
                        found
                    ));
                }
            }
            Err(err) => self.warn_err(err),
        }
    }

    fn open_save_prompt(&mut self) {
        let name = format!("{}.txt", derive_name(&self.session.reconstruct()));
        self.mode = Mode::SavePrompt { name };
    }

    fn save(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.warn("Filename is empty.");
            return;
        }

        let final_text = self.session.reconstruct();
        match fs::write(name, &final_text) {
            Ok(()) => {
                let counts = stats(&final_text);
                self.info(format!(
                    "Saved {}: {} chars ({} without spaces); kept {}, deleted {}.",
                    name,
                    counts.total,
                    counts.non_space,
                    self.session.kept_count(),
                    self.session.deleted_count()
                ));
                self.mode = Mode::ConfirmReset;
            }
            Err(err) => {
                self.warn(format!("Save failed: {}", err));
                self.mode = Mode::Main;
            }
        }
    }

    fn reset_session(&mut self) {
        self.session.reset();
        self.editor.clamp(self.session.text());
        self.span_list.reset_selection();
        self.focus = Focus::Editor;
        self.mode = Mode::Main;
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    fn warn(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Warn,
            text: text.into(),
        });
    }

    fn warn_err(&mut self, err: SessionError) {
        self.warn(err.to_string());
    }
}
