//! Viewer module - trait, events, and main entry point
//!
//! The Pane trait defines a common interface for the two UI components
//! (the document editor and the span list):
//! - Render themselves given the session and an area
//! - Handle keyboard input and return events
//!
//! Panes never mutate the session themselves: they emit `PaneEvent`s and the
//! `App` applies them, so every mutation funnels through the session's phase
//! checks in one place. This module also contains the terminal setup and the
//! main event loop.

use super::app::App;
use super::ui;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use ratatui::Frame;
use scour_core::Session;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Events that can be emitted by panes
///
/// These represent session changes that should be applied after handling
/// input. Offsets are byte offsets into the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneEvent {
    /// Insert text at a byte offset in the document
    Insert { at: usize, text: String },
    /// Delete the byte range `from..to` from the document
    Delete { from: usize, to: usize },
    /// Flip the keep/delete decision of the span at this index
    ToggleKeep(usize),
    /// No session change
    NoChange,
}

/// Trait for UI panes
///
/// A pane is a component that:
/// - Knows how to render itself given the session
/// - Knows how to interpret keyboard input
/// - Emits PaneEvents when user interactions require session changes
pub trait Pane {
    /// Render this pane to the given area
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session);

    /// Handle a keyboard event and return the resulting event
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Option<PaneEvent>;
}

/// Run the interactive tool, optionally preloading a file into the editor.
pub fn run_viewer(path: Option<PathBuf>) -> io::Result<()> {
    let (session, source_name) = match &path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown")
                .to_string();
            (Session::with_text(content), name)
        }
        None => (Session::new(), "untitled".to_string()),
    };

    let mut app = App::new(session, source_name);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste)?;
    terminal.clear()?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        // Render the full UI every frame
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key(key);
                }
                Event::Paste(data) => {
                    app.handle_paste(&data);
                }
                // On terminal resize, the next loop iteration re-renders
                // with the new dimensions
                Event::Resize(_, _) => {}
                _ => {
                    // Ignore other events (mouse, focus, etc.)
                }
            }
        }
    }
}
