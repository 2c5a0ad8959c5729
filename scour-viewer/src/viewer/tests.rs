//! Tests for the application flow
//!
//! These drive the App purely through keyboard events, without a terminal:
//! the App never touches the backend, so the full paste-scrub-analyze-
//! decide-save cycle can be asserted on session state and status messages.

use super::app::{App, Focus, Mode, StatusKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scour_core::{Phase, Session};
use std::fs;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn app_with_text(text: &str) -> App {
    App::new(Session::with_text(text), "untitled".to_string())
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        if ch == '\n' {
            app.handle_key(key(KeyCode::Enter));
        } else {
            app.handle_key(key(KeyCode::Char(ch)));
        }
    }
}

#[test]
fn test_typing_flows_into_the_session() {
    let mut app = app_with_text("");
    type_str(&mut app, "hi (x)\nbye");
    assert_eq!(app.session.text(), "hi (x)\nbye");
    assert_eq!(app.editor.cursor(), app.session.text().len());
}

#[test]
fn test_backspace_removes_last_typed_char() {
    let mut app = app_with_text("");
    type_str(&mut app, "abc");
    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.session.text(), "ab");
}

#[test]
fn test_paste_inserts_at_cursor() {
    let mut app = app_with_text("AB");
    // Cursor starts at the end of preloaded text; move before 'B'
    app.handle_key(key(KeyCode::Left));
    app.handle_paste("(pasted)");
    assert_eq!(app.session.text(), "A(pasted)B");
}

#[test]
fn test_ctrl_q_and_ctrl_c_quit() {
    let mut app = app_with_text("");
    app.handle_key(ctrl('q'));
    assert!(app.should_quit);

    let mut app = app_with_text("");
    app.handle_key(ctrl('c'));
    assert!(app.should_quit);
}

#[test]
fn test_star_removal_reports_count() {
    let mut app = app_with_text("a*b*c");
    app.handle_key(ctrl('o'));
    assert_eq!(app.session.text(), "abc");
    let status = app.status.clone().unwrap();
    assert_eq!(status.kind, StatusKind::Info);
    assert!(status.text.contains("2"));
}

#[test]
fn test_star_removal_noop_notice() {
    let mut app = app_with_text("clean already");
    app.handle_key(ctrl('o'));
    assert_eq!(app.status.clone().unwrap().text, "No asterisks found.");
}

#[test]
fn test_star_removal_reclamps_cursor() {
    let mut app = app_with_text("abc***");
    assert_eq!(app.editor.cursor(), 6);
    app.handle_key(ctrl('o'));
    assert_eq!(app.editor.cursor(), 3);
}

#[test]
fn test_analyze_locks_and_focuses_span_list() {
    let mut app = app_with_text("a (b) c");
    app.handle_key(ctrl('b'));
    assert_eq!(app.session.phase(), Phase::Reviewing);
    assert_eq!(app.focus, Focus::SpanList);
    assert!(app.status.clone().unwrap().text.contains("1 parenthetical"));
}

#[test]
fn test_analyze_without_matches_is_a_notice_not_an_error() {
    let mut app = app_with_text("nothing bracketed");
    app.handle_key(ctrl('b'));
    let status = app.status.clone().unwrap();
    assert_eq!(status.kind, StatusKind::Info);
    assert_eq!(status.text, "No parenthetical content found.");
}

#[test]
fn test_analyze_on_empty_document_refused() {
    let mut app = app_with_text("   \n  ");
    app.handle_key(ctrl('b'));
    let status = app.status.clone().unwrap();
    assert_eq!(status.kind, StatusKind::Warn);
    assert_eq!(app.session.phase(), Phase::Editing);
}

#[test]
fn test_typing_while_locked_is_refused() {
    let mut app = app_with_text("a (b) c");
    app.handle_key(ctrl('b'));
    app.handle_key(key(KeyCode::Tab)); // focus back to the editor
    assert_eq!(app.focus, Focus::Editor);

    app.handle_key(key(KeyCode::Char('x')));
    assert_eq!(app.session.text(), "a (b) c");
    assert_eq!(app.status.clone().unwrap().kind, StatusKind::Warn);
}

#[test]
fn test_star_removal_while_locked_is_refused() {
    let mut app = app_with_text("a* (b) c");
    app.handle_key(ctrl('b'));
    app.handle_key(ctrl('o'));
    assert_eq!(app.session.text(), "a* (b) c");
    assert_eq!(app.status.clone().unwrap().kind, StatusKind::Warn);
}

#[test]
fn test_tab_toggles_focus_only_when_locked() {
    let mut app = app_with_text("a (b) c");
    app.handle_key(key(KeyCode::Tab));
    // Still editing: Tab is not a focus toggle
    assert_eq!(app.focus, Focus::Editor);

    app.handle_key(ctrl('b'));
    assert_eq!(app.focus, Focus::SpanList);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Editor);
}

#[test]
fn test_space_toggles_keep_and_reconstruction_follows() {
    let mut app = app_with_text("Hello (world) and (foo\nbar) end");
    app.handle_key(ctrl('b'));
    assert_eq!(app.session.reconstruct(), "Hello  and  end");

    app.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(app.session.kept_count(), 1);
    assert_eq!(app.session.reconstruct(), "Hello (world) and  end");

    // Toggle back
    app.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(app.session.kept_count(), 0);
}

#[test]
fn test_ctrl_n_resets_everything() {
    let mut app = app_with_text("a (b) c");
    app.handle_key(ctrl('b'));
    app.handle_key(ctrl('n'));
    assert_eq!(app.session.phase(), Phase::Editing);
    assert_eq!(app.session.text(), "");
    assert_eq!(app.focus, Focus::Editor);
    assert_eq!(app.editor.cursor(), 0);
}

#[test]
fn test_save_prompt_prefilled_with_derived_name() {
    let mut app = app_with_text("My Title\nbody (note)");
    app.handle_key(ctrl('b'));
    app.handle_key(ctrl('s'));
    assert_eq!(
        app.mode,
        Mode::SavePrompt {
            name: "My Title.txt".to_string()
        }
    );
}

#[test]
fn test_save_prompt_editing_and_cancel() {
    let mut app = app_with_text("t (x)");
    app.handle_key(ctrl('s'));
    app.handle_key(key(KeyCode::Backspace));
    app.handle_key(key(KeyCode::Char('1')));
    match &app.mode {
        Mode::SavePrompt { name } => assert_eq!(name, "t (x).tx1"),
        other => panic!("expected save prompt, got {:?}", other),
    }

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.mode, Mode::Main);
    assert_eq!(app.status.clone().unwrap().text, "Save canceled.");
}

#[test]
fn test_save_writes_file_and_offers_reset() {
    let path = std::env::temp_dir().join(format!("scour-save-test-{}.txt", std::process::id()));
    let path_str = path.to_str().unwrap().to_string();

    let mut app = app_with_text("Title\nkeep (drop) this");
    app.handle_key(ctrl('b'));
    app.handle_key(ctrl('s'));
    app.mode = Mode::SavePrompt {
        name: path_str.clone(),
    };
    app.handle_key(key(KeyCode::Enter));

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "Title\nkeep  this");
    assert_eq!(app.mode, Mode::ConfirmReset);
    let status = app.status.clone().unwrap();
    assert!(status.text.contains("kept 0, deleted 1"));

    // Accept the reset offer
    app.handle_key(key(KeyCode::Char('y')));
    assert_eq!(app.session.text(), "");
    assert_eq!(app.session.phase(), Phase::Editing);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_declining_reset_keeps_the_session() {
    let path = std::env::temp_dir().join(format!("scour-decline-test-{}.txt", std::process::id()));
    let mut app = app_with_text("x (y)");
    app.handle_key(ctrl('b'));
    app.mode = Mode::SavePrompt {
        name: path.to_str().unwrap().to_string(),
    };
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.mode, Mode::ConfirmReset);

    app.handle_key(key(KeyCode::Char('n')));
    assert_eq!(app.mode, Mode::Main);
    assert_eq!(app.session.text(), "x (y)");
    assert_eq!(app.session.phase(), Phase::Reviewing);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_failure_is_surfaced_not_fatal() {
    let mut app = app_with_text("content");
    app.mode = Mode::SavePrompt {
        name: "/nonexistent-dir-for-scour-tests/out.txt".to_string(),
    };
    app.handle_key(key(KeyCode::Enter));
    let status = app.status.clone().unwrap();
    assert_eq!(status.kind, StatusKind::Warn);
    assert!(status.text.starts_with("Save failed:"));
    assert_eq!(app.mode, Mode::Main);
    // Session state survives the failure
    assert_eq!(app.session.text(), "content");
}

#[test]
fn test_empty_filename_refused() {
    let mut app = app_with_text("content");
    app.mode = Mode::SavePrompt {
        name: "  ".to_string(),
    };
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.status.clone().unwrap().text, "Filename is empty.");
    // Still prompting
    assert!(matches!(app.mode, Mode::SavePrompt { .. }));
}

#[test]
fn test_paste_into_save_prompt_strips_newlines() {
    let mut app = app_with_text("content");
    app.mode = Mode::SavePrompt {
        name: String::new(),
    };
    app.handle_paste("my\nname\r");
    match &app.mode {
        Mode::SavePrompt { name } => assert_eq!(name, "myname"),
        other => panic!("expected save prompt, got {:?}", other),
    }
}

#[test]
fn test_paste_while_locked_is_refused() {
    let mut app = app_with_text("a (b) c");
    app.handle_key(ctrl('b'));
    app.handle_paste("nope");
    assert_eq!(app.session.text(), "a (b) c");
    assert_eq!(app.status.clone().unwrap().kind, StatusKind::Warn);
}

#[test]
fn test_full_cycle_after_reset() {
    let mut app = app_with_text("first (pass)");
    app.handle_key(ctrl('b'));
    app.handle_key(ctrl('n'));

    type_str(&mut app, "second*（遍）");
    app.handle_key(ctrl('o'));
    app.handle_key(ctrl('b'));
    assert_eq!(app.session.spans().len(), 1);
    assert_eq!(app.session.reconstruct(), "second");
}
