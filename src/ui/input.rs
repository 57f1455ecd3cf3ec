use crate::pin::EditAction;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.clear();
        return;
    }
    if let Some(action) = edit_action(key) {
        app.edit(action);
        return;
    }

    match key.code {
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Left => app.move_focus(-1),
        KeyCode::Right => app.move_focus(1),
        KeyCode::Home => app.focus(0),
        KeyCode::End => app.focus_last(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.type_char(ch)
        }
        _ => {}
    }
}

/// Ctrl+X/C/V/A, with or without Shift.
fn edit_action(key: KeyEvent) -> Option<EditAction> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let KeyCode::Char(ch) = key.code else {
        return None;
    };
    match ch.to_ascii_lowercase() {
        'x' => Some(EditAction::Cut),
        'c' => Some(EditAction::Copy),
        'v' => Some(EditAction::Paste),
        'a' => Some(EditAction::SelectAll),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
