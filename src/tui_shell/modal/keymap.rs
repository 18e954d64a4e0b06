use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{Modal, ModalKind, TextInputAction};
use super::validate::{allow_empty_text_input, validate_text_input};

pub(super) enum ModalAction {
    None,
    Close,
    SubmitTextInput {
        action: TextInputAction,
        value: String,
    },
}

pub(super) fn map_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    let action = match &modal.kind {
        ModalKind::Viewer => return handle_viewer_key(modal, key),
        ModalKind::TextInput { action, .. } => *action,
    };

    match key.code {
        KeyCode::Esc => ModalAction::Close,
        KeyCode::Enter => submit(modal, action),
        code => {
            let plain = !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
            let input = &mut modal.input;
            match code {
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Char(c) if plain => input.insert_char(c),
                _ => {}
            }
            ModalAction::None
        }
    }
}

/// Secrets are submitted as typed; everything else is trimmed first.
fn submit(modal: &mut Modal, action: TextInputAction) -> ModalAction {
    let value = if action.is_secret() {
        modal.input.buf.clone()
    } else {
        modal.input.buf.trim().to_string()
    };
    let checked = if value.is_empty() && !allow_empty_text_input(action) {
        Err("value required".to_string())
    } else {
        validate_text_input(action, &value)
    };
    match checked {
        Ok(()) => ModalAction::SubmitTextInput { action, value },
        Err(msg) => {
            show_error(modal, msg);
            ModalAction::None
        }
    }
}

fn handle_viewer_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    let last = modal.lines.len().saturating_sub(1);
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => return ModalAction::Close,
        KeyCode::Up => modal.scroll = modal.scroll.saturating_sub(1),
        KeyCode::Down => modal.scroll = (modal.scroll + 1).min(last),
        KeyCode::PageUp => modal.scroll = modal.scroll.saturating_sub(10),
        KeyCode::PageDown => modal.scroll = (modal.scroll + 10).min(last),
        _ => {}
    }
    ModalAction::None
}

/// Keeps at most one error line at the bottom of the modal.
fn show_error(modal: &mut Modal, msg: String) {
    modal.lines.retain(|l| !l.starts_with("error:"));
    modal.lines.push(format!("error: {}", msg));
}
