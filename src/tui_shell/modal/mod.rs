use crossterm::event::KeyEvent;

use self::keymap::{ModalAction, map_modal_key};

mod draw;
mod keymap;
mod validate;

pub(super) use self::draw::draw_modal;

/// Routes a key to the open modal. Closing a text prompt abandons whatever
/// wizard opened it.
pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    let Some(action) = app.modal_mut().map(|m| map_modal_key(m, key)) else {
        return;
    };
    if let ModalAction::None = action {
        return;
    }

    app.close_modal();
    match action {
        ModalAction::SubmitTextInput { action, value } => app.submit_text_input(action, value),
        _ => app.cancel_wizards(),
    }
}
