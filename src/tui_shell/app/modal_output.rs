use super::*;

// Status panel.
impl App {
    pub(super) fn echo_command(&mut self, line: String) {
        self.last_command = Some(line);
        self.status = None;
    }

    pub(in crate::tui_shell) fn push_output(&mut self, lines: Vec<String>) {
        self.status = Some(StatusEntry::now(StatusKind::Output, lines));
    }

    pub(in crate::tui_shell) fn push_error(&mut self, msg: String) {
        tracing::debug!(error = %msg, "shell error");
        self.status = Some(StatusEntry::now(StatusKind::Error, vec![msg]));
    }
}

// Modals.
impl App {
    fn show_modal(&mut self, title: String, lines: Vec<String>, kind: ModalKind, input: Input) {
        self.modal = Some(Modal {
            title,
            lines,
            scroll: 0,
            kind,
            input,
        });
    }

    pub(super) fn open_modal(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.show_modal(title.into(), lines, ModalKind::Viewer, Input::default());
    }

    /// Opens one wizard step; `initial` pre-fills the answer.
    pub(in crate::tui_shell) fn open_text_input_modal(
        &mut self,
        title: impl Into<String>,
        prompt: impl Into<String>,
        action: TextInputAction,
        initial: Option<String>,
        mut lines: Vec<String>,
    ) {
        lines.extend([String::new(), "Enter to continue; Esc to cancel.".to_string()]);
        let mut input = Input::default();
        input.set(initial.unwrap_or_default());
        let kind = ModalKind::TextInput {
            action,
            prompt: prompt.into(),
        };
        self.show_modal(title.into(), lines, kind, input);
    }

    pub(in crate::tui_shell) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
    }
}
