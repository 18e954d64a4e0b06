use super::Input;

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) input: Input,
}

#[derive(Debug)]
pub(in crate::tui_shell) enum ModalKind {
    Viewer,
    TextInput {
        action: TextInputAction,
        prompt: String,
    },
}

/// One step of a guided prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum TextInputAction {
    LoginUsername,
    LoginPassword,

    SignupUsername,
    SignupPassword,
    SignupFirstName,
    SignupLastName,
    SignupEmail,

    ProfileFirstName,
    ProfileLastName,
    ProfileEmail,
    ProfilePassword,

    JobsTitle,
    JobsMinSalary,
    JobsEquity,
}

impl TextInputAction {
    /// Echoed as `*` and submitted untrimmed.
    pub(in crate::tui_shell) fn is_secret(self) -> bool {
        matches!(
            self,
            TextInputAction::LoginPassword
                | TextInputAction::SignupPassword
                | TextInputAction::ProfilePassword
        )
    }
}
