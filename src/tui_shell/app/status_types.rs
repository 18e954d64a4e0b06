#[derive(Clone, Copy, Debug)]
pub(in crate::tui_shell) struct CommandDef {
    pub(in crate::tui_shell) name: &'static str,
    pub(in crate::tui_shell) aliases: &'static [&'static str],
    pub(in crate::tui_shell) usage: &'static str,
    pub(in crate::tui_shell) help: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum StatusKind {
    Output,
    Error,
}

/// What the status panel shows under the echoed command.
#[derive(Clone, Debug)]
pub(super) struct StatusEntry {
    pub(super) at: String,
    pub(super) kind: StatusKind,
    pub(super) lines: Vec<String>,
}

impl StatusEntry {
    pub(super) fn now(kind: StatusKind, lines: Vec<String>) -> Self {
        Self {
            at: super::now_ts(),
            kind,
            lines,
        }
    }
}
