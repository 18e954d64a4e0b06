#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum UiMode {
    Home,
    Companies,
    Company,
    Jobs,
    Login,
    Signup,
    Profile,
}

impl UiMode {
    pub(in crate::tui_shell) fn prompt(self) -> &'static str {
        match self {
            UiMode::Home => "jobly>",
            UiMode::Companies => "companies>",
            UiMode::Company => "company>",
            UiMode::Jobs => "jobs>",
            UiMode::Login => "login>",
            UiMode::Signup => "signup>",
            UiMode::Profile => "profile>",
        }
    }
}
