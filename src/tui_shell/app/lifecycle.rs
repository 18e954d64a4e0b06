use super::*;

impl App {
    pub(super) fn load(ctx: UserContext, opts: crate::tui::TuiRunOptions) -> Self {
        let mut app = App::new(ctx);

        let mut lines = vec![
            "Type `help` for commands.".to_string(),
            "(Use `Esc` to go back; use `/` to show available commands.)".to_string(),
        ];
        if let Some(user) = app.ctx.current_user() {
            lines.insert(0, format!("Signed in as {}", user.username));
        }
        app.push_output(lines);

        app.navigate(opts.start);
        app
    }

    /// Signs out and returns to the home view.
    pub(in crate::tui_shell) fn logout(&mut self) {
        self.ctx.logout();
        self.cancel_wizards();
        self.go_home();
        self.push_output(vec!["Logged out".to_string()]);
    }

    pub(in crate::tui_shell) fn cancel_wizards(&mut self) {
        self.login_wizard = None;
        self.signup_wizard = None;
        self.profile_wizard = None;
        self.jobs_filter_wizard = None;
    }
}
