use super::*;

impl App {
    pub(in crate::tui_shell) fn submit_text_input(&mut self, action: TextInputAction, value: String) {
        match action {
            TextInputAction::LoginUsername | TextInputAction::LoginPassword => {
                self.continue_login_wizard(action, value)
            }
            TextInputAction::SignupUsername
            | TextInputAction::SignupPassword
            | TextInputAction::SignupFirstName
            | TextInputAction::SignupLastName
            | TextInputAction::SignupEmail => self.continue_signup_wizard(action, value),
            TextInputAction::ProfileFirstName
            | TextInputAction::ProfileLastName
            | TextInputAction::ProfileEmail
            | TextInputAction::ProfilePassword => self.continue_profile_wizard(action, value),
            TextInputAction::JobsTitle
            | TextInputAction::JobsMinSalary
            | TextInputAction::JobsEquity => self.continue_jobs_filter_wizard(action, value),
        }
    }
}
