use crate::pages::{LoginForm, SignupForm};

use super::super::TextInputAction;
use super::types::{LoginWizard, SignupWizard};

impl super::super::App {
    fn already_signed_in(&mut self) -> bool {
        let Some(user) = self.ctx.current_user() else {
            return false;
        };
        let msg = format!("already signed in as {} (run `logout` first)", user.username);
        self.push_output(vec![msg]);
        true
    }

    pub(in crate::tui_shell) fn start_login_wizard(&mut self) {
        if self.already_signed_in() {
            return;
        }
        self.login_wizard = Some(LoginWizard::default());
        self.open_text_input_modal(
            "Log In",
            "username> ",
            TextInputAction::LoginUsername,
            None,
            vec![format!("Server: {}", self.ctx.client().base_url())],
        );
    }

    pub(in crate::tui_shell) fn continue_login_wizard(
        &mut self,
        action: TextInputAction,
        value: String,
    ) {
        if self.login_wizard.is_none() {
            self.push_error("login wizard not active".to_string());
            return;
        }

        match action {
            TextInputAction::LoginUsername => {
                if let Some(w) = self.login_wizard.as_mut() {
                    w.username = value.clone();
                }
                self.open_text_input_modal(
                    "Log In",
                    "password> ",
                    TextInputAction::LoginPassword,
                    None,
                    vec![format!("Username: {}", value)],
                );
            }
            TextInputAction::LoginPassword => {
                let Some(w) = self.login_wizard.take() else {
                    return;
                };
                let form = LoginForm {
                    username: w.username,
                    password: value,
                };
                match form.submit(&mut self.ctx) {
                    Ok(()) => {
                        self.go_home();
                        self.push_output(vec![format!("Logged in as {}", form.username.trim())]);
                    }
                    Err(errors) => self.push_error(format!("login: {}", errors.join("; "))),
                }
            }
            _ => self.push_error("unexpected login input".to_string()),
        }
    }

    pub(in crate::tui_shell) fn start_signup_wizard(&mut self) {
        if self.already_signed_in() {
            return;
        }
        self.signup_wizard = Some(SignupWizard::default());
        self.open_text_input_modal(
            "Sign Up",
            "username> ",
            TextInputAction::SignupUsername,
            None,
            vec!["Choose a username.".to_string()],
        );
    }

    pub(in crate::tui_shell) fn continue_signup_wizard(
        &mut self,
        action: TextInputAction,
        value: String,
    ) {
        let Some(w) = self.signup_wizard.as_mut() else {
            self.push_error("signup wizard not active".to_string());
            return;
        };

        let next = match action {
            TextInputAction::SignupUsername => {
                w.data.username = value;
                Some((TextInputAction::SignupPassword, "password> "))
            }
            TextInputAction::SignupPassword => {
                w.data.password = value;
                Some((TextInputAction::SignupFirstName, "first name> "))
            }
            TextInputAction::SignupFirstName => {
                w.data.first_name = value;
                Some((TextInputAction::SignupLastName, "last name> "))
            }
            TextInputAction::SignupLastName => {
                w.data.last_name = value;
                Some((TextInputAction::SignupEmail, "email> "))
            }
            TextInputAction::SignupEmail => {
                w.data.email = value;
                None
            }
            _ => {
                self.push_error("unexpected signup input".to_string());
                return;
            }
        };

        if let Some((action, prompt)) = next {
            let lines = vec![format!("Username: {}", w.data.username)];
            self.open_text_input_modal("Sign Up", prompt, action, None, lines);
            return;
        }

        let Some(w) = self.signup_wizard.take() else {
            return;
        };
        let form = SignupForm { data: w.data };
        match form.submit(&mut self.ctx) {
            Ok(()) => {
                self.go_home();
                self.push_output(vec![format!("Signed up as {}", form.data.username.trim())]);
            }
            Err(errors) => self.push_error(format!("signup: {}", errors.join("; "))),
        }
    }
}
