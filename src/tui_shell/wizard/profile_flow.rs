use crate::pages::ProfileForm;

use super::super::TextInputAction;
use super::super::views::ProfileView;
use super::types::ProfileWizard;

impl super::super::App {
    pub(in crate::tui_shell) fn start_profile_wizard(&mut self) {
        let Some(user) = self.ctx.current_user() else {
            self.push_error("not signed in".to_string());
            return;
        };
        let form = ProfileForm::from_user(user);
        let initial = form.first_name.clone();
        let username = user.username.clone();
        self.profile_wizard = Some(ProfileWizard { form });
        self.open_text_input_modal(
            "Edit Profile",
            "first name> ",
            TextInputAction::ProfileFirstName,
            Some(initial),
            vec![format!("Username: {}", username)],
        );
    }

    pub(in crate::tui_shell) fn continue_profile_wizard(
        &mut self,
        action: TextInputAction,
        value: String,
    ) {
        let Some(w) = self.profile_wizard.as_mut() else {
            self.push_error("profile wizard not active".to_string());
            return;
        };

        // Empty answers keep the current value.
        let next = match action {
            TextInputAction::ProfileFirstName => {
                if !value.is_empty() {
                    w.form.first_name = value;
                }
                Some((
                    TextInputAction::ProfileLastName,
                    "last name> ",
                    w.form.last_name.clone(),
                ))
            }
            TextInputAction::ProfileLastName => {
                if !value.is_empty() {
                    w.form.last_name = value;
                }
                Some((
                    TextInputAction::ProfileEmail,
                    "email> ",
                    w.form.email.clone(),
                ))
            }
            TextInputAction::ProfileEmail => {
                if !value.is_empty() {
                    w.form.email = value;
                }
                Some((TextInputAction::ProfilePassword, "password> ", String::new()))
            }
            TextInputAction::ProfilePassword => {
                w.form.password = value;
                None
            }
            _ => {
                self.push_error("unexpected profile input".to_string());
                return;
            }
        };

        if let Some((action, prompt, initial)) = next {
            let lines = if action == TextInputAction::ProfilePassword {
                vec!["Confirm with your password (empty to skip).".to_string()]
            } else {
                Vec::new()
            };
            self.open_text_input_modal("Edit Profile", prompt, action, Some(initial), lines);
            return;
        }

        let Some(mut w) = self.profile_wizard.take() else {
            return;
        };
        let saved = w.form.submit(&mut self.ctx);
        if let Some(v) = self.current_view_mut::<ProfileView>() {
            v.form = w.form;
            v.updated_at = super::super::app::now_ts();
        }
        if saved {
            self.push_output(vec!["Profile updated".to_string()]);
        } else {
            self.push_error("profile update failed (see form)".to_string());
        }
    }
}
