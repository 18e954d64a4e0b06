use super::*;

impl App {
    /// Enter on an empty input line.
    pub(super) fn run_default_action(&mut self) {
        match self.mode() {
            UiMode::Home => {
                self.push_output(vec!["Type `help` for commands.".to_string()]);
            }
            UiMode::Companies => {
                let handle = self
                    .current_view::<CompaniesView>()
                    .and_then(|v| v.selected_handle());
                match handle {
                    Some(h) => self.navigate(Route::Company(h)),
                    None => self.push_error("no company selected".to_string()),
                }
            }
            UiMode::Company | UiMode::Jobs => self.apply_selected(),
            UiMode::Login => self.start_login_wizard(),
            UiMode::Signup => self.start_signup_wizard(),
            UiMode::Profile => self.start_profile_wizard(),
        }
    }

    fn selected_job_id(&self) -> Option<u64> {
        self.current_view::<JobsView>()
            .and_then(|v| v.selected_job_id())
            .or_else(|| {
                self.current_view::<CompanyView>()
                    .and_then(|v| v.selected_job_id())
            })
    }

    /// Applies to the selected job. The card marker follows the user record,
    /// so nothing else needs refreshing.
    pub(super) fn apply_selected(&mut self) {
        let Some(job_id) = self.selected_job_id() else {
            self.push_error("no job selected".to_string());
            return;
        };
        match self.ctx.apply_to_job(job_id) {
            Ok(ApplyOutcome::Applied) => {
                self.push_output(vec![format!("Applied to job {}", job_id)]);
            }
            Ok(ApplyOutcome::AlreadyApplied) => {
                self.push_output(vec![format!("Already applied to job {}", job_id)]);
            }
            Err(err) => {
                self.push_error(format!("apply: {}", err.messages().join("; ")));
            }
        }
    }
}
