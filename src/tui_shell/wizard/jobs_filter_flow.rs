use super::super::TextInputAction;
use super::super::views::JobsView;
use super::types::JobsFilterWizard;

impl super::super::App {
    pub(in crate::tui_shell) fn start_jobs_filter_wizard(&mut self) {
        let Some(v) = self.current_view::<JobsView>() else {
            self.push_error("not in jobs view".to_string());
            return;
        };
        let initial = v.page.search.title.clone();
        self.jobs_filter_wizard = Some(JobsFilterWizard::default());
        self.open_text_input_modal(
            "Search Jobs",
            "title> ",
            TextInputAction::JobsTitle,
            Some(initial),
            vec!["Empty answers clear a filter.".to_string()],
        );
    }

    pub(in crate::tui_shell) fn continue_jobs_filter_wizard(
        &mut self,
        action: TextInputAction,
        value: String,
    ) {
        let Some(w) = self.jobs_filter_wizard.as_mut() else {
            self.push_error("search wizard not active".to_string());
            return;
        };

        match action {
            TextInputAction::JobsTitle => {
                w.title = value;
                let initial = self
                    .current_view::<JobsView>()
                    .map(|v| v.page.search.min_salary.clone());
                self.open_text_input_modal(
                    "Search Jobs",
                    "min salary> ",
                    TextInputAction::JobsMinSalary,
                    initial,
                    Vec::new(),
                );
            }
            TextInputAction::JobsMinSalary => {
                w.min_salary = value;
                let initial = self
                    .current_view::<JobsView>()
                    .map(|v| if v.page.search.has_equity { "y" } else { "n" }.to_string());
                self.open_text_input_modal(
                    "Search Jobs",
                    "has equity (y/n)> ",
                    TextInputAction::JobsEquity,
                    initial,
                    Vec::new(),
                );
            }
            TextInputAction::JobsEquity => {
                let Some(w) = self.jobs_filter_wizard.take() else {
                    return;
                };
                let has_equity = matches!(value.to_lowercase().as_str(), "y" | "yes");
                self.update_jobs_filter(|v| {
                    v.page.set_title(w.title);
                    v.page.set_min_salary(w.min_salary);
                    v.page.set_has_equity(has_equity);
                });
            }
            _ => self.push_error("unexpected search input".to_string()),
        }
    }
}
