use crate::model::SignupData;
use crate::pages::ProfileForm;

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct LoginWizard {
    pub(in crate::tui_shell) username: String,
}

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct SignupWizard {
    pub(in crate::tui_shell) data: SignupData,
}

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct ProfileWizard {
    pub(in crate::tui_shell) form: ProfileForm,
}

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct JobsFilterWizard {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) min_salary: String,
}
