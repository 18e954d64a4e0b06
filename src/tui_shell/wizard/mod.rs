mod auth_flow;
mod jobs_filter_flow;
mod profile_flow;
mod types;

pub(super) use self::types::{JobsFilterWizard, LoginWizard, ProfileWizard, SignupWizard};
