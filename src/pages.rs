//! Headless page models: what each route fetches, holds and shows.
//!
//! Both the interactive shell and the subcommands drive these models; they
//! own no terminal code. Every `load` re-fetches from the backend.

mod cards;
mod company_detail;
mod company_list;
mod forms;
mod home;
mod jobs_list;

pub use self::cards::{Card, company_card, job_card};
pub use self::company_detail::CompanyDetail;
pub use self::company_list::{CompanyList, NO_COMPANIES};
pub use self::forms::{LoginForm, ProfileForm, SignupForm};
pub use self::home::home_lines;
pub use self::jobs_list::{JobsList, NO_JOBS};

pub const LOADING: &str = "Loading...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(Vec<String>),
}

impl<T> LoadState<T> {
    pub fn from_result(res: Result<T, crate::api::ApiError>) -> Self {
        match res {
            Ok(v) => LoadState::Loaded(v),
            Err(err) => LoadState::Failed(err.messages()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            LoadState::Failed(e) => e,
            _ => &[],
        }
    }
}
