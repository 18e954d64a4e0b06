use crate::api::JobSearch;
use crate::context::UserContext;
use crate::model::{Job, User};

use super::{Card, LOADING, LoadState, job_card};

pub const NO_JOBS: &str = "No jobs found.";

#[derive(Clone, Debug)]
pub struct JobsList {
    pub search: JobSearch,
    pub state: LoadState<Vec<Job>>,
}

impl Default for JobsList {
    fn default() -> Self {
        Self {
            search: JobSearch::default(),
            state: LoadState::Loading,
        }
    }
}

impl JobsList {
    pub fn new(search: JobSearch) -> Self {
        Self {
            search,
            state: LoadState::Loading,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.search.title = title.into();
        self.state = LoadState::Loading;
    }

    pub fn set_min_salary(&mut self, min_salary: impl Into<String>) {
        self.search.min_salary = min_salary.into();
        self.state = LoadState::Loading;
    }

    pub fn set_has_equity(&mut self, has_equity: bool) {
        self.search.has_equity = has_equity;
        self.state = LoadState::Loading;
    }

    /// Invalid filters fail locally without a backend call.
    pub fn load(&mut self, ctx: &UserContext) {
        if let Err(msg) = self.search.validate() {
            self.state = LoadState::Failed(vec![msg]);
            return;
        }
        self.state = LoadState::from_result(ctx.client().list_jobs(&self.search));
    }

    pub fn jobs(&self) -> &[Job] {
        self.state.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cards(&self, user: Option<&User>) -> Vec<Card> {
        self.jobs().iter().map(|j| job_card(j, user)).collect()
    }

    pub fn lines(&self, user: Option<&User>) -> Vec<String> {
        match &self.state {
            LoadState::Loading => vec![LOADING.to_string()],
            LoadState::Failed(errors) => errors.clone(),
            LoadState::Loaded(items) if items.is_empty() => vec![NO_JOBS.to_string()],
            LoadState::Loaded(_) => {
                let mut out = Vec::new();
                for card in self.cards(user) {
                    if !out.is_empty() {
                        out.push(String::new());
                    }
                    out.extend(card.lines);
                }
                out
            }
        }
    }
}
