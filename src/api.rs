//! Blocking client for the Jobly REST backend.
//!
//! One method per backend resource. Responses are unwrapped from their
//! envelope (`{"company": {...}}` becomes a [`Company`]) and every failure is
//! an [`ApiError`] whose [`ApiError::messages`] is a list of readable strings.

use anyhow::{Context, Result};
use reqwest::Method;

use crate::model::{Company, Credentials, Job, ProfileUpdate, SignupData, User};

mod error;
mod http_client;
mod search;

pub use self::error::ApiError;
pub use self::search::{CompanySearch, JobSearch};

pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // Calls wait as long as the backend takes; there is no client-side deadline.
        let client = reqwest::blocking::Client::builder()
            .user_agent("jobly")
            .timeout(None::<std::time::Duration>)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn list_companies(&self, search: &CompanySearch) -> Result<Vec<Company>, ApiError> {
        let req = self
            .request(Method::GET, &["companies"])?
            .query(&search.query_pairs());
        self.fetch(req, "companies", "list companies")
    }

    pub fn get_company(&self, handle: &str) -> Result<Company, ApiError> {
        let req = self.request(Method::GET, &["companies", handle])?;
        self.fetch(req, "company", "get company")
    }

    pub fn list_jobs(&self, search: &JobSearch) -> Result<Vec<Job>, ApiError> {
        let req = self
            .request(Method::GET, &["jobs"])?
            .query(&search.query_pairs());
        self.fetch(req, "jobs", "list jobs")
    }

    pub fn list_company_jobs(&self, handle: &str) -> Result<Vec<Job>, ApiError> {
        let req = self.request(Method::GET, &["companies", handle, "jobs"])?;
        self.fetch(req, "jobs", "list company jobs")
    }

    /// Exchanges credentials for a session token.
    pub fn login(&self, creds: &Credentials) -> Result<String, ApiError> {
        let req = self.request(Method::POST, &["auth", "token"])?.json(creds);
        self.fetch(req, "token", "login")
    }

    /// Registers a user and returns its session token.
    pub fn signup(&self, data: &SignupData) -> Result<String, ApiError> {
        let req = self.request(Method::POST, &["auth", "register"])?.json(data);
        self.fetch(req, "token", "signup")
    }

    pub fn get_user(&self, username: &str) -> Result<User, ApiError> {
        let req = self.request(Method::GET, &["users", username])?;
        self.fetch(req, "user", "get user")
    }

    pub fn update_user(&self, username: &str, update: &ProfileUpdate) -> Result<User, ApiError> {
        let req = self
            .request(Method::PATCH, &["users", username])?
            .json(update);
        self.fetch(req, "user", "update user")
    }

    /// Returns the job id the backend recorded the application for.
    pub fn apply_to_job(&self, username: &str, job_id: u64) -> Result<u64, ApiError> {
        let id = job_id.to_string();
        let req = self.request(Method::POST, &["users", username, "jobs", &id])?;
        self.fetch(req, "applied", "apply to job")
    }
}
