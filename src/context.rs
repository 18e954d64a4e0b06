//! The signed-in user, shared explicitly with every page.
//!
//! A [`UserContext`] is created once per process and passed by reference to
//! whatever needs the current user. The signed-in state is an
//! `Option<Session>`: a [`Session`] is created by [`UserContext::login`],
//! [`UserContext::signup`] or [`UserContext::restore`] and dropped by
//! [`UserContext::logout`].

use crate::api::{ApiClient, ApiError};
use crate::model::{Credentials, ProfileUpdate, SignupData, User};
use crate::store::{SessionStore, TOKEN_KEY};

mod token;

pub use self::token::{TokenError, decode_token};

#[derive(Clone, Debug)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    AlreadyApplied,
}

pub struct UserContext {
    client: ApiClient,
    store: SessionStore,
    session: Option<Session>,
}

impl UserContext {
    pub fn new(client: ApiClient, store: SessionStore) -> Self {
        Self {
            client,
            store,
            session: None,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn has_applied(&self, job_id: u64) -> bool {
        self.current_user().is_some_and(|u| u.has_applied(job_id))
    }

    /// Replaces the user record of the active session; ignored when signed out.
    pub fn set_current_user(&mut self, user: User) {
        if let Some(session) = self.session.as_mut() {
            session.user = user;
        }
    }

    /// Rehydrates the session from the persisted token, if any.
    pub fn restore(&mut self) -> bool {
        let Some(token) = self.store.read::<String>(TOKEN_KEY) else {
            return false;
        };
        let claims = match decode_token(&token) {
            Ok(c) => c,
            Err(err) => {
                tracing::warn!(error = %err, "discarding undecodable stored token");
                self.store.remove(TOKEN_KEY);
                return false;
            }
        };

        self.client.set_token(token.clone());
        match self.client.get_user(&claims.username) {
            Ok(user) => {
                tracing::info!(username = %user.username, "restored session");
                self.session = Some(Session { token, user });
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not load user for stored token");
                self.client.clear_token();
                self.session = None;
                false
            }
        }
    }

    pub fn login(&mut self, creds: &Credentials) -> Result<&User, ApiError> {
        let token = self.client.login(creds).inspect_err(|err| {
            tracing::warn!(username = %creds.username, error = %err, "login failed");
        })?;
        self.install_token(token)
    }

    pub fn signup(&mut self, data: &SignupData) -> Result<&User, ApiError> {
        let missing = data.missing_fields();
        if !missing.is_empty() {
            return Err(ApiError::Invalid(
                missing
                    .into_iter()
                    .map(|f| format!("{} is required", f))
                    .collect(),
            ));
        }
        let token = self.client.signup(data).inspect_err(|err| {
            tracing::warn!(username = %data.username, error = %err, "signup failed");
        })?;
        self.install_token(token)
    }

    fn install_token(&mut self, token: String) -> Result<&User, ApiError> {
        self.store.write(TOKEN_KEY, &token);
        let claims =
            decode_token(&token).map_err(|err| ApiError::InvalidToken(err.to_string()))?;

        self.client.set_token(token.clone());
        let user = match self.client.get_user(&claims.username) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(username = %claims.username, error = %err, "loading user failed");
                // Keep the client consistent with whatever session is still active.
                match self.session.as_ref() {
                    Some(active) => self.client.set_token(active.token.clone()),
                    None => self.client.clear_token(),
                }
                return Err(err);
            }
        };
        let session = self.session.insert(Session { token, user });
        Ok(&session.user)
    }

    /// Drops the session and the persisted token. No backend call.
    pub fn logout(&mut self) {
        self.session = None;
        self.client.clear_token();
        self.store.remove(TOKEN_KEY);
    }

    /// Applies the current user to `job_id`.
    ///
    /// The application set only changes after the backend confirms.
    pub fn apply_to_job(&mut self, job_id: u64) -> Result<ApplyOutcome, ApiError> {
        let Some(session) = self.session.as_mut() else {
            return Err(ApiError::NotSignedIn);
        };
        if session.user.has_applied(job_id) {
            return Ok(ApplyOutcome::AlreadyApplied);
        }

        match self.client.apply_to_job(&session.user.username, job_id) {
            Ok(_) => {
                session.user.applications.insert(job_id);
                Ok(ApplyOutcome::Applied)
            }
            Err(err) => {
                tracing::warn!(job_id, error = %err, "applying to job failed");
                Err(err)
            }
        }
    }

    /// The backend's update response carries no applications, so the
    /// session's set is kept.
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> Result<&User, ApiError> {
        let (username, applications) = self
            .current_user()
            .map(|u| (u.username.clone(), u.applications.clone()))
            .ok_or(ApiError::NotSignedIn)?;
        let mut user = self.client.update_user(&username, update)?;
        user.applications = applications;
        self.set_current_user(user);
        self.current_user().ok_or(ApiError::NotSignedIn)
    }
}
