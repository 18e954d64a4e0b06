use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::error_messages;
use super::*;

impl ApiClient {
    pub(super) fn auth(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    pub(super) fn url(&self, segments: &[&str]) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|err| {
            ApiError::Invalid(vec![format!("invalid base url {}: {}", self.base_url, err)])
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::Invalid(vec![format!("invalid base url {}", self.base_url)])
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(super) fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.url(segments)?;
        let mut req = self.client.request(method, url);
        if let Some(auth) = self.auth() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        Ok(req)
    }

    pub(super) fn ensure_ok(&self, resp: Response, label: &str) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        let messages = error_messages(status, &body);
        tracing::warn!(label, status = status.as_u16(), ?messages, "backend rejected request");
        Err(ApiError::Status {
            status: status.as_u16(),
            messages,
        })
    }

    /// Sends `req` and returns the `field` member of the response envelope.
    pub(super) fn fetch<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        field: &str,
        label: &str,
    ) -> Result<T, ApiError> {
        let resp = req.send().map_err(|err| {
            tracing::warn!(label, error = %err, "request failed");
            ApiError::Transport(format!("{}: {}", label, err))
        })?;
        let resp = self.ensure_ok(resp, label)?;
        let body: Value = resp
            .json()
            .map_err(|err| ApiError::Decode(format!("parse {} response: {}", label, err)))?;
        unwrap_envelope(body, field)
            .map_err(|err| ApiError::Decode(format!("parse {} response: {}", label, err)))
    }
}

fn unwrap_envelope<T: DeserializeOwned>(mut body: Value, field: &str) -> Result<T, String> {
    let inner = body
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| format!("missing `{}` field", field))?;
    serde_json::from_value(inner).map_err(|err| err.to_string())
}
