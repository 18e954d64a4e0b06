use reqwest::StatusCode;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    #[error("request failed ({status}): {}", .messages.join("; "))]
    Status { status: u16, messages: Vec<String> },

    #[error("{0}")]
    Decode(String),

    #[error("invalid session token: {0}")]
    InvalidToken(String),

    #[error("not signed in")]
    NotSignedIn,

    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl ApiError {
    /// Human-readable messages; never empty.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Status { messages, .. } | ApiError::Invalid(messages)
                if !messages.is_empty() =>
            {
                messages.clone()
            }
            _ => vec![self.to_string()],
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Normalizes a backend error body to a message list.
///
/// Accepts `{"error": {"message": M}}` and `{"error": M}` where `M` is a
/// string or an array; anything else falls back to the status reason.
pub(super) fn error_messages(status: StatusCode, body: &str) -> Vec<String> {
    let fallback = || {
        vec![
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        ]
    };

    let Ok(v) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };
    let Some(err) = v.get("error") else {
        return fallback();
    };
    let msg = err.get("message").unwrap_or(err);
    let out: Vec<String> = match msg {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                other => other
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(|s| s.to_string()),
            })
            .collect(),
        _ => Vec::new(),
    };

    if out.is_empty() { fallback() } else { out }
}
