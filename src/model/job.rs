use serde::{Deserialize, Serialize};

/// A job posting as the backend returns it.
///
/// Whether the current user applied is answered by
/// [`crate::model::User::has_applied`] at render time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: u64,
    pub title: String,

    #[serde(default)]
    pub salary: Option<u64>,

    /// Decimal string such as `"0.05"`.
    #[serde(default)]
    pub equity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_handle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}
