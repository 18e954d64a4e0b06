use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub is_admin: bool,

    /// Job ids this user has applied to. Absent or `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub applications: BTreeSet<u64>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeSet<u64>, D::Error> {
    Ok(Option::<BTreeSet<u64>>::deserialize(d)?.unwrap_or_default())
}

impl User {
    pub fn has_applied(&self, job_id: u64) -> bool {
        self.applications.contains(&job_id)
    }

    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Payload of the session token. Only `username` is required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub username: String,

    #[serde(default)]
    pub is_admin: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
}
