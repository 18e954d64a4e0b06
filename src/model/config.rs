use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// On-disk client settings (`<state_dir>/config.json`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: None,
        }
    }
}

/// Effective settings for one process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub state_dir: PathBuf,
}

impl ClientConfig {
    /// Explicit value (flag or env) wins, then the config file, then the default.
    pub fn resolve(explicit_base_url: Option<String>, file: &ConfigFile, state_dir: &Path) -> Self {
        let base_url = explicit_base_url
            .filter(|u| !u.trim().is_empty())
            .or_else(|| file.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            state_dir: state_dir.to_path_buf(),
        }
    }

    /// `explicit` (flag or `JOBLY_HOME`), else the platform data dir, else `./.jobly`.
    pub fn default_state_dir(explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| dirs::data_dir().map(|d| d.join("jobly")))
            .unwrap_or_else(|| PathBuf::from(".jobly"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_beats_file_and_default() {
        let file = ConfigFile {
            version: 1,
            base_url: Some("http://file:1".to_string()),
        };
        let dir = Path::new("/tmp/x");
        let cfg = ClientConfig::resolve(Some("http://flag:2/".to_string()), &file, dir);
        assert_eq!(cfg.base_url, "http://flag:2");

        let cfg = ClientConfig::resolve(None, &file, dir);
        assert_eq!(cfg.base_url, "http://file:1");

        let cfg = ClientConfig::resolve(Some("  ".to_string()), &ConfigFile::default(), dir);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }
}
