//! Durable key/value storage for the client, standing in for browser local
//! storage. Each key is one JSON document under `<state_dir>/storage/`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

mod config_file;

/// Storage key holding the serialized session token.
pub const TOKEN_KEY: &str = "jobly-token";

const STORAGE_DIR: &str = "storage";

#[derive(Clone, Debug)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn open(state_dir: &Path) -> Self {
        Self {
            root: state_dir.to_path_buf(),
        }
    }

    fn entry_path(&self, key: &str) -> Option<PathBuf> {
        if !valid_key(key) {
            return None;
        }
        Some(self.root.join(STORAGE_DIR).join(format!("{}.json", key)))
    }

    /// Missing or corrupt entries read as `None`; corrupt ones are purged.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let Some(path) = self.entry_path(key) else {
            tracing::warn!(key, "ignoring read of invalid storage key");
            return None;
        };
        if !path.exists() {
            return None;
        }

        let parsed = fs::read(&path)
            .context("read storage entry")
            .and_then(|bytes| serde_json::from_slice::<T>(&bytes).context("parse storage entry"));
        match parsed {
            Ok(v) => Some(v),
            Err(err) => {
                tracing::warn!(key, error = %format!("{:#}", err), "purging corrupt storage entry");
                if let Err(err) = fs::remove_file(&path) {
                    tracing::error!(key, error = %err, "failed to purge corrupt storage entry");
                }
                None
            }
        }
    }

    pub fn read_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.read(key).unwrap_or(default)
    }

    /// Failures are logged, never returned.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_write(key, value) {
            tracing::error!(key, error = %format!("{:#}", err), "failed to write storage entry");
        }
    }

    fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let path = self
            .entry_path(key)
            .with_context(|| format!("invalid storage key {:?}", key))?;
        let bytes = serde_json::to_vec(value).context("serialize storage entry")?;
        write_atomic(&path, &bytes)
    }

    /// Failures are logged, never returned.
    pub fn remove(&self, key: &str) {
        let Some(path) = self.entry_path(key) else {
            tracing::error!(key, "ignoring remove of invalid storage key");
            return;
        };
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::error!(key, error = %err, "failed to remove storage entry");
            }
        }
    }
}

fn valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        && key != "."
        && key != ".."
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}
