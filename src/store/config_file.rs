use std::fs;

use anyhow::{Context, Result};

use crate::model::ConfigFile;

use super::{SessionStore, write_atomic};

impl SessionStore {
    pub fn read_config(&self) -> Result<ConfigFile> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(ConfigFile::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: ConfigFile = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ConfigFile) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }
}
