//! # Configuration
//!
//! Accountz configuration is managed by [`confique`], layering an optional
//! TOML file over compiled defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `userAccounts` | Key the account blob is stored under |
//! | `data_dir` | OS data dir | Directory used by the filesystem backend |
//!
//! The default data directory comes from the `directories` crate
//! (e.g. `~/.local/share/accountz` on Linux).

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AccountzError, Result};

pub const DEFAULT_STORAGE_KEY: &str = "userAccounts";

/// Configuration for accountz, stored in `accountz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountzConfig {
    /// Key the serialized account list is written under
    #[config(default = "userAccounts")]
    pub storage_key: String,

    /// Directory for stored blobs. When absent, the OS data directory is used.
    pub data_dir: Option<PathBuf>,
}

impl Default for AccountzConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
        }
    }
}

impl AccountzConfig {
    /// Loads configuration from `path` layered over the defaults.
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::builder()
            .file(path)
            .load()
            .map_err(|e| AccountzError::Config(e.to_string()))?;
        if config.storage_key.trim().is_empty() {
            return Err(AccountzError::Config(
                "storage_key cannot be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Resolves the data directory, falling back to the OS default.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        ProjectDirs::from("", "", "accountz")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| AccountzError::Config("no home directory available".to_string()))
    }
}
