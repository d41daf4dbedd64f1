use crate::config::AccountzConfig;
use crate::store::account_store::AccountStore;
use crate::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
    pub config: AccountzConfig,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("data");
        let config = AccountzConfig {
            data_dir: Some(root.clone()),
            ..Default::default()
        };
        Self {
            _temp_dir: temp_dir,
            root,
            config,
        }
    }

    /// A fresh backend over the same directory.
    pub fn backend(&self) -> FsBackend {
        FsBackend::from_config(&self.config).expect("data_dir is set")
    }

    pub fn store(&self) -> AccountStore<FsBackend> {
        AccountStore::with_config(self.backend(), &self.config)
    }
}
