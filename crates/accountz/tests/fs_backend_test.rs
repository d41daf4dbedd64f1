use accountz::config::AccountzConfig;
use accountz::store::backend::StorageBackend;
use accountz::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("store"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Missing key
    assert_eq!(backend.get_item("userAccounts").unwrap(), None);

    // 2. Write then read
    backend.set_item("userAccounts", "[]").unwrap();
    assert_eq!(
        backend.get_item("userAccounts").unwrap(),
        Some("[]".to_string())
    );

    // 3. Remove
    backend.remove_item("userAccounts").unwrap();
    assert_eq!(backend.get_item("userAccounts").unwrap(), None);
}

#[test]
fn test_fs_backend_creates_root_on_write() {
    let (_dir, backend) = setup();
    assert!(!backend.root().exists());
    backend.set_item("k", "v").unwrap();
    assert!(backend.root().join("k.json").exists());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.set_item("userAccounts", "first").unwrap();
    backend.set_item("userAccounts", "second").unwrap();

    let on_disk = fs::read_to_string(backend.root().join("userAccounts.json")).unwrap();
    assert_eq!(on_disk, "second");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_remove_missing_is_ok() {
    let (_dir, backend) = setup();
    assert!(backend.remove_item("nothing").is_ok());
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();
    assert!(backend.set_item("../escape", "x").is_err());
    assert!(backend.set_item("a/b", "x").is_err());
    assert!(backend.get_item("").is_err());
    assert!(backend.get_item(".hidden").is_err());
}

#[test]
fn test_fs_backend_from_config() {
    let dir = TempDir::new().unwrap();
    let config = AccountzConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    let backend = FsBackend::from_config(&config).unwrap();
    assert_eq!(backend.root(), dir.path());
}
