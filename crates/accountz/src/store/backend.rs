use crate::error::Result;

/// Abstract interface for raw blob storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while AccountStore handles the "what" (records, ids, blob format).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic to avoid a half-written blob.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
