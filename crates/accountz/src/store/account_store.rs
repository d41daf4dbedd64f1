use super::backend::StorageBackend;
use crate::config::{AccountzConfig, DEFAULT_STORAGE_KEY};
use crate::error::{AccountzError, Result};
use crate::model::{Account, AccountType, PersistedAccount};
use crate::validation::validate_account;

/// The record store: owns the account collection and its persisted blob.
///
/// Ids are assigned from a counter that only moves forward, so an id is
/// never handed out twice in a session. Structural changes (add, remove,
/// edit through [`AccountStore::update_account`]) rewrite the blob.
pub struct AccountStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    storage_key: String,
    accounts: Vec<Account>,
    next_id: u64,
}

impl<B: StorageBackend> AccountStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_config(backend: B, config: &AccountzConfig) -> Self {
        Self::with_key(backend, &config.storage_key)
    }

    pub fn with_key(backend: B, storage_key: &str) -> Self {
        Self {
            backend,
            storage_key: storage_key.to_string(),
            accounts: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a store and loads whatever the backend holds.
    pub fn open(backend: B, config: &AccountzConfig) -> Self {
        let mut store = Self::with_config(backend, config);
        store.restore();
        store
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn has_accounts(&self) -> bool {
        !self.is_empty()
    }

    /// The id the next added account will get.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Mutable access for field edits. Does not persist.
    pub fn find_by_id_mut(&mut self, id: u64) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    /// Appends a blank local account and returns its id.
    pub fn add_account(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.accounts.push(Account::new(id));
        self.persist();
        id
    }

    /// Removes the account at `index`. Out-of-range is a no-op.
    pub fn remove_account(&mut self, index: usize) -> Option<Account> {
        if index >= self.accounts.len() {
            return None;
        }
        let removed = self.accounts.remove(index);
        self.persist();
        Some(removed)
    }

    /// Returns false if no account has this id.
    pub fn toggle_password_visibility(&mut self, id: u64) -> bool {
        match self.find_by_id_mut(id) {
            Some(account) => {
                account.toggle_password_visibility();
                true
            }
            None => false,
        }
    }

    /// Changes an account's type; see [`Account::change_type`].
    /// Returns false if no account has this id.
    pub fn set_type(&mut self, id: u64, new_type: AccountType) -> bool {
        match self.find_by_id_mut(id) {
            Some(account) => {
                account.change_type(new_type);
                true
            }
            None => false,
        }
    }

    /// Applies `edit` to the account with `id`, then persists.
    pub fn update_account<F>(&mut self, id: u64, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Account),
    {
        let account = self
            .find_by_id_mut(id)
            .ok_or(AccountzError::AccountNotFound(id))?;
        edit(account);
        self.persist();
        Ok(())
    }

    /// Validates every account (all of them, no short-circuit).
    /// Returns true if all are valid.
    pub fn validate_all(&mut self) -> bool {
        self.accounts
            .iter_mut()
            .fold(true, |all_valid, account| validate_account(account) && all_valid)
    }

    /// Writes the collection to storage. Failures are logged, never returned.
    pub fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::error!(key = %self.storage_key, error = %e, "Failed to save accounts");
        }
    }

    pub fn try_persist(&self) -> Result<()> {
        let stored: Vec<PersistedAccount> =
            self.accounts.iter().map(PersistedAccount::from).collect();
        let blob = serde_json::to_string(&stored)?;
        self.backend.set_item(&self.storage_key, &blob)?;
        tracing::debug!(key = %self.storage_key, count = stored.len(), "Saved accounts");
        Ok(())
    }

    /// Loads the collection from storage. Failures are logged and leave the
    /// collection as it was.
    pub fn restore(&mut self) {
        if let Err(e) = self.try_restore() {
            tracing::error!(key = %self.storage_key, error = %e, "Failed to load accounts");
        }
    }

    /// Loads the collection from storage.
    ///
    /// A missing blob leaves everything untouched. A blob that fails to parse
    /// is an error and nothing is replaced. Otherwise the collection is
    /// replaced wholesale and the id counter moves past the highest stored id.
    pub fn try_restore(&mut self) -> Result<()> {
        let Some(blob) = self.backend.get_item(&self.storage_key)? else {
            return Ok(());
        };
        let stored: Vec<PersistedAccount> = serde_json::from_str(&blob)?;
        let accounts: Vec<Account> = stored.into_iter().map(Account::from).collect();

        if let Some(max_id) = accounts.iter().map(|a| a.id).max() {
            self.next_id = self.next_id.max(max_id + 1);
        }
        tracing::debug!(key = %self.storage_key, count = accounts.len(), "Loaded accounts");
        self.accounts = accounts;
        Ok(())
    }

    /// Drops every account and removes the stored blob.
    pub fn clear(&mut self) {
        self.accounts.clear();
        if let Err(e) = self.backend.remove_item(&self.storage_key) {
            tracing::error!(key = %self.storage_key, error = %e, "Failed to remove stored accounts");
        }
    }
}
