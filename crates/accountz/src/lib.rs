//! # Accountz Architecture
//!
//! Accountz is a **UI-agnostic form-state library** for a list of account
//! records. A form front-end (web view, TUI, anything) edits records through
//! the store and renders whatever validation state the library computes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (store/account_store.rs)                      │
//! │  - Owns the collection, assigns ids                         │
//! │  - Persists after mutations, restores at startup            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Validation + Tags (validation.rs, tags/)                   │
//! │  - Pure functions over `Account`                            │
//! │  - Tag string <-> tag list transform                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Backends (store/)                                  │
//! │  - StorageBackend trait: a key-value blob store             │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Validation and tag parsing never touch storage and never fail with an
//! `Err`. Persistence failures are contained by the store: they are logged
//! through `tracing` and the collection stays usable.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Account`, `AccountType`, `PersistedAccount`)
//! - [`validation`]: Field rules (`validate_account`, `has_errors`)
//! - [`tags`]: Tag parsing and serialization
//! - [`store`]: Storage abstraction and the account store
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod tags;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use model::{Account, AccountErrors, AccountType, FieldError};
pub use store::account_store::AccountStore;
pub use tags::{parse_tags, stringify_tags, Tag};
pub use validation::{has_errors, validate_account};
