//! # Storage Layer
//!
//! Accounts persist as a single JSON blob in a key-value store, the way a
//! browser keeps form state in local storage.
//!
//! ## Pieces
//!
//! - [`backend::StorageBackend`]: the key-value contract (get, set, remove).
//! - [`fs_backend::FsBackend`]: production backend, one file per key.
//! - [`mem_backend::MemBackend`]: in-memory backend for tests.
//! - [`account_store::AccountStore`]: owns the account collection and
//!   maps it to and from the blob.
//!
//! ## Blob Format
//!
//! ```text
//! userAccounts = [
//!   {"id":1,"tags":[{"text":"work"}],"type":"Локальная","login":"alice","password":"pw"},
//!   {"id":2,"tags":[{"text":"vpn"}],"type":"LDAP","login":"bob","password":null}
//! ]
//! ```
//!
//! ## Failure Containment
//!
//! The store rewrites the blob after each structural change. A failing
//! write or an unreadable blob is logged and swallowed; callers keep an
//! in-memory collection that is either fully restored or untouched.

pub mod account_store;
pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
