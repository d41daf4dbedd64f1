//! # Domain Model: Accounts and Their Stored Shape
//!
//! This module defines the editing-time record ([`Account`]), its validation
//! state ([`AccountErrors`]) and the shape it takes in storage
//! ([`PersistedAccount`]).
//!
//! ## Two Shapes
//!
//! ```text
//! Account  (in memory, edited by the UI)
//!   id, tags: "a; b", account_type, login, password, show_password, errors
//!
//! PersistedAccount  (JSON in the storage blob)
//!   {"id":1,"tags":[{"text":"a"},{"text":"b"}],"type":"LDAP","login":"bob","password":null}
//! ```
//!
//! `show_password` and `errors` are UI state and are never stored. A
//! directory (LDAP) account never stores a password: it is written as `null`.
//!
//! ## Legacy Data
//!
//! Older blobs stored `tags` as a plain string. [`PersistedTags`] accepts
//! either form and the string form passes through untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tags::{parse_tags, stringify_tags, Tag};

/// Where an account's credentials live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccountType {
    /// Credentials are stored locally, a password is required.
    #[default]
    #[serde(rename = "Локальная")]
    Local,
    /// Credentials are checked against an LDAP directory, no local password.
    #[serde(rename = "LDAP")]
    Directory,
}

impl AccountType {
    /// The label shown to users, which is also the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Local => "Локальная",
            AccountType::Directory => "LDAP",
        }
    }

    pub fn requires_password(&self) -> bool {
        matches!(self, AccountType::Local)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Tags,
    Login,
    Password,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Tags => "Метки",
            Field::Login => "Логин",
            Field::Password => "Пароль",
        }
    }
}

/// Why a field failed validation. `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Field is empty or whitespace only
    Required(Field),
    /// Field is longer than the given number of characters
    MaxLength(usize),
    /// Tags string is non-empty but contains no tag tokens
    NoTags,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(field) => {
                write!(f, "Поле \"{}\" обязательно для заполнения", field.label())
            }
            FieldError::MaxLength(max) => write!(f, "Максимум {} символов", max),
            FieldError::NoTags => write!(f, "Введите хотя бы одну метку"),
        }
    }
}

/// Per-field validation errors. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountErrors {
    pub tags: Option<FieldError>,
    pub login: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl AccountErrors {
    pub fn is_empty(&self) -> bool {
        self.tags.is_none() && self.login.is_none() && self.password.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Tags => self.tags.as_ref(),
            Field::Login => self.login.as_ref(),
            Field::Password => self.password.as_ref(),
        }
    }

    /// Human-readable message for a field, if it has an error.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Errors in field order (tags, login, password).
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        [
            (Field::Tags, self.tags.as_ref()),
            (Field::Login, self.login.as_ref()),
            (Field::Password, self.password.as_ref()),
        ]
        .into_iter()
        .filter_map(|(field, err)| err.map(|e| (field, e)))
    }
}

/// One account entry being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: u64,
    /// Raw, semicolon-delimited tag string as the user typed it
    pub tags: String,
    pub account_type: AccountType,
    pub login: String,
    pub password: String,
    /// UI-only: whether the password field is shown in clear text
    pub show_password: bool,
    /// Result of the last validation pass
    pub errors: AccountErrors,
}

impl Account {
    /// A blank local account.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            tags: String::new(),
            account_type: AccountType::Local,
            login: String::new(),
            password: String::new(),
            show_password: false,
            errors: AccountErrors::default(),
        }
    }

    /// Switches the account type.
    ///
    /// Moving to [`AccountType::Directory`] discards the password and hides
    /// the password field.
    pub fn change_type(&mut self, new_type: AccountType) {
        self.account_type = new_type;
        if new_type == AccountType::Directory {
            self.password.clear();
            self.show_password = false;
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }
}

/// Tags as found in storage: the current list form or the legacy string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersistedTags {
    List(Vec<Tag>),
    Raw(String),
}

impl PersistedTags {
    /// Resolves to the editing-string form.
    pub fn into_raw(self) -> String {
        match self {
            PersistedTags::List(tags) => stringify_tags(&tags),
            PersistedTags::Raw(raw) => raw,
        }
    }
}

/// The stored shape of an [`Account`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedAccount {
    pub id: u64,
    // Missing or null tags load as an empty string
    #[serde(default)]
    pub tags: Option<PersistedTags>,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl From<&Account> for PersistedAccount {
    fn from(account: &Account) -> Self {
        let password = match account.account_type {
            AccountType::Directory => None,
            AccountType::Local => Some(account.password.clone()),
        };
        Self {
            id: account.id,
            tags: Some(PersistedTags::List(parse_tags(&account.tags))),
            account_type: account.account_type,
            login: account.login.clone(),
            password,
        }
    }
}

impl From<PersistedAccount> for Account {
    fn from(stored: PersistedAccount) -> Self {
        Self {
            id: stored.id,
            tags: stored.tags.map(PersistedTags::into_raw).unwrap_or_default(),
            account_type: stored.account_type,
            login: stored.login,
            password: stored.password.unwrap_or_default(),
            show_password: false,
            errors: AccountErrors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_blank_local() {
        let account = Account::new(7);
        assert_eq!(account.id, 7);
        assert_eq!(account.account_type, AccountType::Local);
        assert!(account.tags.is_empty());
        assert!(account.login.is_empty());
        assert!(account.password.is_empty());
        assert!(!account.show_password);
        assert!(account.errors.is_empty());
    }

    #[test]
    fn test_change_to_directory_clears_password() {
        let mut account = Account::new(1);
        account.password = "secret".to_string();
        account.show_password = true;

        account.change_type(AccountType::Directory);

        assert_eq!(account.account_type, AccountType::Directory);
        assert_eq!(account.password, "");
        assert!(!account.show_password);
    }

    #[test]
    fn test_change_to_local_keeps_fields() {
        let mut account = Account::new(1);
        account.password = "secret".to_string();
        account.show_password = true;

        account.change_type(AccountType::Local);

        assert_eq!(account.password, "secret");
        assert!(account.show_password);
    }

    #[test]
    fn test_account_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&AccountType::Local).unwrap(),
            "\"Локальная\""
        );
        assert_eq!(
            serde_json::to_string(&AccountType::Directory).unwrap(),
            "\"LDAP\""
        );
        assert_eq!(AccountType::Directory.to_string(), "LDAP");
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(
            FieldError::Required(Field::Login).to_string(),
            "Поле \"Логин\" обязательно для заполнения"
        );
        assert_eq!(FieldError::MaxLength(50).to_string(), "Максимум 50 символов");
        assert_eq!(FieldError::NoTags.to_string(), "Введите хотя бы одну метку");
    }

    #[test]
    fn test_errors_iter_in_field_order() {
        let errors = AccountErrors {
            tags: None,
            login: Some(FieldError::MaxLength(100)),
            password: Some(FieldError::Required(Field::Password)),
        };
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Login, Field::Password]);
        assert_eq!(errors.len(), 2);
        assert!(!errors.is_empty());
        assert_eq!(errors.message(Field::Tags), None);
    }

    #[test]
    fn test_persist_local_account() {
        let mut account = Account::new(3);
        account.tags = " a ; b;".to_string();
        account.login = "alice".to_string();
        account.password = "pw".to_string();
        account.show_password = true;

        let stored = PersistedAccount::from(&account);
        let json = serde_json::to_string(&stored).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"tags":[{"text":"a"},{"text":"b"}],"type":"Локальная","login":"alice","password":"pw"}"#
        );
    }

    #[test]
    fn test_persist_directory_account_writes_null_password() {
        let mut account = Account::new(4);
        account.account_type = AccountType::Directory;
        account.password = "leftover".to_string();

        let stored = PersistedAccount::from(&account);
        assert_eq!(stored.password, None);
        let json = serde_json::to_string(&stored).unwrap();
        assert!(json.contains(r#""password":null"#));
    }

    #[test]
    fn test_restore_tag_list() {
        let stored: PersistedAccount = serde_json::from_str(
            r#"{"id":5,"tags":[{"text":"x"},{"text":"y"}],"type":"LDAP","login":"bob","password":null}"#,
        )
        .unwrap();
        let account = Account::from(stored);
        assert_eq!(account.tags, "x; y");
        assert_eq!(account.password, "");
        assert_eq!(account.account_type, AccountType::Directory);
    }

    #[test]
    fn test_restore_legacy_string_tags_pass_through() {
        let stored: PersistedAccount = serde_json::from_str(
            r#"{"id":1,"tags":"a ;b;;","type":"Локальная","login":"u","password":"p"}"#,
        )
        .unwrap();
        assert_eq!(stored.tags, Some(PersistedTags::Raw("a ;b;;".to_string())));
        assert_eq!(Account::from(stored).tags, "a ;b;;");
    }

    #[test]
    fn test_restore_missing_or_null_tags_is_empty() {
        let missing: PersistedAccount =
            serde_json::from_str(r#"{"id":1,"type":"LDAP","login":"u"}"#).unwrap();
        assert_eq!(Account::from(missing).tags, "");

        let null: PersistedAccount =
            serde_json::from_str(r#"{"id":2,"tags":null,"type":"LDAP","login":"u"}"#).unwrap();
        assert_eq!(Account::from(null).tags, "");
    }

    #[test]
    fn test_restore_rejects_unknown_type() {
        let result: Result<PersistedAccount, _> =
            serde_json::from_str(r#"{"id":1,"tags":[],"type":"Cloud","login":"u"}"#);
        assert!(result.is_err());
    }
}
