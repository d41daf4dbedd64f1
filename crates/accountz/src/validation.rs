//! Account field validation.
//!
//! Rules, checked per field. Every failing field gets one error, so a blank
//! record reports all three problems at once:
//!
//! - **tags**: required, at most 50 characters (raw string), and must contain
//!   at least one tag once split on `;` and trimmed
//! - **login**: required, at most 100 characters
//! - **password**: required, at most 100 characters, local accounts only
//!
//! "Required" means not empty after trimming whitespace. Lengths count
//! characters, not bytes, and are measured on the untrimmed value.

use crate::model::{Account, AccountErrors, Field, FieldError};
use crate::tags::token_count;

pub const TAGS_MAX_LEN: usize = 50;
pub const LOGIN_MAX_LEN: usize = 100;
pub const PASSWORD_MAX_LEN: usize = 100;

/// Recomputes `account.errors` and returns true if the account is valid.
///
/// # Examples
/// ```
/// use accountz::{validate_account, Account};
///
/// let mut account = Account::new(1);
/// assert!(!validate_account(&mut account));
/// assert_eq!(account.errors.len(), 3);
///
/// account.tags = "a;b;c".into();
/// account.login = "user".into();
/// account.password = "pw".into();
/// assert!(validate_account(&mut account));
/// ```
pub fn validate_account(account: &mut Account) -> bool {
    let errors = check_account(account);
    let valid = errors.is_empty();
    account.errors = errors;
    valid
}

/// True if the last validation pass found errors. Does not revalidate.
pub fn has_errors(account: &Account) -> bool {
    !account.errors.is_empty()
}

/// Computes the errors for an account without storing them.
pub fn check_account(account: &Account) -> AccountErrors {
    AccountErrors {
        tags: check_tags(&account.tags),
        login: check_text(Field::Login, &account.login, LOGIN_MAX_LEN),
        password: if account.account_type.requires_password() {
            check_text(Field::Password, &account.password, PASSWORD_MAX_LEN)
        } else {
            None
        },
    }
}

fn check_tags(raw: &str) -> Option<FieldError> {
    if let Some(err) = check_text(Field::Tags, raw, TAGS_MAX_LEN) {
        return Some(err);
    }
    if token_count(raw) == 0 {
        return Some(FieldError::NoTags);
    }
    None
}

fn check_text(field: Field, value: &str, max_len: usize) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required(field))
    } else if value.chars().count() > max_len {
        Some(FieldError::MaxLength(max_len))
    } else {
        None
    }
}
