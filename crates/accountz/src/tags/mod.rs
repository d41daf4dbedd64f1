//! Tag support for accountz.
//!
//! Tags categorize accounts. While editing, a user types them as one
//! semicolon-delimited string (`"work; vpn;prod"`). In storage they are kept
//! as a structured list of [`Tag`] objects (`[{"text":"work"}, ...]`).
//!
//! ## Two Representations
//!
//! - **Editing string**: whatever the user typed, spacing included.
//! - **Storage list**: trimmed, non-empty tokens in input order.
//!
//! [`parse_tags`] goes from the first to the second and [`stringify_tags`]
//! goes back. The trip is lossy with respect to spacing and empty segments:
//! the string that comes back is the canonical form, joined by `"; "`.
//!
//! Duplicates are preserved. `"a;a"` parses to two tags.

use serde::{Deserialize, Serialize};

/// Delimiter between tags in the editing string.
pub const TAG_DELIMITER: char = ';';

/// Separator used when rebuilding the editing string from stored tags.
pub const TAG_JOIN_SEPARATOR: &str = "; ";

/// A single trimmed, non-empty tag token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub text: String,
}

impl Tag {
    /// Wraps a token as a tag.
    ///
    /// Note: This does not trim or check for emptiness. Use [`parse_tags`]
    /// to build tags from user input.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Splits a raw editing string into tags.
///
/// Each segment between `;` is trimmed and empty segments are dropped.
/// Order is preserved and duplicates are kept.
///
/// # Examples
/// ```
/// use accountz::tags::{parse_tags, Tag};
///
/// assert_eq!(
///     parse_tags(" work ;; vpn;"),
///     vec![Tag::new("work"), Tag::new("vpn")]
/// );
/// assert!(parse_tags(";;;").is_empty());
/// ```
pub fn parse_tags(raw: &str) -> Vec<Tag> {
    tokens(raw).map(Tag::new).collect()
}

/// Joins tags back into an editing string with `"; "`.
///
/// # Examples
/// ```
/// use accountz::tags::{stringify_tags, Tag};
///
/// assert_eq!(stringify_tags(&[Tag::new("a"), Tag::new("b")]), "a; b");
/// assert_eq!(stringify_tags(&[]), "");
/// ```
pub fn stringify_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.text.as_str())
        .collect::<Vec<_>>()
        .join(TAG_JOIN_SEPARATOR)
}

/// Counts the tokens `parse_tags` would produce, without allocating tags.
pub(crate) fn token_count(raw: &str) -> usize {
    tokens(raw).count()
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(TAG_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
