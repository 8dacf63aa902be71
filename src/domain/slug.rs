//! Slug validation and sanitization.
//!
//! Sanitization is used as a detector: the raw slug is trimmed and
//! lowercased, every character outside `[a-z0-9-_]` is stripped, and the
//! input is rejected if anything had to be stripped. A cleaned value is
//! never silently accepted in place of what the caller sent.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-_]").expect("slug charset regex is valid"));

/// Errors produced when a raw slug cannot be used for lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("slug is empty")]
    Empty,

    #[error("slug contains disallowed characters: {input:?}")]
    DisallowedCharacters { input: String },
}

/// A sanitized, lowercase slug containing only `[a-z0-9-_]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Validates and normalizes a raw slug.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError::Empty`] for empty or whitespace-only input and
    /// [`SlugError::DisallowedCharacters`] if the trimmed, lowercased input
    /// contains anything outside `[a-z0-9-_]`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(Slug::parse(" Tool ").unwrap().as_str(), "tool");
    /// assert!(Slug::parse("../etc").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, SlugError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SlugError::Empty);
        }

        let lowered = trimmed.to_lowercase();
        let sanitized = DISALLOWED_CHARS.replace_all(&lowered, "");

        if sanitized != lowered {
            return Err(SlugError::DisallowedCharacters {
                input: raw.to_string(),
            });
        }

        Ok(Self(lowered))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
