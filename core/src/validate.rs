//! Brand name validation.
//!
//! Checks user-supplied names before any file-system work happens. A name is
//! valid iff it is non-empty and made only of ASCII letters, digits, hyphens
//! and underscores.
//!
//! # Examples
//!
//! ```
//! use logokit_core::*;
//!
//! let outcome = validate_names(["vercel", "bad name", "github"]);
//! assert_eq!(outcome.valid_names, vec!["vercel", "github"]);
//! assert_eq!(outcome.errors.len(), 1);
//! assert_eq!(outcome.errors[0].name, "bad name");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static BRAND_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("static regex must compile"));

/// Why a single name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameValidationError {
    /// The name is the empty string.
    #[error("Logo name cannot be empty")]
    Empty,
    /// The name contains a character outside `[A-Za-z0-9_-]`.
    #[error(
        "Logo name \"{0}\" is invalid: names can only contain alphanumeric characters, hyphens, or underscores"
    )]
    InvalidCharacters(String),
}

/// A rejected name paired with the rule it broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameError {
    /// The name exactly as supplied.
    pub name: String,
    pub error: NameValidationError,
}

/// Partition of a name list into accepted and rejected entries.
///
/// Both lists keep input order. Duplicates are validated independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValidation {
    pub valid_names: Vec<String>,
    pub errors: Vec<NameError>,
}

impl NameValidation {
    pub fn has_valid(&self) -> bool {
        !self.valid_names.is_empty()
    }
}

/// Validates a single brand name.
///
/// # Examples
///
/// ```
/// use logokit_core::{validate_name, NameValidationError};
///
/// assert!(validate_name("apple-music_wordmark").is_ok());
/// assert_eq!(validate_name(""), Err(NameValidationError::Empty));
/// assert!(matches!(
///     validate_name("../etc"),
///     Err(NameValidationError::InvalidCharacters(_))
/// ));
/// ```
pub fn validate_name(name: &str) -> Result<(), NameValidationError> {
    if name.is_empty() {
        return Err(NameValidationError::Empty);
    }
    if !BRAND_NAME_RE.is_match(name) {
        return Err(NameValidationError::InvalidCharacters(name.to_string()));
    }
    Ok(())
}

/// Validates every name, keeping valid ones and collecting errors for the rest.
///
/// Never fails and never touches the file system.
pub fn validate_names<I, S>(names: I) -> NameValidation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut outcome = NameValidation::default();

    for name in names {
        let name = name.as_ref();
        match validate_name(name) {
            Ok(()) => outcome.valid_names.push(name.to_string()),
            Err(error) => outcome.errors.push(NameError {
                name: name.to_string(),
                error,
            }),
        }
    }

    outcome
}
