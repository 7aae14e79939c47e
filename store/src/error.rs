//! Error types for logo store operations.
//!
//! Covers the failure modes of the file-backed stores: an unreadable
//! library, missing assets, refused overwrites, plain I/O and config parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading the library or writing logos.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The library directory is missing or cannot be listed.
    #[error("cannot read logo library at '{}': {source}", path.display())]
    LibraryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the configured library locations exists.
    #[error("no logo library found (searched: {})", format_candidates(.0))]
    NoLibraryFound(Vec<PathBuf>),

    /// No `<name>.svg` exists in the library.
    #[error("Logo \"{0}\" not found in library")]
    NotFound(String),

    /// The brand exists but none of its assets match the requested variants.
    #[error("Logo \"{name}\" has no {variants} variant in library")]
    NoMatchingVariants { name: String, variants: String },

    /// The destination already has `<name>.svg`; copies never overwrite.
    #[error("'{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// File I/O failure while copying.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Project config parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    if candidates.is_empty() {
        return "<none>".to_string();
    }
    candidates
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
