//! Core types and matching rules for copying SVG logos out of a library.
//!
//! This crate is pure logic with no file-system access:
//!
//! - [`validate_names`] / [`validate_name`] check user-supplied brand names
//!   against `[A-Za-z0-9_-]+`.
//! - [`resolve_variants`] maps a brand name to every library identifier that
//!   belongs to it (`github`, `github_dark`, `apple-music_wordmark`, ...).
//! - [`filter_by_variants`] narrows those identifiers to the requested
//!   [`ProcessOptions`] variants.
//! - [`group_by_brand`] groups identifiers for library listings.
//! - [`OperationResult`] and [`ExitStatus`] describe the outcome of a run.
//!
//! # Example
//!
//! ```
//! use logokit_core::*;
//!
//! let library = ["figma", "github", "github_dark", "github_wordmark", "vercel"];
//! let options = ProcessOptions { wordmark: true, ..Default::default() };
//!
//! let outcome = validate_names(["github", "vercel", "not valid"]);
//! assert_eq!(outcome.errors.len(), 1);
//!
//! let github = filter_by_variants(&resolve_variants("github", &library), &options);
//! assert_eq!(github, vec!["github_wordmark"]);
//!
//! // Brands without variant files keep their only asset.
//! let vercel = filter_by_variants(&resolve_variants("vercel", &library), &options);
//! assert_eq!(vercel, vec!["vercel"]);
//! ```

mod types;
mod validate;
mod variants;

pub use types::*;
pub use validate::{NameError, NameValidation, NameValidationError, validate_name, validate_names};
pub use variants::{
    BrandGroup, DISPLAY_SUFFIXES, display_brand, filter_by_variants, group_by_brand,
    resolve_variants,
};
