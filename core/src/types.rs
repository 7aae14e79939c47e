//! Shared option and result types for logo copy runs.
//!
//! These types sit between the batch processor and whatever presents its
//! output. They serialize with [`serde`] using camelCase field names so the
//! JSON output matches the `logoName` / `success` / `skipped` / `reason` /
//! `error` record shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// File extension of every asset in a logo store.
pub const SVG_EXTENSION: &str = "svg";

/// Reason attached to results for files that were already present.
pub const ALREADY_EXISTS_REASON: &str = "already exists";

/// A stylistic variant recognized for copy filtering.
///
/// Variants are encoded in asset file names by suffix convention
/// (`github_dark.svg`, `apple-music_wordmark.svg`). Matching is by substring
/// on the lowercased identifier, not strictly by suffix.
///
/// # Examples
///
/// ```
/// use logokit_core::Variant;
///
/// assert_eq!(Variant::Dark.marker(), "_dark");
/// assert!(Variant::Wordmark.is_marked_in("Apple-Music_WORDMARK"));
/// assert!(!Variant::Light.is_marked_in("github_dark"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Artwork for dark backgrounds.
    Dark,
    /// Artwork for light backgrounds.
    Light,
    /// Logotype including the brand name.
    Wordmark,
}

impl Variant {
    /// Every variant, in flag order.
    pub const ALL: [Variant; 3] = [Variant::Dark, Variant::Light, Variant::Wordmark];

    /// Lowercase name without the separator.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::Light => "light",
            Variant::Wordmark => "wordmark",
        }
    }

    /// Substring that marks an identifier as this variant.
    pub fn marker(self) -> &'static str {
        match self {
            Variant::Dark => "_dark",
            Variant::Light => "_light",
            Variant::Wordmark => "_wordmark",
        }
    }

    /// Returns `true` if `identifier` carries this variant's marker.
    pub fn is_marked_in(self, identifier: &str) -> bool {
        identifier.to_lowercase().contains(self.marker())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant flags requested for a copy run.
///
/// When no flag is set no variant filtering happens and every discovered
/// asset for a brand is copied.
///
/// # Examples
///
/// ```
/// use logokit_core::{ProcessOptions, Variant};
///
/// let options = ProcessOptions::default();
/// assert!(!options.filters_variants());
///
/// let options = ProcessOptions { dark: true, ..Default::default() };
/// assert_eq!(options.requested(), vec![Variant::Dark]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Copy `_dark` variants.
    #[serde(default)]
    pub dark: bool,
    /// Copy `_light` variants.
    #[serde(default)]
    pub light: bool,
    /// Copy `_wordmark` variants.
    #[serde(default)]
    pub wordmark: bool,
}

impl ProcessOptions {
    /// Returns `true` if `variant` was requested.
    pub fn wants(&self, variant: Variant) -> bool {
        match variant {
            Variant::Dark => self.dark,
            Variant::Light => self.light,
            Variant::Wordmark => self.wordmark,
        }
    }

    /// Requested variants in flag order.
    pub fn requested(&self) -> Vec<Variant> {
        Variant::ALL
            .into_iter()
            .filter(|variant| self.wants(*variant))
            .collect()
    }

    /// Returns `true` if at least one variant flag is set.
    pub fn filters_variants(&self) -> bool {
        self.dark || self.light || self.wordmark
    }
}

/// Outcome of processing one asset identifier, or one brand name that
/// failed before any identifier was resolved.
///
/// Results are created once by the batch processor and never mutated.
///
/// # Examples
///
/// ```
/// use logokit_core::OperationResult;
///
/// let copied = OperationResult::success("vercel");
/// assert!(copied.success && !copied.is_skipped());
///
/// let skipped = OperationResult::skipped("vercel", "already exists");
/// assert!(skipped.success && skipped.is_skipped());
///
/// let failed = OperationResult::failure("nope", "Logo \"nope\" not found in library");
/// assert!(!failed.success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    /// Resolved identifier, or the original name for pre-resolution failures.
    pub logo_name: String,
    /// Overall outcome.
    pub success: bool,
    /// `Some(true)` iff the destination file already existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
    /// Human-readable note, present on skips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human-readable error, present on failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OperationResult {
    /// A plain successful copy.
    pub fn success(logo_name: impl Into<String>) -> Self {
        Self {
            logo_name: logo_name.into(),
            success: true,
            skipped: None,
            reason: None,
            error: None,
        }
    }

    /// A success that did nothing because the target already existed.
    pub fn skipped(logo_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            logo_name: logo_name.into(),
            success: true,
            skipped: Some(true),
            reason: Some(reason.into()),
            error: None,
        }
    }

    /// A failed name or identifier.
    pub fn failure(logo_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            logo_name: logo_name.into(),
            success: false,
            skipped: None,
            reason: None,
            error: Some(error.into()),
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.unwrap_or(false)
    }
}

/// Aggregate outcome of a run, used to pick the process exit code.
///
/// # Examples
///
/// ```
/// use logokit_core::{ExitStatus, OperationResult};
///
/// let results = vec![
///     OperationResult::success("vercel"),
///     OperationResult::failure("nope", "not found"),
/// ];
/// assert_eq!(ExitStatus::from_results(&results), ExitStatus::PartialFailure);
/// assert_eq!(ExitStatus::PartialFailure.code(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every result succeeded (skips count as success).
    Success,
    /// Some results failed and some succeeded.
    PartialFailure,
    /// Every result failed, or there was nothing to do.
    AllFailed,
}

impl ExitStatus {
    /// Classifies a result list.
    ///
    /// An empty list counts as [`ExitStatus::AllFailed`]: a run that produced
    /// nothing did not do what it was asked.
    pub fn from_results(results: &[OperationResult]) -> Self {
        let failed = results.iter().filter(|r| !r.success).count();
        if results.is_empty() || failed == results.len() {
            ExitStatus::AllFailed
        } else if failed > 0 {
            ExitStatus::PartialFailure
        } else {
            ExitStatus::Success
        }
    }

    /// Process exit code.
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::AllFailed => 1,
            ExitStatus::PartialFailure => 2,
        }
    }
}
