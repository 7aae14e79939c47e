//! Brand-to-asset variant matching.
//!
//! Logo files follow a naming convention: a base identifier (`github`) plus
//! optional variants separated by an underscore (`github_dark`,
//! `github_wordmark`). Hyphenated brands carry their variant after the
//! hyphenated stem (`apple-music_wordmark`). All comparisons are
//! case-insensitive, while identifiers are returned verbatim.
//!
//! Variant detection is substring-based, so a brand whose own name contains
//! `_dark`, `_light` or `_wordmark` is treated as a variant. That ambiguity is
//! part of the convention.
//!
//! # Examples
//!
//! ```
//! use logokit_core::*;
//!
//! let library = ["github", "github_dark", "github_light", "neon"];
//! let found = resolve_variants("GitHub", &library);
//! assert_eq!(found, vec!["github", "github_dark", "github_light"]);
//!
//! let options = ProcessOptions { dark: true, ..Default::default() };
//! assert_eq!(filter_by_variants(&found, &options), vec!["github_dark"]);
//! ```

use std::collections::HashMap;

use crate::types::{ProcessOptions, Variant};

/// Suffixes stripped when grouping identifiers by brand for display.
///
/// `_icon` and `_logo` only affect grouping, never copy filtering.
pub const DISPLAY_SUFFIXES: &[&str] = &["_dark", "_light", "_wordmark", "_icon", "_logo"];

/// Returns `true` if `candidate` is a variant of `base` under the naming
/// convention. Both arguments must already be lowercased.
fn is_variant_of(base: &str, candidate: &str) -> bool {
    if let Some(rest) = candidate.strip_prefix(base) {
        if rest.starts_with('_') {
            return true;
        }
        if let Some(after_hyphen) = rest.strip_prefix('-') {
            return after_hyphen.contains('_');
        }
    }
    false
}

/// Returns every identifier in `available` that belongs to `brand`.
///
/// An identifier matches when, ignoring case, it equals `brand`, starts with
/// `brand_`, or starts with `brand-` and has an underscore somewhere after
/// that prefix. Output keeps the order of `available`.
///
/// An empty result means no asset file names the brand. Callers fall back
/// to a literal existence check.
pub fn resolve_variants<S: AsRef<str>>(brand: &str, available: &[S]) -> Vec<String> {
    let brand = brand.to_lowercase();

    available
        .iter()
        .filter_map(|identifier| {
            let identifier: &str = identifier.as_ref();
            let lower = identifier.to_lowercase();
            (lower == brand || is_variant_of(&brand, &lower)).then(|| identifier.to_string())
        })
        .collect()
}

/// Narrows `candidates` to the variants requested in `options`.
///
/// - No flag set: `candidates` is returned unchanged.
/// - A candidate carrying a requested marker is kept.
/// - A candidate carrying only unrequested markers is dropped.
/// - A base candidate (no marker at all) is kept only when no other
///   candidate in the list is one of its variants, so brands without
///   variant files still yield their single asset.
///
/// # Examples
///
/// ```
/// use logokit_core::{filter_by_variants, ProcessOptions};
///
/// let dark = ProcessOptions { dark: true, ..Default::default() };
/// assert_eq!(filter_by_variants(&["vercel", "neon"], &dark), vec!["vercel", "neon"]);
/// ```
pub fn filter_by_variants<S: AsRef<str>>(
    candidates: &[S],
    options: &ProcessOptions,
) -> Vec<String> {
    if !options.filters_variants() {
        return candidates.iter().map(|c| c.as_ref().to_string()).collect();
    }

    let lowered: Vec<String> = candidates
        .iter()
        .map(|c| c.as_ref().to_lowercase())
        .collect();

    candidates
        .iter()
        .zip(&lowered)
        .enumerate()
        .filter(|(index, (_, lower))| {
            let markers: Vec<Variant> = Variant::ALL
                .into_iter()
                .filter(|variant| lower.contains(variant.marker()))
                .collect();

            if markers.iter().any(|variant| options.wants(*variant)) {
                return true;
            }
            if !markers.is_empty() {
                return false;
            }

            !lowered
                .iter()
                .enumerate()
                .any(|(other, sibling)| other != *index && is_variant_of(lower, sibling))
        })
        .map(|(_, (candidate, _))| candidate.as_ref().to_string())
        .collect()
}

/// Identifiers that share a display brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandGroup {
    /// Brand stem as first seen, with display suffixes removed.
    pub brand: String,
    /// Every identifier in the group, in input order.
    pub identifiers: Vec<String>,
}

/// Strips trailing [`DISPLAY_SUFFIXES`] (repeatedly, case-insensitively).
///
/// # Examples
///
/// ```
/// use logokit_core::display_brand;
///
/// assert_eq!(display_brand("github_wordmark_dark"), "github");
/// assert_eq!(display_brand("Apple-Music_Icon"), "Apple-Music");
/// assert_eq!(display_brand("vercel"), "vercel");
/// ```
pub fn display_brand(identifier: &str) -> &str {
    let mut stem = identifier;

    'strip: loop {
        for suffix in DISPLAY_SUFFIXES {
            if stem.len() <= suffix.len() {
                continue;
            }
            let split = stem.len() - suffix.len();
            let Some(tail) = stem.get(split..) else {
                continue;
            };
            if tail.eq_ignore_ascii_case(suffix) {
                stem = &stem[..split];
                continue 'strip;
            }
        }
        return stem;
    }
}

/// Groups identifiers by [`display_brand`], in order of first appearance.
pub fn group_by_brand<S: AsRef<str>>(identifiers: &[S]) -> Vec<BrandGroup> {
    let mut groups: Vec<BrandGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for identifier in identifiers {
        let identifier: &str = identifier.as_ref();
        let brand = display_brand(identifier);
        let key = brand.to_lowercase();
        match index_by_key.get(&key) {
            Some(&index) => groups[index].identifiers.push(identifier.to_string()),
            None => {
                index_by_key.insert(key, groups.len());
                groups.push(BrandGroup {
                    brand: brand.to_string(),
                    identifiers: vec![identifier.to_string()],
                });
            }
        }
    }

    groups
}
