//! Best-effort batch copying of logos by brand name.
//!
//! Each brand name is resolved against the library, narrowed to the requested
//! variants and copied into the destination. Failures are isolated to the
//! smallest unit that still makes sense: one identifier, or one brand name.
//! A batch call never returns an error.

use logokit_core::{
    ALREADY_EXISTS_REASON, OperationResult, ProcessOptions, filter_by_variants, resolve_variants,
};
use tracing::{debug, info, warn};

use crate::destination::Destination;
use crate::error::{Result, StoreError};
use crate::library::LogoLibrary;

/// Copies every brand in `names` into `destination`, in order.
///
/// Results keep encounter order: by name, then by identifier within a name.
///
/// # Examples
///
/// ```no_run
/// use logokit_core::ProcessOptions;
/// use logokit_store::{Destination, LogoLibrary, process_batch};
///
/// let library = LogoLibrary::new("logos/");
/// let destination = Destination::new("components/logos");
/// let options = ProcessOptions { dark: true, ..Default::default() };
///
/// for result in process_batch(&["github", "vercel"], &options, &library, &destination) {
///     println!("{}: {}", result.logo_name, result.success);
/// }
/// ```
pub fn process_batch<S: AsRef<str>>(
    names: &[S],
    options: &ProcessOptions,
    library: &LogoLibrary,
    destination: &Destination,
) -> Vec<OperationResult> {
    let mut results = Vec::new();

    for name in names {
        let name: &str = name.as_ref();
        match process_name(name, options, library, destination) {
            Ok(mut name_results) => results.append(&mut name_results),
            Err(err) => {
                warn!(brand = name, error = %err, "logo failed");
                results.push(OperationResult::failure(name, err.to_string()));
            }
        }
    }

    results
}

/// Resolves, filters and copies one brand name.
///
/// Any error returned here becomes a single failure result for `name`.
fn process_name(
    name: &str,
    options: &ProcessOptions,
    library: &LogoLibrary,
    destination: &Destination,
) -> Result<Vec<OperationResult>> {
    let available = library.list()?;
    let mut identifiers = resolve_variants(name, &available);

    if identifiers.is_empty() {
        if !library.contains(name) {
            return Err(StoreError::NotFound(name.to_string()));
        }
        identifiers.push(name.to_string());
    }
    debug!(brand = name, ?identifiers, "resolved variants");

    let selected = filter_by_variants(&identifiers, options);
    if selected.is_empty() {
        return Err(StoreError::NoMatchingVariants {
            name: name.to_string(),
            variants: describe_variants(options),
        });
    }

    let mut results = Vec::with_capacity(selected.len());
    for identifier in selected {
        if destination.contains(&identifier) {
            info!(logo = %identifier, "skipping, already exists");
            results.push(OperationResult::skipped(identifier, ALREADY_EXISTS_REASON));
            continue;
        }

        match library.copy_to(&identifier, destination) {
            Ok(path) => {
                info!(logo = %identifier, path = %path.display(), "added logo");
                results.push(OperationResult::success(identifier));
            }
            Err(err) => {
                warn!(logo = %identifier, error = %err, "copy failed");
                results.push(OperationResult::failure(identifier, err.to_string()));
            }
        }
    }

    Ok(results)
}

/// `"dark"`, `"dark or light"`, `"dark, light or wordmark"`.
fn describe_variants(options: &ProcessOptions) -> String {
    let names: Vec<&str> = options.requested().into_iter().map(|v| v.as_str()).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}
