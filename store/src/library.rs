//! The bundled logo library: a read-only directory of `<identifier>.svg`
//! files.
//!
//! Provides [`LogoLibrary`] for listing, lookup and no-overwrite copying, and
//! [`LibraryBuilder`] for locating the library through a fallback chain.
//!
//! # Loading patterns
//!
//! ```no_run
//! use logokit_store::LogoLibrary;
//!
//! // Point at a known directory
//! let library = LogoLibrary::new("logos/");
//! let ids = library.list().unwrap();
//! assert!(ids.iter().any(|id| id == "vercel"));
//!
//! // Use the builder for a fallback chain
//! let library = LogoLibrary::builder()
//!     .from_env()
//!     .next_to_executable()
//!     .bundled()
//!     .build()
//!     .unwrap();
//! ```
//!
//! Nothing is cached: every call reflects the directory contents at call
//! time.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use logokit_core::SVG_EXTENSION;
use tracing::debug;

use crate::destination::Destination;
use crate::error::{Result, StoreError};

/// Environment variable naming an alternative library directory.
pub const LIBRARY_ENV_VAR: &str = "LOGOKIT_LIBRARY";

/// Directory name of the library shipped with the tool.
pub const LIBRARY_DIR_NAME: &str = "logos";

/// Path of `<identifier>.svg` inside `dir`.
pub(crate) fn svg_path(dir: &Path, identifier: &str) -> PathBuf {
    dir.join(format!("{identifier}.{SVG_EXTENSION}"))
}

/// Read-only collection of SVG logos keyed by file stem.
///
/// # Examples
///
/// ```no_run
/// use logokit_store::{Destination, LogoLibrary};
///
/// let library = LogoLibrary::new("logos/");
/// if library.contains("github_dark") {
///     let target = Destination::new("components/logos");
///     library.copy_to("github_dark", &target).unwrap();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LogoLibrary {
    root: PathBuf,
}

impl LogoLibrary {
    /// Returns a new [`LibraryBuilder`] for configuring a fallback chain.
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::new()
    }

    /// Creates a library rooted at `root`. The directory is not touched until
    /// the first call that needs it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists every asset identifier, extension stripped, sorted
    /// lexicographically.
    ///
    /// Only regular files with an `.svg` extension count. File names that are
    /// not valid UTF-8 are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LibraryUnreadable`] if the directory does not
    /// exist or cannot be listed.
    pub fn list(&self) -> Result<Vec<String>> {
        let unreadable = |source: io::Error| StoreError::LibraryUnreadable {
            path: self.root.clone(),
            source,
        };

        let mut identifiers = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(unreadable)? {
            let path = entry.map_err(unreadable)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SVG_EXTENSION) {
                continue;
            }
            if !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                identifiers.push(stem.to_string());
            }
        }

        identifiers.sort();
        debug!(
            library = %self.root.display(),
            count = identifiers.len(),
            "listed logo library"
        );
        Ok(identifiers)
    }

    /// Returns `true` if `<identifier>.svg` exists in the library.
    pub fn contains(&self, identifier: &str) -> bool {
        self.path_of(identifier).is_file()
    }

    /// Path the library would hold `identifier` at.
    pub fn path_of(&self, identifier: &str) -> PathBuf {
        svg_path(&self.root, identifier)
    }

    /// Copies `identifier` into `destination`, creating the destination
    /// directory if needed. Returns the written path.
    ///
    /// The target is opened with create-new semantics, so an existing file is
    /// never overwritten even if the caller skipped its own existence check.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the library has no such asset.
    /// - [`StoreError::AlreadyExists`] if the target file is already present.
    /// - [`StoreError::IoError`] for any other read or write failure.
    pub fn copy_to(&self, identifier: &str, destination: &Destination) -> Result<PathBuf> {
        let source = self.path_of(identifier);
        if !source.is_file() {
            return Err(StoreError::NotFound(identifier.to_string()));
        }

        destination.ensure_exists()?;
        let target = destination.path_of(identifier);

        let mut reader = File::open(&source)?;
        let mut writer = match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(StoreError::AlreadyExists(target));
            }
            Err(err) => return Err(err.into()),
        };

        if let Err(err) = io::copy(&mut reader, &mut writer) {
            drop(writer);
            // Don't leave a truncated logo behind for the next run to skip.
            let _ = fs::remove_file(&target);
            return Err(err.into());
        }

        debug!(
            source = %source.display(),
            target = %target.display(),
            "copied logo"
        );
        Ok(target)
    }
}

/// Builder for locating a [`LogoLibrary`] with a fallback chain.
///
/// Candidates are tried in the order they are added. The first one that is
/// an existing directory wins. If none exists,
/// [`StoreError::NoLibraryFound`] is returned.
///
/// # Example
///
/// ```no_run
/// use logokit_store::LogoLibrary;
///
/// let library = LogoLibrary::builder()
///     .from_dir("/opt/logokit/logos")
///     .bundled()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct LibraryBuilder {
    candidates: Vec<PathBuf>,
}

impl LibraryBuilder {
    /// Creates a new builder with no candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory as a candidate.
    pub fn from_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.candidates.push(path.into());
        self
    }

    /// Adds the directory named by [`LIBRARY_ENV_VAR`], if set and non-empty.
    pub fn from_env(self) -> Self {
        match std::env::var_os(LIBRARY_ENV_VAR) {
            Some(value) if !value.is_empty() => self.from_dir(PathBuf::from(value)),
            _ => self,
        }
    }

    /// Adds `logos/` next to the running executable.
    pub fn next_to_executable(self) -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|parent| parent.join(LIBRARY_DIR_NAME)));
        match dir {
            Some(dir) => self.from_dir(dir),
            None => self,
        }
    }

    /// Adds the `logos/` directory shipped at the workspace root.
    pub fn bundled(self) -> Self {
        self.from_dir(bundled_library_dir())
    }

    /// Returns the first candidate that is an existing directory.
    pub fn build(self) -> Result<LogoLibrary> {
        for candidate in &self.candidates {
            if candidate.is_dir() {
                debug!(library = %candidate.display(), "using logo library");
                return Ok(LogoLibrary::new(candidate.clone()));
            }
            debug!(candidate = %candidate.display(), "logo library candidate missing");
        }

        Err(StoreError::NoLibraryFound(self.candidates))
    }
}

/// The library directory that ships with the source tree.
pub fn bundled_library_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(LIBRARY_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn library_with(ids: &[&str]) -> (TempDir, LogoLibrary) {
        let dir = TempDir::new().unwrap();
        for id in ids {
            fs::write(svg_path(dir.path(), id), format!("<svg id=\"{id}\"/>")).unwrap();
        }
        let library = LogoLibrary::new(dir.path());
        (dir, library)
    }

    #[test]
    fn test_list_sorted_svg_only() {
        let (dir, library) = library_with(&["vercel", "github_dark", "github", "Neon"]);
        fs::write(dir.path().join("README.md"), "not a logo").unwrap();
        fs::write(dir.path().join("noext"), "x").unwrap();
        fs::create_dir(dir.path().join("folder.svg")).unwrap();

        let ids = library.list().unwrap();
        assert_eq!(ids, vec!["Neon", "github", "github_dark", "vercel"]);
    }

    #[test]
    fn test_list_missing_dir_is_unreadable() {
        let library = LogoLibrary::new("/nonexistent/logokit/library");
        let err = library.list().unwrap_err();
        assert!(matches!(err, StoreError::LibraryUnreadable { .. }));
        assert!(err.to_string().contains("/nonexistent/logokit/library"));
    }

    #[test]
    fn test_list_reflects_changes_between_calls() {
        let (dir, library) = library_with(&["vercel"]);
        assert_eq!(library.list().unwrap().len(), 1);
        fs::write(svg_path(dir.path(), "neon"), "<svg/>").unwrap();
        assert_eq!(library.list().unwrap(), vec!["neon", "vercel"]);
    }

    #[test]
    fn test_contains() {
        let (_dir, library) = library_with(&["vercel"]);
        assert!(library.contains("vercel"));
        assert!(!library.contains("neon"));
    }

    #[test]
    fn test_copy_creates_destination_and_copies_bytes() {
        let (_dir, library) = library_with(&["vercel"]);
        let out = TempDir::new().unwrap();
        let destination = Destination::new(out.path().join("components").join("logos"));

        let written = library.copy_to("vercel", &destination).unwrap();
        assert_eq!(written, destination.path_of("vercel"));
        assert_eq!(fs::read_to_string(written).unwrap(), "<svg id=\"vercel\"/>");
    }

    #[test]
    fn test_copy_missing_is_not_found() {
        let (_dir, library) = library_with(&[]);
        let out = TempDir::new().unwrap();
        let err = library
            .copy_to("ghost", &Destination::new(out.path()))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref name) if name == "ghost"));
        assert!(err.to_string().contains("not found in library"));
    }

    #[test]
    fn test_copy_refuses_overwrite() {
        let (_dir, library) = library_with(&["vercel"]);
        let out = TempDir::new().unwrap();
        let destination = Destination::new(out.path());
        fs::write(destination.path_of("vercel"), "local edits").unwrap();

        let err = library.copy_to("vercel", &destination).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
        assert_eq!(
            fs::read_to_string(destination.path_of("vercel")).unwrap(),
            "local edits"
        );
    }

    #[test]
    fn test_builder_first_existing_wins() {
        let (dir, _library) = library_with(&["vercel"]);
        let library = LogoLibrary::builder()
            .from_dir("/nonexistent/logokit/a")
            .from_dir(dir.path())
            .build()
            .unwrap();
        assert_eq!(library.root(), dir.path());
    }

    #[test]
    fn test_builder_all_missing() {
        let err = LogoLibrary::builder()
            .from_dir("/nonexistent/logokit/a")
            .from_dir("/nonexistent/logokit/b")
            .build()
            .unwrap_err();
        match err {
            StoreError::NoLibraryFound(candidates) => assert_eq!(candidates.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_builder_without_candidates() {
        assert!(LibraryBuilder::new().build().is_err());
    }
}
