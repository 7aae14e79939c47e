//! Destination directory resolution and membership checks.
//!
//! The destination is resolved once per run, before any copy, and passed by
//! reference into the batch processor.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::library::svg_path;

/// Destination used when the project has no `src/` directory.
pub const DEFAULT_DESTINATION: &str = "components/logos";

/// Destination used when the project root contains `src/`.
pub const SRC_DESTINATION: &str = "src/components/logos";

/// Describes how a [`Destination`] was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationSource {
    /// Passed explicitly by the caller (e.g. `--dir`).
    Explicit,
    /// Read from the project config file.
    Config,
    /// Detected from the project layout.
    Detected,
}

/// Picks the conventional logo directory for a project.
///
/// Returns `<root>/src/components/logos` when `<root>/src` is a directory,
/// otherwise `<root>/components/logos`.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use logokit_store::detect_destination;
///
/// let dir = detect_destination(Path::new("."));
/// assert!(dir.ends_with("components/logos"));
/// ```
pub fn detect_destination(project_root: &Path) -> PathBuf {
    if project_root.join("src").is_dir() {
        project_root.join(SRC_DESTINATION)
    } else {
        project_root.join(DEFAULT_DESTINATION)
    }
}

/// Writable directory that receives copied logos.
#[derive(Debug, Clone)]
pub struct Destination {
    dir: PathBuf,
    source: DestinationSource,
}

impl Destination {
    /// Wraps an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            source: DestinationSource::Explicit,
        }
    }

    /// Resolves the destination for a project.
    ///
    /// Precedence: `explicit`, then `config.output_dir`, then
    /// [`detect_destination`]. Relative paths are joined onto
    /// `project_root`.
    pub fn resolve(project_root: &Path, explicit: Option<&Path>, config: &ProjectConfig) -> Self {
        let (dir, source) = match (explicit, config.output_dir.as_deref()) {
            (Some(dir), _) => (project_root.join(dir), DestinationSource::Explicit),
            (None, Some(dir)) => (project_root.join(dir), DestinationSource::Config),
            (None, None) => (detect_destination(project_root), DestinationSource::Detected),
        };
        debug!(destination = %dir.display(), ?source, "resolved destination");
        Self { dir, source }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn source(&self) -> DestinationSource {
        self.source
    }

    /// Path `identifier` is written to.
    pub fn path_of(&self, identifier: &str) -> PathBuf {
        svg_path(&self.dir, identifier)
    }

    /// Returns `true` if a directory entry named `<identifier>.svg` exists,
    /// including a dangling symlink.
    pub fn contains(&self, identifier: &str) -> bool {
        fs::symlink_metadata(self.path_of(identifier)).is_ok()
    }

    /// Creates the directory and its parents. Succeeds if it already exists.
    pub fn ensure_exists(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }
}
