//! Per-project configuration persisted by the CLI.
//!
//! Stored as YAML in `.logokit.yml` at the project root. Every field is
//! optional; a missing file behaves like an empty one.
//!
//! # Example YAML
//!
//! ```yaml
//! output_dir: src/assets/logos
//! library_dir: /opt/logokit/logos
//! ```

use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// File name of the project config, relative to the project root.
pub const CONFIG_FILE_NAME: &str = ".logokit.yml";

/// Saved preferences for one project.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use logokit_store::ProjectConfig;
/// let config: ProjectConfig = serde_yaml::from_str("output_dir: public/logos").unwrap();
/// assert_eq!(config.output_dir, Some(PathBuf::from("public/logos")));
/// assert!(config.library_dir.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Custom destination directory, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Custom library directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_dir: Option<PathBuf>,
}

impl ProjectConfig {
    /// Location of the config file for `project_root`.
    pub fn file_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::StoreError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::StoreError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the default
    /// config.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(crate::StoreError::IoError(err)) if err.kind() == ErrorKind::NotFound => {
                debug!(config = %path.display(), "no project config, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::StoreError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::StoreError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    pub fn set_output_dir(&mut self, dir: impl Into<PathBuf>) {
        self.output_dir = Some(dir.into());
    }

    /// Removes the saved destination. Returns `true` if one was set.
    pub fn clear_output_dir(&mut self) -> bool {
        self.output_dir.take().is_some()
    }
}
