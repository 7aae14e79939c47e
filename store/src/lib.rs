//! File-backed logo stores and batch copying for logokit.
//!
//! This crate owns everything that touches the file system: the read-only
//! [`LogoLibrary`], the writable [`Destination`], the per-project
//! [`ProjectConfig`], and [`process_batch`], which ties them together with
//! the matching rules from `logokit-core`.
//!
//! # Quick start
//!
//! ```no_run
//! use std::path::Path;
//! use logokit_core::ProcessOptions;
//! use logokit_store::{Destination, LogoLibrary, ProjectConfig, process_batch};
//!
//! let project = Path::new(".");
//! let config = ProjectConfig::load_or_default(ProjectConfig::file_path(project)).unwrap();
//!
//! let library = LogoLibrary::builder().from_env().bundled().build().unwrap();
//! let destination = Destination::resolve(project, None, &config);
//!
//! let results = process_batch(&["vercel"], &ProcessOptions::default(), &library, &destination);
//! assert_eq!(results.len(), 1);
//! ```

mod config;
mod destination;
mod error;
mod library;
mod processor;

pub use config::{CONFIG_FILE_NAME, ProjectConfig};
pub use destination::{
    DEFAULT_DESTINATION, Destination, DestinationSource, SRC_DESTINATION, detect_destination,
};
pub use error::{Result, StoreError};
pub use library::{
    LIBRARY_DIR_NAME, LIBRARY_ENV_VAR, LibraryBuilder, LogoLibrary, bundled_library_dir,
};
pub use processor::process_batch;
