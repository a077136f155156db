// crates/ubigeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers:
//!
//! - CSV source (`builder`): the INEI export, parsed and built in one pass,
//! - JSON artifacts (`json`): `ubigeo.json` + `search-index.json`,
//! - binary snapshot: bincode, gzip-compressed when `compact` is on.

use crate::error::Result;
use crate::model::UbigeoDb;
use std::path::{Path, PathBuf};

mod binary;
mod common_io;

#[cfg(feature = "builder")]
pub mod builder;
#[cfg(feature = "builder")]
mod csv_source;
#[cfg(feature = "json")]
mod json;

#[cfg(feature = "builder")]
pub use csv_source::{read_records, ReadReport};

/// Hierarchy artifact file name.
pub const HIERARCHY_FILE: &str = "ubigeo.json";
/// Search index artifact file name.
pub const SEARCH_INDEX_FILE: &str = "search-index.json";
/// Binary snapshot file name inside an artifact directory.
pub const SNAPSHOT_FILE: &str = "ubigeo.bin";
/// Suffix of the snapshot cached next to a CSV source.
pub const CACHE_SUFFIX: &str = "bin";

impl UbigeoDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "ubigeo-sample.csv"
    }

    /// Loads the bundled dataset from [`UbigeoDb::default_data_dir`].
    ///
    /// Each call loads afresh; callers own the returned value and share it
    /// themselves (e.g. through an `Arc`).
    pub fn load() -> Result<Self> {
        Self::load_from_path(Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    /// **Standard Loader:** picks the parser from the shape of `path`.
    ///
    /// - a directory → the JSON artifact pair inside it,
    /// - `*.bin` / `*.bin.gz` → a binary snapshot,
    /// - anything else → a CSV source, through the snapshot cache.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if path.is_dir() {
            return Self::load_dir(path);
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if name.ends_with(".bin") || name.ends_with(".bin.gz") {
            return Self::load_binary_file(path);
        }

        Self::load_source(path)
    }

    #[cfg(feature = "json")]
    fn load_dir(dir: &Path) -> Result<Self> {
        Self::load_artifacts(dir)
    }

    #[cfg(not(feature = "json"))]
    fn load_dir(dir: &Path) -> Result<Self> {
        // Without JSON support the directory can still hold a snapshot.
        Self::load_binary_file(dir.join(SNAPSHOT_FILE))
    }

    #[cfg(feature = "builder")]
    fn load_source(path: &Path) -> Result<Self> {
        Self::load_via_builder(path)
    }

    #[cfg(not(feature = "builder"))]
    fn load_source(path: &Path) -> Result<Self> {
        Err(crate::UbigeoError::InvalidData(format!(
            "cannot read {}: CSV sources need the 'builder' feature",
            path.display()
        )))
    }
}
