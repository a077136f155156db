// crates/ubigeo-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// This module is only compiled with the 'json' feature.
// ---------------------------------------------------------------------------

use super::common_io::{self, CompressionMode};
use super::{HIERARCHY_FILE, SEARCH_INDEX_FILE};
use crate::error::Result;
use crate::model::{Hierarchy, SearchIndex, UbigeoDb};
use std::path::{Path, PathBuf};

impl UbigeoDb {
    /// Loads the `ubigeo.json` + `search-index.json` pair from `dir`.
    ///
    /// The two files are read independently; nothing checks that they were
    /// produced from the same source.
    pub fn load_artifacts(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let hierarchy: Hierarchy =
            serde_json::from_reader(common_io::open_stream(&dir.join(HIERARCHY_FILE))?)?;
        let index: SearchIndex =
            serde_json::from_reader(common_io::open_stream(&dir.join(SEARCH_INDEX_FILE))?)?;
        Ok(Self::from_parts(hierarchy, index))
    }

    /// Writes the JSON artifact pair into `dir` (created if missing) and
    /// returns the written paths.
    pub fn write_artifacts(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let hierarchy_path = dir.join(HIERARCHY_FILE);
        common_io::write_with(&hierarchy_path, &self.hierarchy, CompressionMode::None, |w, v| {
            Ok(serde_json::to_writer(w, v)?)
        })?;

        let index_path = dir.join(SEARCH_INDEX_FILE);
        common_io::write_with(&index_path, &self.index, CompressionMode::None, |w, v| {
            Ok(serde_json::to_writer(w, v)?)
        })?;

        Ok(vec![hierarchy_path, index_path])
    }
}
