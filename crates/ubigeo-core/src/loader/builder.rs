// crates/ubigeo-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::common_io;
use super::csv_source::read_records;
use super::{CACHE_SUFFIX, SNAPSHOT_FILE};
use crate::common::DbStats;
use crate::error::Result;
use crate::model::{convert, UbigeoDb};
use crate::traits::UbigeoSearch;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Outcome of an offline build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub stats: DbStats,
    /// Source lines dropped as malformed.
    pub skipped: usize,
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
}

// -----------------------------------------------------------------------------
// OFFLINE BUILD (CSV -> artifacts)
// -----------------------------------------------------------------------------

/// Reads the CSV at `source_path` and writes `ubigeo.json`,
/// `search-index.json` and the `ubigeo.bin` snapshot into `out_dir`.
pub fn build_artifacts(source_path: &Path, out_dir: &Path) -> Result<BuildReport> {
    tracing::info!(source = %source_path.display(), out = %out_dir.display(), "building artifacts");

    let (db, skipped) = UbigeoDb::build_from_reader(common_io::open_stream(source_path)?)?;

    let mut files = db.write_artifacts(out_dir)?;
    let snapshot = out_dir.join(SNAPSHOT_FILE);
    db.save_as(&snapshot)?;
    files.push(snapshot);

    let stats = db.stats();
    tracing::info!(
        departments = stats.departments,
        provinces = stats.provinces,
        districts = stats.districts,
        skipped,
        "artifacts written"
    );

    Ok(BuildReport {
        stats,
        skipped,
        files,
    })
}

// -----------------------------------------------------------------------------
// RUNTIME HELPERS
// -----------------------------------------------------------------------------

impl UbigeoDb {
    /// Parses CSV from any reader and builds both artifacts in one pass.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        Self::build_from_reader(reader).map(|(db, _)| db)
    }

    /// Builds straight from a CSV file, without touching any cache.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_csv_reader(common_io::open_stream(path.as_ref())?)
    }

    /// **Smart Load:** uses `<source>.bin` if it is fresh, otherwise builds
    /// from the CSV and refreshes the cache (best effort).
    pub(super) fn load_via_builder(path: &Path) -> Result<Self> {
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        if common_io::is_cache_fresh(path, &cache_path) {
            match Self::load_binary_file(&cache_path) {
                Ok(db) => return Ok(db),
                Err(e) => tracing::warn!(cache = %cache_path.display(), error = %e, "ignoring unreadable cache"),
            }
        }

        let db = Self::load_csv(path)?;

        if let Err(e) = db.save_as(&cache_path) {
            tracing::warn!(cache = %cache_path.display(), error = %e, "could not write cache");
        }

        Ok(db)
    }

    fn build_from_reader<R: Read>(reader: R) -> Result<(Self, usize)> {
        let report = read_records(reader)?;
        if report.skipped > 0 {
            tracing::info!(skipped = report.skipped, "malformed source lines skipped");
        }
        Ok((convert::from_raw(report.records), report.skipped))
    }
}
