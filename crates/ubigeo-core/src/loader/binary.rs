// crates/ubigeo-core/src/loader/binary.rs
use super::common_io::{self, CompressionMode};
use crate::error::Result;
use crate::model::UbigeoDb;
use bincode::Options;
use std::path::Path;

/// Upper bound on snapshot size, guards against corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl UbigeoDb {
    /// Reconstructs the database from an uncompressed bincode snapshot.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(options().deserialize(data)?)
    }

    /// Encodes the database as an uncompressed bincode snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options().serialize(self)?)
    }

    /// Loads a snapshot written by [`UbigeoDb::save_as`], gzipped or not.
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = common_io::read_all(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    /// Writes a snapshot, gzip-compressed when `compact` is enabled.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        common_io::write_with(path.as_ref(), self, CompressionMode::preferred(), |w, db| {
            Ok(options().serialize_into(w, db)?)
        })
    }
}
