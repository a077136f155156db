// crates/ubigeo-core/src/loader/common_io.rs
use crate::error::{Result, UbigeoError};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the `compact` feature is on.
    pub fn preferred() -> Self {
        if cfg!(feature = "compact") {
            Self::Gzip
        } else {
            Self::None
        }
    }
}

/// A missing file is reported as [`UbigeoError::NotFound`]; any other open
/// failure stays an [`UbigeoError::Io`].
pub fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            UbigeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        }
        _ => UbigeoError::Io(e),
    })
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder for `*.gz`.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let reader = BufReader::new(open_file(path)?);
    let gz = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    if !gz {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(UbigeoError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

/// Reads a whole file, transparently inflating gzip content (detected by
/// its magic bytes, not the file name).
pub fn read_all(path: &Path) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    open_file(path)?.read_to_end(&mut raw)?;

    if !raw.starts_with(&GZIP_MAGIC) {
        return Ok(raw);
    }

    #[cfg(feature = "compact")]
    {
        let mut out = Vec::new();
        GzDecoder::new(raw.as_slice()).read_to_end(&mut out)?;
        Ok(out)
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(UbigeoError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

/// `<source>.<suffix>`, next to the source file.
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{suffix}"))
}

/// A cache is fresh when it exists and is not older than its source.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => true,
    }
}

/// Serializes any value with `encode` into `path`, optionally gzipped.
pub fn write_with<T, F>(path: &Path, value: &T, compression: CompressionMode, encode: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: Fn(&mut dyn Write, &T) -> Result<()>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                encode(&mut encoder, value)?;
                encoder.finish()?.flush()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(UbigeoError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            encode(&mut writer, value)?;
            writer.flush()?;
        }
    }
    Ok(())
}
