#![allow(dead_code)]
//! Shared fixtures for the integration tests.

use once_cell::sync::Lazy;
use std::path::PathBuf;
use ubigeo_core::UbigeoDb;

pub const HEADER: &str =
    "IDDIST,NOMBDEP,NOMBPROV,NOMBDIST,NOM_CAPITAL (LEGAL),COD_ REG_NAT,REGION NATURAL\n";

pub fn sample_path() -> PathBuf {
    UbigeoDb::default_data_dir().join(UbigeoDb::default_dataset_filename())
}

/// The bundled sample, built once per test binary and never cached to disk.
pub static SAMPLE: Lazy<UbigeoDb> =
    Lazy::new(|| UbigeoDb::load_csv(sample_path()).expect("bundled sample must load"));

/// Builds a database from CSV body lines (header added here).
pub fn db_from_lines(lines: &[&str]) -> UbigeoDb {
    let mut src = String::from(HEADER);
    for line in lines {
        src.push_str(line);
        src.push('\n');
    }
    UbigeoDb::from_csv_reader(src.as_bytes()).expect("inline CSV must parse")
}
