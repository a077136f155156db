// crates/ubigeo-core/src/loader/csv_source.rs

// ---------------------------------------------------------------------------
// This module is only compiled with the 'builder' feature.
// ---------------------------------------------------------------------------

use crate::error::Result;
use crate::raw::DistrictRaw;
use std::io::Read;

/// Records parsed from a source, plus how many lines were dropped.
#[derive(Debug, Default)]
pub struct ReadReport {
    pub records: Vec<DistrictRaw>,
    pub skipped: usize,
}

/// Parses the INEI CSV export.
///
/// Best-effort: the header line is skipped, blank lines are ignored, and
/// lines that are short, undecodable or carry a truncated district code are
/// counted in [`ReadReport::skipped`] and otherwise dropped. Only I/O failures
/// abort the read.
///
/// Quotes carry no meaning in the export: every physical line is one record,
/// so a stray `"` can only damage the line it sits on.
pub fn read_records<R: Read>(reader: R) -> Result<ReadReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut report = ReadReport::default();

    for (line, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                tracing::debug!(record = line + 1, error = %e, "skipping undecodable line");
                report.skipped += 1;
                continue;
            }
        };

        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let fields: Vec<&str> = record.iter().collect();
        match DistrictRaw::from_fields(&fields) {
            Some(raw) => report.records.push(raw),
            None => {
                tracing::debug!(record = line + 1, fields = fields.len(), "skipping malformed line");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str =
        "IDDIST,NOMBDEP,NOMBPROV,NOMBDIST,NOM_CAPITAL (LEGAL),COD_ REG_NAT,REGION NATURAL\n";

    #[test]
    fn skips_header_blank_and_short_lines() {
        let src = format!(
            "{HEADER}150101,LIMA,LIMA,LIMA,LIMA,1,COSTA\n\n150102,LIMA,LIMA\r\n150131,LIMA,LIMA,SAN ISIDRO,SAN ISIDRO,1,COSTA\r\n"
        );
        let report = read_records(src.as_bytes()).unwrap();
        let codes: Vec<&str> = report.records.iter().map(|r| r.district_code.as_str()).collect();
        assert_eq!(codes, vec!["150101", "150131"]);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn extra_columns_fold_into_region_name() {
        let src = format!("{HEADER}010101,AMAZONAS,CHACHAPOYAS,CHACHAPOYAS,CHACHAPOYAS,2,SIERRA,NORTE\n");
        let report = read_records(src.as_bytes()).unwrap();
        assert_eq!(report.records[0].region_name, "SIERRA,NORTE");
    }

    #[test]
    fn stray_quote_stays_on_its_own_line() {
        let src = format!(
            "{HEADER}150101,LIMA,LIMA,\"LIMA,LIMA,1,COSTA\n150102,LIMA,LIMA,ANCON,ANCON,1,COSTA\n150103,LIMA,LIMA,ATE,VITARTE,1,COSTA\n"
        );
        let report = read_records(src.as_bytes()).unwrap();
        let codes: Vec<&str> = report.records.iter().map(|r| r.district_code.as_str()).collect();
        assert_eq!(codes, vec!["150101", "150102", "150103"]);
        assert_eq!(report.records[0].district_name, "\"LIMA");
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn stray_quote_on_a_short_line_is_skipped_alone() {
        let src = format!(
            "{HEADER}150101,\"LIMA,LIMA\n150102,LIMA,LIMA,ANCON,ANCON,1,COSTA\n"
        );
        let report = read_records(src.as_bytes()).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].district_code, "150102");
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn header_only_source_is_empty() {
        let report = read_records(HEADER.as_bytes()).unwrap();
        assert!(report.records.is_empty());
        assert_eq!(report.skipped, 0);
    }
}
