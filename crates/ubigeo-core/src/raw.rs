// crates/ubigeo-core/src/raw.rs

//! Raw source records, one per CSV line.
//!
//! Column layout of the INEI export:
//! `IDDIST,NOMBDEP,NOMBPROV,NOMBDIST,NOM_CAPITAL (LEGAL),COD_ REG_NAT,REGION NATURAL`

/// Minimum number of columns for a usable line.
pub const MIN_FIELDS: usize = 7;

/// A single district row as it comes from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictRaw {
    pub district_code: String,
    pub department_name: String,
    pub province_name: String,
    pub district_name: String,
    pub capital: String,
    pub region_code: Option<u32>,
    pub region_name: String,
}

impl DistrictRaw {
    /// Builds a record from already-split fields.
    ///
    /// Returns `None` for malformed lines: fewer than [`MIN_FIELDS`] columns,
    /// or a district code too short to encode department and province.
    /// Columns past the seventh belong to the region name and are re-joined.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        if fields.len() < MIN_FIELDS {
            return None;
        }
        let district_code = fields[0].as_ref();
        if district_code.chars().count() < 6 {
            return None;
        }
        let region_parts: Vec<&str> = fields[6..].iter().map(|f| f.as_ref()).collect();
        let region_name = region_parts.join(",").trim().to_owned();

        Some(Self {
            district_code: district_code.to_owned(),
            department_name: fields[1].as_ref().to_owned(),
            province_name: fields[2].as_ref().to_owned(),
            district_name: fields[3].as_ref().to_owned(),
            capital: fields[4].as_ref().to_owned(),
            region_code: parse_leading_int(fields[5].as_ref()),
            region_name,
        })
    }

    /// First two characters of the district code.
    pub fn department_code(&self) -> &str {
        prefix(&self.district_code, 2)
    }

    /// First four characters of the district code.
    pub fn province_code(&self) -> &str {
        prefix(&self.district_code, 4)
    }
}

/// Character-safe prefix of at most `n` chars.
pub(crate) fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Leading-digits integer parse: `" 2 "` → 2, `"+4"` → 4, `"3x"` → 3, `"x"` → None.
pub(crate) fn parse_leading_int<T: std::str::FromStr>(s: &str) -> Option<T> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_full_line() {
        let raw = DistrictRaw::from_fields(&[
            "150131", "LIMA", "LIMA", "SAN ISIDRO", "SAN ISIDRO", "1", "COSTA",
        ])
        .unwrap();
        assert_eq!(raw.department_code(), "15");
        assert_eq!(raw.province_code(), "1501");
        assert_eq!(raw.region_code, Some(1));
        assert_eq!(raw.region_name, "COSTA");
    }

    #[test]
    fn rejoins_extra_region_columns() {
        let raw = DistrictRaw::from_fields(&[
            "010101", "AMAZONAS", "CHACHAPOYAS", "CHACHAPOYAS", "CHACHAPOYAS", "2", "SIERRA", " ALTA ",
        ])
        .unwrap();
        assert_eq!(raw.region_name, "SIERRA, ALTA");
    }

    #[test]
    fn short_lines_are_malformed() {
        assert!(DistrictRaw::from_fields(&["150131", "LIMA", "LIMA"]).is_none());
        assert!(DistrictRaw::from_fields(&["15", "LIMA", "LIMA", "X", "X", "1", "COSTA"]).is_none());
    }

    #[test]
    fn region_code_is_parsed_like_parse_int() {
        assert_eq!(parse_leading_int::<u32>(" 3"), Some(3));
        assert_eq!(parse_leading_int::<u32>("2a"), Some(2));
        assert_eq!(parse_leading_int::<u32>("COSTA"), None);
        assert_eq!(parse_leading_int::<u32>(""), None);
    }
}
