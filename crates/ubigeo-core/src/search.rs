// crates/ubigeo-core/src/search.rs
use crate::api::{DepartmentView, DistrictView, PlaceRef, ProvinceView, SearchResponse};
use crate::common::DbStats;
use crate::error::{Result, UbigeoError};
use crate::model::UbigeoDb;
use crate::raw::parse_leading_int;
use crate::text::query_terms;
use crate::traits::UbigeoSearch;

/// Number of results returned when no usable limit is given.
pub const DEFAULT_LIMIT: usize = 20;
/// Shortest accepted query, counted in characters after trimming.
pub const MIN_QUERY_CHARS: usize = 2;

const PROVINCE_CODE_LEN: usize = 4;
const DISTRICT_CODE_LEN: usize = 6;

/// Interprets a textual limit the way a query string carries it.
///
/// Leading digits are used (`"5"`, `" 5 "`, `"+5"`, `"5abc"` → 5); anything else,
/// including a missing value or a negative number, yields [`DEFAULT_LIMIT`].
/// There is no upper bound.
pub fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(parse_leading_int::<usize>)
        .unwrap_or(DEFAULT_LIMIT)
}

impl UbigeoSearch for UbigeoDb {
    fn stats(&self) -> DbStats {
        DbStats {
            departments: self.hierarchy.department_count(),
            provinces: self.hierarchy.province_count(),
            districts: self.hierarchy.district_count(),
            index_entries: self.index.len(),
        }
    }

    fn list_departments(&self) -> Vec<PlaceRef> {
        self.hierarchy
            .departments
            .values()
            .map(|d| PlaceRef::new(d.code.as_str(), d.name.as_str()))
            .collect()
    }

    fn get_department(&self, code: &str) -> Result<DepartmentView> {
        let dep = self
            .hierarchy
            .department(code)
            .ok_or_else(|| UbigeoError::NotFound(format!("department '{code}' not found")))?;

        Ok(DepartmentView {
            code: dep.code.clone(),
            name: dep.name.clone(),
            provinces: dep
                .provinces
                .values()
                .map(|p| PlaceRef::new(p.code.as_str(), p.name.as_str()))
                .collect(),
        })
    }

    fn get_province(&self, code: &str) -> Result<ProvinceView> {
        if code.chars().count() != PROVINCE_CODE_LEN {
            return Err(UbigeoError::InvalidArgument(
                "province code must be 4 digits".into(),
            ));
        }

        // One message for a missing department or a missing province.
        let (dep, prov) = self
            .hierarchy
            .province(code)
            .ok_or_else(|| UbigeoError::NotFound(format!("province '{code}' not found")))?;

        Ok(ProvinceView {
            code: prov.code.clone(),
            name: prov.name.clone(),
            department: PlaceRef::new(dep.code.as_str(), dep.name.as_str()),
            districts: prov
                .districts
                .values()
                .map(|d| PlaceRef::new(d.code.as_str(), d.name.as_str()))
                .collect(),
        })
    }

    fn get_district(&self, code: &str) -> Result<DistrictView> {
        if code.chars().count() != DISTRICT_CODE_LEN {
            return Err(UbigeoError::InvalidArgument(
                "district code must be 6 digits".into(),
            ));
        }

        let (dep, prov, dist) = self
            .hierarchy
            .district(code)
            .ok_or_else(|| UbigeoError::NotFound(format!("district '{code}' not found")))?;

        Ok(DistrictView {
            code: dist.code.clone(),
            name: dist.name.clone(),
            capital: dist.capital.clone(),
            region_code: dist.region_code,
            region_name: dist.region_name.clone(),
            province: PlaceRef::new(prov.code.as_str(), prov.name.as_str()),
            department: PlaceRef::new(dep.code.as_str(), dep.name.as_str()),
        })
    }

    fn search(&self, query: &str, limit: Option<usize>) -> Result<SearchResponse> {
        if query.trim().chars().count() < MIN_QUERY_CHARS {
            return Err(UbigeoError::InvalidArgument(format!(
                "query must be at least {MIN_QUERY_CHARS} characters"
            )));
        }
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let terms = query_terms(query);

        let results: Vec<DistrictView> = self
            .index
            .matching(&terms)
            .take(limit)
            .map(|e| e.to_view())
            .collect();

        tracing::debug!(query, ?terms, limit, hits = results.len(), "search");

        Ok(SearchResponse {
            query: query.to_owned(),
            total: results.len(),
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_parsing_follows_parse_int() {
        assert_eq!(parse_limit(None), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("5")), 5);
        assert_eq!(parse_limit(Some(" 7 ")), 7);
        assert_eq!(parse_limit(Some("12abc")), 12);
        assert_eq!(parse_limit(Some("+5")), 5);
        assert_eq!(parse_limit(Some(" +8 rows")), 8);
        assert_eq!(parse_limit(Some("+")), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("++5")), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("abc")), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("-3")), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("0")), 0);
        assert_eq!(parse_limit(Some("100000")), 100_000);
    }

    #[test]
    fn empty_db_lists_nothing() {
        let db = UbigeoDb::default();
        assert!(db.list_departments().is_empty());
        assert_eq!(db.stats().index_entries, 0);
    }

    #[test]
    fn short_query_is_rejected_before_matching() {
        let db = UbigeoDb::default();
        let err = db.search(" a ", None).unwrap_err();
        assert!(matches!(err, UbigeoError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "query must be at least 2 characters");
    }
}
