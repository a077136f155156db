// crates/ubigeo-core/src/api.rs

//! Public response shapes.
//!
//! These are what the query operations return and what the HTTP layer
//! serializes. Field names on the wire follow the Spanish API
//! (`codigo`, `nombre`, `provincias`, ...). None of them carries the internal
//! search key.

use serde::{Deserialize, Serialize};

/// `{codigo, nombre}` summary of any hierarchy node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRef {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl PlaceRef {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A department with the summaries of its provinces, in source order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentView {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "provincias")]
    pub provinces: Vec<PlaceRef>,
}

/// A province, its parent department and its district summaries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceView {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "departamento")]
    pub department: PlaceRef,
    #[serde(rename = "distritos")]
    pub districts: Vec<PlaceRef>,
}

/// Full district detail with both ancestors.
///
/// Returned by the district lookup and used for every search result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictView {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    pub capital: String,
    #[serde(rename = "codigoRegionNatural")]
    pub region_code: Option<u32>,
    #[serde(rename = "regionNatural")]
    pub region_name: String,
    #[serde(rename = "provincia")]
    pub province: PlaceRef,
    #[serde(rename = "departamento")]
    pub department: PlaceRef,
}

/// Result of a search.
///
/// `total` is the number of results actually returned, i.e. after the
/// limit was applied, not the number of entries that matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query exactly as received (untrimmed, not normalized).
    pub query: String,
    pub total: usize,
    #[serde(rename = "resultados")]
    pub results: Vec<DistrictView>,
}
