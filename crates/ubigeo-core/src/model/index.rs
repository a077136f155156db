// crates/ubigeo-core/src/model/index.rs
use crate::api::{DistrictView, PlaceRef};
use crate::raw::DistrictRaw;
use crate::text::{contains_all, normalize};
use serde::{Deserialize, Serialize};

/// One district, denormalized with its ancestors and a precomputed search key.
///
/// Entries own copies of every field; they do not point into the
/// [`Hierarchy`](super::Hierarchy).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// `normalize(district) + " " + normalize(province) + " " + normalize(department)`
    #[serde(rename = "_searchKey")]
    pub search_key: String,
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

impl SearchEntry {
    pub fn from_raw(raw: &DistrictRaw) -> Self {
        let search_key = [
            normalize(&raw.district_name),
            normalize(&raw.province_name),
            normalize(&raw.department_name),
        ]
        .join(" ");

        Self {
            search_key,
            code: raw.district_code.clone(),
            name: raw.district_name.clone(),
            capital: raw.capital.clone(),
            region_code: raw.region_code,
            region_name: raw.region_name.clone(),
            province: PlaceRef::new(raw.province_code(), raw.province_name.as_str()),
            department: PlaceRef::new(raw.department_code(), raw.department_name.as_str()),
        }
    }

    /// Public shape of this entry, without the search key.
    pub fn to_view(&self) -> DistrictView {
        DistrictView {
            code: self.code.clone(),
            name: self.name.clone(),
            capital: self.capital.clone(),
            region_code: self.region_code,
            region_name: self.region_name.clone(),
            province: self.province.clone(),
            department: self.department.clone(),
        }
    }

    #[inline]
    pub fn matches<S: AsRef<str>>(&self, terms: &[S]) -> bool {
        contains_all(&self.search_key, terms)
    }
}

/// # The Flat Model
///
/// Every valid source record in source order, duplicates included.
/// Serializes as the `search-index.json` artifact: a plain array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    pub entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn push(&mut self, raw: &DistrictRaw) {
        self.entries.push(SearchEntry::from_raw(raw));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose key contains all `terms`, in index order.
    pub fn matching<'a, S: AsRef<str>>(
        &'a self,
        terms: &'a [S],
    ) -> impl Iterator<Item = &'a SearchEntry> + 'a {
        self.entries.iter().filter(move |e| e.matches(terms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_key_joins_normalized_names() {
        let raw = DistrictRaw::from_fields(&[
            "150105", "Lima", "Lima", "Breña", "Breña", "1", "COSTA",
        ])
        .unwrap();
        let entry = SearchEntry::from_raw(&raw);
        assert_eq!(entry.search_key, "BREÑA LIMA LIMA");
        assert_eq!(entry.province, PlaceRef::new("1501", "Lima"));
        assert_eq!(entry.department, PlaceRef::new("15", "Lima"));
    }

    #[test]
    fn view_drops_the_search_key() {
        let raw = DistrictRaw::from_fields(&[
            "150131", "LIMA", "LIMA", "SAN ISIDRO", "SAN ISIDRO", "1", "COSTA",
        ])
        .unwrap();
        let view = SearchEntry::from_raw(&raw).to_view();
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("_searchKey").is_none());
        assert_eq!(json["provincia"]["codigo"], "1501");
    }
}
