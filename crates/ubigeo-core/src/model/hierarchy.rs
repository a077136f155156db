// crates/ubigeo-core/src/model/hierarchy.rs
use crate::raw::{prefix, DistrictRaw};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// # The Nested Model
///
/// `Hierarchy` -> `Department` -> `Province` -> `District`, each level an
/// insertion-ordered map keyed by its ubigeo code. Lookups are O(1) at every
/// level and iteration follows source order.
///
/// Serializes as the `ubigeo.json` artifact: an object keyed by department
/// code.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hierarchy {
    pub departments: IndexMap<String, Department>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "provincias")]
    pub provinces: IndexMap<String, Province>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Province {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "distritos")]
    pub districts: IndexMap<String, District>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    pub capital: String,
    #[serde(rename = "codigoRegionNatural")]
    pub region_code: Option<u32>,
    #[serde(rename = "regionNatural")]
    pub region_name: String,
}

impl Hierarchy {
    /// Adds one source record.
    ///
    /// Department and province are created on first sight and keep the first
    /// name seen. The district is always written, so a repeated district code
    /// replaces the earlier record (in the earlier record's position).
    pub fn insert(&mut self, raw: &DistrictRaw) {
        let dep_code = raw.department_code();
        let prov_code = raw.province_code();

        let department = self
            .departments
            .entry(dep_code.to_owned())
            .or_insert_with(|| Department {
                code: dep_code.to_owned(),
                name: raw.department_name.clone(),
                provinces: IndexMap::new(),
            });

        let province = department
            .provinces
            .entry(prov_code.to_owned())
            .or_insert_with(|| Province {
                code: prov_code.to_owned(),
                name: raw.province_name.clone(),
                districts: IndexMap::new(),
            });

        province.districts.insert(
            raw.district_code.clone(),
            District {
                code: raw.district_code.clone(),
                name: raw.district_name.clone(),
                capital: raw.capital.clone(),
                region_code: raw.region_code,
                region_name: raw.region_name.clone(),
            },
        );
    }

    pub fn department(&self, code: &str) -> Option<&Department> {
        self.departments.get(code)
    }

    /// Resolves a 4-char province code through its department prefix.
    pub fn province(&self, code: &str) -> Option<(&Department, &Province)> {
        let department = self.department(prefix(code, 2))?;
        let province = department.provinces.get(code)?;
        Some((department, province))
    }

    /// Resolves a 6-char district code through both ancestor prefixes.
    pub fn district(&self, code: &str) -> Option<(&Department, &Province, &District)> {
        let (department, province) = self.province(prefix(code, 4))?;
        let district = province.districts.get(code)?;
        Some((department, province, district))
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    pub fn province_count(&self) -> usize {
        self.departments.values().map(|d| d.provinces.len()).sum()
    }

    pub fn district_count(&self) -> usize {
        self.departments
            .values()
            .flat_map(|d| d.provinces.values())
            .map(|p| p.districts.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(code: &str, dep: &str, prov: &str, dist: &str) -> DistrictRaw {
        DistrictRaw::from_fields(&[code, dep, prov, dist, dist, "1", "COSTA"]).unwrap()
    }

    #[test]
    fn keys_every_level_from_the_district_code() {
        let mut h = Hierarchy::default();
        h.insert(&raw("150101", "LIMA", "LIMA", "LIMA"));
        h.insert(&raw("150131", "LIMA", "LIMA", "SAN ISIDRO"));
        h.insert(&raw("040112", "AREQUIPA", "AREQUIPA", "PAUCARPATA"));

        for (dep_code, dep) in &h.departments {
            assert_eq!(dep_code, &dep.code);
            for (prov_code, prov) in &dep.provinces {
                assert!(prov_code.starts_with(dep_code.as_str()));
                for dist_code in prov.districts.keys() {
                    assert!(dist_code.starts_with(prov_code.as_str()));
                }
            }
        }
        assert_eq!(h.department_count(), 2);
        assert_eq!(h.province_count(), 2);
        assert_eq!(h.district_count(), 3);
    }

    #[test]
    fn first_seen_names_win_for_ancestors() {
        let mut h = Hierarchy::default();
        h.insert(&raw("150101", "LIMA", "LIMA", "LIMA"));
        h.insert(&raw("150102", "LIMA METROPOLITANA", "LIMA CERCADO", "ANCON"));

        let (dep, prov) = h.province("1501").unwrap();
        assert_eq!(dep.name, "LIMA");
        assert_eq!(prov.name, "LIMA");
        assert_eq!(prov.districts.len(), 2);
    }

    #[test]
    fn duplicate_district_overwrites_in_place() {
        let mut h = Hierarchy::default();
        h.insert(&raw("150101", "LIMA", "LIMA", "LIMA"));
        h.insert(&raw("150102", "LIMA", "LIMA", "ANCON"));
        h.insert(&raw("150101", "LIMA", "LIMA", "CERCADO DE LIMA"));

        let (_, prov) = h.province("1501").unwrap();
        let names: Vec<&str> = prov.districts.values().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["CERCADO DE LIMA", "ANCON"]);
    }

    #[test]
    fn lookups_miss_cleanly() {
        let mut h = Hierarchy::default();
        h.insert(&raw("150101", "LIMA", "LIMA", "LIMA"));
        assert!(h.department("99").is_none());
        assert!(h.province("1599").is_none());
        assert!(h.province("9901").is_none());
        assert!(h.district("150199").is_none());
        assert!(h.district("150101").is_some());
    }
}
