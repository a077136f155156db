//! Hierarchy lookups against the bundled sample.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use ubigeo_core::api::PlaceRef;
use ubigeo_core::prelude::*;

#[test]
fn departments_come_back_in_source_order() {
    let deps = SAMPLE.list_departments();
    let codes: Vec<&str> = deps.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(
        codes,
        vec!["01", "02", "04", "06", "07", "08", "11", "12", "14", "15", "16"]
    );
    assert_eq!(deps[0], PlaceRef::new("01", "AMAZONAS"));
}

#[test]
fn department_lists_its_provinces() {
    let dep = SAMPLE.get_department("15").unwrap();
    assert_eq!(dep.name, "LIMA");
    assert_eq!(
        dep.provinces,
        vec![PlaceRef::new("1501", "LIMA"), PlaceRef::new("1508", "HUAURA")]
    );
}

#[test]
fn unknown_department_is_not_found() {
    let err = SAMPLE.get_department("99").unwrap_err();
    assert!(matches!(err, UbigeoError::NotFound(_)));
}

#[test]
fn province_carries_parent_and_districts() {
    let prov = SAMPLE.get_province("0401").unwrap();
    assert_eq!(prov.name, "AREQUIPA");
    assert_eq!(prov.department, PlaceRef::new("04", "AREQUIPA"));
    assert_eq!(prov.districts.len(), 5);
    assert_eq!(prov.districts[4], PlaceRef::new("040112", "PAUCARPATA"));
}

#[rstest]
#[case("")]
#[case("01")]
#[case("150")]
#[case("15011")]
#[case("ABCDE")]
fn province_code_length_is_checked_first(#[case] code: &str) {
    let err = SAMPLE.get_province(code).unwrap_err();
    assert!(matches!(err, UbigeoError::InvalidArgument(_)), "{code:?} -> {err:?}");
}

#[rstest]
#[case("")]
#[case("1501")]
#[case("15010")]
#[case("1501011")]
#[case("150140X")]
fn district_code_length_is_checked_first(#[case] code: &str) {
    let err = SAMPLE.get_district(code).unwrap_err();
    assert!(matches!(err, UbigeoError::InvalidArgument(_)), "{code:?} -> {err:?}");
}

#[test]
fn province_not_found_does_not_reveal_the_level() {
    // "99" is not a department; "1599" is a department with no such province.
    let missing_dep = SAMPLE.get_province("9901").unwrap_err();
    let missing_prov = SAMPLE.get_province("1599").unwrap_err();
    assert!(matches!(missing_dep, UbigeoError::NotFound(_)));
    assert!(matches!(missing_prov, UbigeoError::NotFound(_)));
    assert_eq!(missing_dep.to_string(), "province '9901' not found");
    assert_eq!(missing_prov.to_string(), "province '1599' not found");
}

#[rstest]
#[case("990101")]
#[case("159901")]
#[case("150199")]
fn district_not_found_at_any_level(#[case] code: &str) {
    let err = SAMPLE.get_district(code).unwrap_err();
    assert_eq!(err.to_string(), format!("district '{code}' not found"));
}

#[test]
fn known_district_resolves_end_to_end() {
    let d = SAMPLE.get_district("150101").unwrap();
    assert_eq!(d.name, "LIMA");
    assert_eq!(d.province.code, "1501");
    assert_eq!(d.department.code, "15");
    assert_eq!(d.region_code, Some(1));
    assert_eq!(d.region_name, "COSTA");

    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["nombre"], "LIMA");
    assert_eq!(json["provincia"]["codigo"], "1501");
    assert_eq!(json["departamento"]["codigo"], "15");
}

#[test]
fn every_district_sits_under_its_code_prefixes() {
    for dep in SAMPLE.hierarchy.departments.values() {
        for prov in dep.provinces.values() {
            assert_eq!(&prov.code[..2], dep.code);
            for dist in prov.districts.values() {
                assert_eq!(&dist.code[..4], prov.code);
                assert_eq!(&dist.code[..2], dep.code);
            }
        }
    }
}

#[test]
fn stats_match_the_sample() {
    let stats = SAMPLE.stats();
    assert_eq!(stats.departments, 11);
    assert_eq!(stats.provinces, 14);
    assert_eq!(stats.districts, 49);
    assert_eq!(stats.index_entries, 49);
}
