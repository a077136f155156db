// crates/ubigeo-core/src/model/convert.rs
use super::{Hierarchy, SearchIndex, UbigeoDb};
use crate::raw::DistrictRaw;

/// **Standard Converter:** Raw records -> Hierarchy + SearchIndex.
///
/// Both artifacts are filled in lockstep during a single pass, so the index
/// holds exactly one entry per record while the hierarchy deduplicates on
/// district code.
pub fn from_raw<I>(records: I) -> UbigeoDb
where
    I: IntoIterator<Item = DistrictRaw>,
{
    let mut hierarchy = Hierarchy::default();
    let mut index = SearchIndex::default();

    for raw in records {
        hierarchy.insert(&raw);
        index.push(&raw);
    }

    UbigeoDb { hierarchy, index }
}
