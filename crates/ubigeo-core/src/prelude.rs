//! ubigeo-rs prelude: bring common types and traits into scope.

pub use crate::api::{DepartmentView, DistrictView, PlaceRef, ProvinceView, SearchResponse};
pub use crate::common::DbStats;
pub use crate::error::{Result, UbigeoError};
pub use crate::model::{Hierarchy, SearchEntry, SearchIndex, UbigeoDb};
pub use crate::search::{parse_limit, DEFAULT_LIMIT};
pub use crate::text::normalize;
pub use crate::traits::UbigeoSearch;
