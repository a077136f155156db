// crates/ubigeo-core/src/traits.rs
use crate::api::{DepartmentView, DistrictView, PlaceRef, ProvinceView, SearchResponse};
use crate::common::DbStats;
use crate::error::Result;

/// The query surface of the database.
///
/// Every operation is a pure read over frozen data: safe to call from many
/// threads at once, never blocks, and either succeeds or fails with
/// [`UbigeoError::InvalidArgument`](crate::UbigeoError::InvalidArgument) /
/// [`UbigeoError::NotFound`](crate::UbigeoError::NotFound).
pub trait UbigeoSearch {
    fn stats(&self) -> DbStats;

    /// All departments as `{codigo, nombre}`, in build order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ubigeo_core::prelude::*;
    ///
    /// let db = UbigeoDb::load()?;
    /// for d in db.list_departments() {
    ///     println!("{} {}", d.code, d.name);
    /// }
    /// # Ok::<(), UbigeoError>(())
    /// ```
    fn list_departments(&self) -> Vec<PlaceRef>;

    /// A department with its provinces. `NotFound` for an unknown code.
    fn get_department(&self, code: &str) -> Result<DepartmentView>;

    /// A province by its 4-character code.
    ///
    /// `InvalidArgument` if `code` is not exactly 4 characters; `NotFound`
    /// if either the department prefix or the province is unknown (the
    /// message does not say which).
    fn get_province(&self, code: &str) -> Result<ProvinceView>;

    /// A district by its 6-character code, with both ancestors.
    ///
    /// `InvalidArgument` if `code` is not exactly 6 characters; `NotFound`
    /// if any level is missing.
    fn get_district(&self, code: &str) -> Result<DistrictView>;

    /// Multi-term AND search over district, province and department names.
    ///
    /// `limit` of `None` means [`DEFAULT_LIMIT`](crate::DEFAULT_LIMIT).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ubigeo_core::prelude::*;
    ///
    /// let db = UbigeoDb::load()?;
    /// let res = db.search("san isidro", None)?;
    /// assert_eq!(res.total, res.results.len());
    /// # Ok::<(), UbigeoError>(())
    /// ```
    fn search(&self, query: &str, limit: Option<usize>) -> Result<SearchResponse>;
}
