use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`UbigeoSearch::stats`](crate::traits::UbigeoSearch::stats).
/// `index_entries` can exceed `districts` when the source repeats a district
/// code: the hierarchy keeps the last record, the index keeps all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub departments: usize,
    pub provinces: usize,
    pub districts: usize,
    pub index_entries: usize,
}
