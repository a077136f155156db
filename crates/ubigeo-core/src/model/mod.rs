// crates/ubigeo-core/src/model/mod.rs
pub mod convert;
pub mod hierarchy;
pub mod index;

pub use hierarchy::{Department, District, Hierarchy, Province};
pub use index::{SearchEntry, SearchIndex};

use serde::{Deserialize, Serialize};

/// The master database: both artifacts, frozen after construction.
///
/// Built once by [`convert::from_raw`] or one of the loaders, then shared
/// read-only (typically behind an `Arc`). There is no mutation API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UbigeoDb {
    pub hierarchy: Hierarchy,
    pub index: SearchIndex,
}

impl UbigeoDb {
    /// Assembles a database from artifacts produced elsewhere.
    pub fn from_parts(hierarchy: Hierarchy, index: SearchIndex) -> Self {
        Self { hierarchy, index }
    }
}
