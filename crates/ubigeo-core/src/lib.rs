// crates/ubigeo-core/src/lib.rs

//! # ubigeo-core
//!
//! Peru's administrative division hierarchy (departamento → provincia →
//! distrito) as an immutable in-memory database.
//!
//! A [`UbigeoDb`] holds two artifacts built in one pass over the INEI source:
//!
//! - a [`Hierarchy`] of insertion-ordered maps for O(1) lookups at every level,
//! - a flat [`SearchIndex`] with a precomputed, accent-free search key per
//!   district for multi-term AND matching.
//!
//! ```no_run
//! use ubigeo_core::prelude::*;
//!
//! let db = UbigeoDb::load_from_path("data/ubigeo-sample.csv")?;
//! let hits = db.search("san isidro", Some(5))?;
//! for d in &hits.results {
//!     println!("{} — {}, {}", d.name, d.province.name, d.department.name);
//! }
//! # Ok::<(), ubigeo_core::UbigeoError>(())
//! ```

pub mod api; // JSON views returned by the query operations
pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod raw;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{Result, UbigeoError};
pub use crate::model::{Department, District, Hierarchy, Province, SearchEntry, SearchIndex, UbigeoDb};
pub use crate::search::{parse_limit, DEFAULT_LIMIT, MIN_QUERY_CHARS};
pub use crate::text::normalize;
pub use crate::traits::UbigeoSearch;
