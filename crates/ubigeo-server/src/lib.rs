//! ubigeo-server
//! =============
//!
//! HTTP front for [`ubigeo_core`]. The database is loaded once at startup
//! and handed to [`router`] as an `Arc`; handlers only read from it.
//!
//! | Route                        | Operation          |
//! |------------------------------|--------------------|
//! | `GET /departamentos`         | list departments   |
//! | `GET /departamentos/{code}`  | department detail  |
//! | `GET /provincias/{code}`     | province detail    |
//! | `GET /distritos/{code}`      | district detail    |
//! | `GET /buscar?q=..&limit=..`  | district search    |
//! | `GET /health`                | liveness + stats   |
//!
//! Errors are returned as `{"error": "<message>"}` with 400 for invalid
//! arguments and 404 for unknown codes.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerArgs;
pub use error::ApiError;
pub use routes::router;
