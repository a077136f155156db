// crates/ubigeo-core/src/error.rs
use thiserror::Error;

/// Every error the crate can produce.
///
/// Query operations only ever return [`UbigeoError::InvalidArgument`] or
/// [`UbigeoError::NotFound`]; the remaining variants come from loading and
/// writing artifacts.
#[derive(Debug, Error)]
pub enum UbigeoError {
    /// Malformed input: wrong-length code, too-short search query.
    #[error("{0}")]
    InvalidArgument(String),

    /// Well-formed identifier with no matching entity.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "builder")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl UbigeoError {
    /// `true` for the two kinds a query operation can return.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, UbigeoError>;
