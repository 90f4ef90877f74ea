// crates/penamap-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading the place dataset.
///
/// Controller and classifier operations never fail; only the load path
/// returns this type.
#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A placemark that cannot become a [`PlaceRecord`](crate::PlaceRecord).
    #[error("Invalid placemark #{index} ({name:?}): {reason}")]
    InvalidPlacemark {
        index: usize,
        name: String,
        reason: String,
    },

    #[error("Document contains no placemarks")]
    EmptyDocument,
}

pub type Result<T> = std::result::Result<T, PlaceError>;
