//! Error types for shape parsing, persistence and editor operations.
//!
//! Parse and storage failures are recovered locally by their callers (logged and
//! treated as empty); `EditorError` surfaces to whoever drives the editor.

use crate::region::RegionKind;
use crate::shape::ShapeId;
use thiserror::Error;

/// Errors produced while decoding or building a polygon
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Point token without exactly one `x,y` pair
    #[error("malformed point token '{0}': expected '<x>,<y>'")]
    MalformedToken(String),

    /// Coordinate that is not a finite number
    #[error("invalid coordinate '{0}'")]
    InvalidNumber(String),

    /// Fewer vertices than a polygon needs
    #[error("polygon needs at least {min} points, got {got}")]
    TooFewPoints { got: usize, min: usize },
}

/// Errors from the key-value persistence layer
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by editor operations
#[derive(Error, Debug)]
pub enum EditorError {
    /// The region has no resolved on-screen bounds
    #[error("{0} region is not available")]
    RegionUnavailable(RegionKind),

    /// No shape with this id in the region
    #[error("shape {id} not found in {region} region")]
    ShapeNotFound { region: RegionKind, id: ShapeId },

    /// The destination already holds a shape with identical points
    #[error("{0} region already contains an identical shape")]
    DuplicateShape(RegionKind),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type alias for shape parsing
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Result type alias for persistence operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
