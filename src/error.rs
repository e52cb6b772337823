//! Defines [`SimplifyError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SimplifyError {
    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Malformed JSON, or JSON that does not have the shape of a GeoJSON document.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Tolerance that is negative or not a finite number.
    #[error("Invalid tolerance: {0} (expected a finite, non-negative number of degrees)")]
    InvalidTolerance(f64),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, SimplifyError>;
