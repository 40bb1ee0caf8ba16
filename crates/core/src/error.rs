//! Error types for AOIGrid

use thiserror::Error;

/// Main error type for AOIGrid operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinate: lon={lon}, lat={lat} (expected finite lon in [-180, 180], lat in [-90, 90])")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unrepairable geometry: {0}")]
    UnrepairableGeometry(String),

    #[error("Cannot determine centroid of AOI for projection")]
    EmptyCentroid,

    #[error("Projection error: {0}")]
    Projection(String),

    #[error("Buffered geometry is invalid or empty (buffer = {buffer_km} km)")]
    InvalidBuffer { buffer_km: f64 },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error(
        "Grid generation exceeded limits: {columns} x {rows} cells > {limit}. \
         Try a larger grid size or smaller AOI."
    )]
    GridLimitExceeded {
        columns: u64,
        rows: u64,
        limit: u64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for AOIGrid operations
pub type Result<T> = std::result::Result<T, Error>;
