//! # AOIGrid Core
//!
//! Core types, traits and I/O for AOI statistics and grid segmentation.
//!
//! This crate provides:
//! - `GeographicPoint` / `Ring` / `GridCell`: the validated WGS84 data model
//! - `CRS`: EPSG-identified coordinate systems, UTM zone selection and
//!   WGS84 ↔ UTM transforms
//! - Algorithm trait for consistent API
//! - GeoJSON input parsing and FeatureCollection output

pub mod crs;
pub mod error;
pub mod io;
pub mod vector;

pub use crs::{select_planar_crs, Transform, CRS};
pub use error::{Error, Result};
pub use vector::{GeographicPoint, GridCell, Ring};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::crs::{select_planar_crs, Transform, CRS};
    pub use crate::error::{Error, Result};
    pub use crate::vector::{GeographicPoint, GridCell, Ring};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in AOIGrid.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
