//! # Birdhouse Core
//!
//! Parameters, derived dimensions and error types shared by the panel
//! builders and the exporters.

pub mod error;
pub mod params;

pub use error::{
    Error, ExportError, ExportResult, ParameterError, ParameterResult, Result,
};
pub use params::{BirdhouseParameters, Dimensions};
