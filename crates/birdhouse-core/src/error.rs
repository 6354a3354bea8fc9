//! Error types for the birdhouse generator.
//!
//! This module provides structured error types for parameter validation,
//! configuration file handling and panel export.

use std::io;
use thiserror::Error;

/// Top level error for building and exporting a birdhouse.
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// A parameter file could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing a drawing or preview failed.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a configuration error from a message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

/// Errors related to birdhouse parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Dimensions are invalid (zero, negative or not finite).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Parameters are mutually incompatible.
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),
}

/// Errors raised while writing construction files.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The DXF writer rejected the drawing.
    #[error("DXF write error: {0}")]
    Dxf(String),

    /// The preview output could not be produced.
    #[error("Preview error: {0}")]
    Preview(String),

    /// I/O error while creating directories or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for birdhouse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = std::result::Result<T, ParameterError>;

/// Result type alias for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;
