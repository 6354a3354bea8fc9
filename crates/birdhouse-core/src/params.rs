//! Birdhouse parameters
//!
//! The defaults describe the reference birdhouse. A parameter file (JSON or
//! TOML, selected by extension) can override any of them.

use crate::error::{Error, ParameterError, ParameterResult, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Material thickness (mm)
pub const WALL_THICKNESS: f64 = 4.0;
/// Outer width (mm)
pub const BIRDHOUSE_WIDTH: f64 = 60.0;
/// Outer depth (mm)
pub const BIRDHOUSE_DEPTH: f64 = 60.0;
/// Ground to ridge (mm)
pub const BIRDHOUSE_HEIGHT: f64 = 160.0;
/// Ridge down to the top slide (mm)
pub const BIRDHOUSE_SPACE_TOP: f64 = 40.0;
/// Compartment below the front plate (mm)
pub const BIRDHOUSE_SPACE_BOTTOM: f64 = 35.0;
/// Polygon resolution of round cutouts
pub const HOLE_SEGMENTS: usize = 64;

/// Dimensions driving every panel of the birdhouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdhouseParameters {
    /// Material thickness in millimetres
    pub wall_thickness: f64,
    /// Outer width across the front
    pub width: f64,
    /// Outer depth front to back
    pub depth: f64,
    /// Ground to the ridge of the back plate
    pub height: f64,
    /// Clearance between the ridge and the top slide
    pub space_top: f64,
    /// Height of the compartment below the front plate
    pub space_bottom: f64,
    /// Segments used to approximate the entrance holes
    pub hole_segments: usize,
}

impl Default for BirdhouseParameters {
    fn default() -> Self {
        Self {
            wall_thickness: WALL_THICKNESS,
            width: BIRDHOUSE_WIDTH,
            depth: BIRDHOUSE_DEPTH,
            height: BIRDHOUSE_HEIGHT,
            space_top: BIRDHOUSE_SPACE_TOP,
            space_bottom: BIRDHOUSE_SPACE_BOTTOM,
            hole_segments: HOLE_SEGMENTS,
        }
    }
}

impl BirdhouseParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load parameters from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read parameter file: {}", e)))?;

        let params: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid JSON parameters: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid TOML parameters: {}", e)))?
        } else {
            return Err(Error::config("Parameter file must be .json or .toml"));
        };

        debug!("Loaded parameters from {}", path.display());
        params.validate()?;
        Ok(params)
    }

    /// Save parameters to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize parameters: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize parameters: {}", e)))?
        } else {
            return Err(Error::config("Parameter file must be .json or .toml"));
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that every panel has room to exist.
    pub fn validate(&self) -> ParameterResult<()> {
        let named = [
            ("wall_thickness", self.wall_thickness),
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
            ("space_top", self.space_top),
            ("space_bottom", self.space_bottom),
        ];
        for (name, value) in named {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::InvalidDimensions(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let t = self.wall_thickness;

        if self.width <= 2.0 * t {
            return Err(ParameterError::OutOfRange {
                name: "width".to_string(),
                value: self.width,
                min: 2.0 * t,
                max: f64::INFINITY,
            });
        }

        if self.depth <= 2.0 * t {
            return Err(ParameterError::OutOfRange {
                name: "depth".to_string(),
                value: self.depth,
                min: 2.0 * t,
                max: f64::INFINITY,
            });
        }

        if self.space_bottom <= 2.0 * t {
            return Err(ParameterError::Incompatible(
                "space_bottom must leave room between the bottom and mid slides (> 2 * wall_thickness)"
                    .to_string(),
            ));
        }

        if self.height - self.space_bottom <= self.width / 2.0 {
            return Err(ParameterError::Incompatible(
                "front plate has no straight sides below the gable".to_string(),
            ));
        }

        if self.space_top < self.width / 2.0 {
            return Err(ParameterError::Incompatible(
                "space_top must reach at least down to the eaves".to_string(),
            ));
        }

        if self.height - self.space_top - t <= self.space_bottom {
            return Err(ParameterError::Incompatible(
                "top slide must sit above the mid slide".to_string(),
            ));
        }

        let front_height_middle = self.height - self.space_bottom;
        let hole_radius = self.width / 6.0;
        // holes sit at 1/2 and 3/4 of the front height, a quarter apart
        if front_height_middle / 4.0 <= 2.0 * hole_radius {
            return Err(ParameterError::Incompatible(
                "front plate too short for two entrance holes below the gable".to_string(),
            ));
        }

        if self.width / 2.0 - hole_radius <= t {
            return Err(ParameterError::Incompatible(
                "entrance holes would cut into the edge slots".to_string(),
            ));
        }

        if self.hole_segments < 3 {
            return Err(ParameterError::OutOfRange {
                name: "hole_segments".to_string(),
                value: self.hole_segments as f64,
                min: 3.0,
                max: f64::INFINITY,
            });
        }

        Ok(())
    }
}

/// Measures derived once from the parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub wall_thickness: f64,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Front plate height at the ridge
    pub front_height_middle: f64,
    /// Front plate height at the eaves
    pub front_height_side: f64,
    /// Side plate height, ground to eaves
    pub side_height: f64,
    /// Lower edge of the front plate
    pub front_base: f64,
    /// Slide width between the side plates, tabs excluded
    pub slide_width: f64,
    /// Radius of both entrance holes
    pub hole_radius: f64,
    pub bottom_slide_level: f64,
    pub mid_slide_level: f64,
    pub top_slide_level: f64,
    /// Roof panel length along the slope, eave overhang included
    pub roof_slope: f64,
    /// Roof panel length front to back, overhangs included
    pub roof_depth: f64,
}

impl From<&BirdhouseParameters> for Dimensions {
    fn from(p: &BirdhouseParameters) -> Self {
        let t = p.wall_thickness;
        let front_height_middle = p.height - p.space_bottom;
        let front_height_side = front_height_middle - p.width / 2.0;

        Self {
            wall_thickness: t,
            width: p.width,
            depth: p.depth,
            height: p.height,
            front_height_middle,
            front_height_side,
            side_height: p.space_bottom + front_height_side,
            front_base: p.space_bottom,
            slide_width: p.width - 2.0 * t,
            hole_radius: p.width / 6.0,
            bottom_slide_level: 0.0,
            mid_slide_level: p.space_bottom - t,
            top_slide_level: p.height - p.space_top - t,
            roof_slope: (p.width / 2.0) * std::f64::consts::SQRT_2 + t,
            roof_depth: p.depth + 2.0 * t,
        }
    }
}
