//! Type definitions for the birdhouse panels

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    FrontPlate,
    BackPlate,
    SidePlate,
    BottomSlide,
    MidSlide,
    TopSlide,
    RoofLeft,
    RoofRight,
}

impl PanelKind {
    /// Every panel in build and export order.
    pub const ALL: [PanelKind; 8] = [
        PanelKind::FrontPlate,
        PanelKind::BackPlate,
        PanelKind::SidePlate,
        PanelKind::BottomSlide,
        PanelKind::MidSlide,
        PanelKind::TopSlide,
        PanelKind::RoofLeft,
        PanelKind::RoofRight,
    ];

    /// File name without extension used for the construction file.
    pub fn file_stem(self) -> &'static str {
        match self {
            PanelKind::FrontPlate => "front_plate",
            PanelKind::BackPlate => "back_plate",
            PanelKind::SidePlate => "side_plate",
            PanelKind::BottomSlide => "bottom_slide",
            PanelKind::MidSlide => "mid_slide",
            PanelKind::TopSlide => "top_slide",
            PanelKind::RoofLeft => "roof_left",
            PanelKind::RoofRight => "roof_right",
        }
    }

    /// How many copies the assembly needs.
    pub fn quantity(self) -> usize {
        match self {
            PanelKind::SidePlate => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Which slide a level belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLevel {
    Bottom,
    Mid,
    Top,
}

impl SlideLevel {
    pub fn kind(self) -> PanelKind {
        match self {
            SlideLevel::Bottom => PanelKind::BottomSlide,
            SlideLevel::Mid => PanelKind::MidSlide,
            SlideLevel::Top => PanelKind::TopSlide,
        }
    }

    /// Connector phase of the slide tabs. Neighbouring levels alternate.
    pub fn phase(self) -> u32 {
        match self {
            SlideLevel::Bottom | SlideLevel::Top => 0,
            SlideLevel::Mid => 1,
        }
    }
}

/// Where a slide sits inside the side plates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideSpan {
    pub level: SlideLevel,
    /// Height of the slide's lower face above ground
    pub z: f64,
    /// Distance of the slide's front edge from the front face
    pub y0: f64,
    /// Slide length front to back, tabs run along it
    pub length: f64,
}
