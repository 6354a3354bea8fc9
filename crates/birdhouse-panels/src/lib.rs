//! # Birdhouse Panels
//!
//! Flat panel profiles for a laser-cut birdhouse and their placement in the
//! assembled model.
//!
//! - **Connectors**: finger joint rows with a phase offset
//! - **Panels**: front, back, side, three slides and two roof halves
//! - **Outline**: closed cut contours ready for export
//! - **Assembly**: rigid placement of the extruded panels

pub mod assembly;
pub mod birdhouse;
pub mod connectors;
pub mod outline;
pub mod panels;
pub mod shapes;

pub use assembly::{AssemblyPart, Color, PartSlot, Placement};
pub use birdhouse::Birdhouse;
pub use connectors::{
    connector_count, connector_spans, distribute_connectors, distribute_connectors_horizontal,
};
pub use outline::{Outline, Ring};
pub use panels::{Panel, PanelKind, SlideLevel, SlideSpan};
