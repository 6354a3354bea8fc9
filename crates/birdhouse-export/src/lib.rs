//! # Birdhouse Export
//!
//! Writes the construction files laser cutters consume (one DXF per panel)
//! and an optional STL preview of the assembled birdhouse.

pub mod dxf_writer;
pub mod preview;

pub use dxf_writer::{
    outline_to_drawing, DxfExporter, CLOSED_FLAG, CUTOUT_LAYER, DEFAULT_OUTPUT_DIR, OUTLINE_LAYER,
};
pub use preview::{show_all, NullViewer, PreviewEntry, StlPreview, Viewer, MANIFEST_FILE};
