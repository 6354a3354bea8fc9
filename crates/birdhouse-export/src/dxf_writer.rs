//! DXF construction files
//!
//! One drawing per panel, millimetre units, one closed LWPOLYLINE per
//! contour. Outer contours and inner cutouts go on separate layers so the
//! cutter can run the cutouts first.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use birdhouse_core::{ExportError, ExportResult};
use birdhouse_panels::{Birdhouse, Outline, Panel};
use dxf::entities::{Entity, EntityType, LwPolyline};
use dxf::enums::{AcadVersion, Units};
use dxf::tables::Layer;
use dxf::{Drawing, LwPolylineVertex};
use tracing::{debug, info};

/// Relative directory the construction files land in by default.
pub const DEFAULT_OUTPUT_DIR: &str = "construction_files";
/// Layer of outer contours.
pub const OUTLINE_LAYER: &str = "OUTLINE";
/// Layer of holes and closed slots.
pub const CUTOUT_LAYER: &str = "CUTOUT";

/// LWPOLYLINE flag bit for a closed contour.
pub const CLOSED_FLAG: i32 = 1;

/// Build the drawing for one outline.
pub fn outline_to_drawing(outline: &Outline) -> Drawing {
    let mut drawing = Drawing::new();
    // LWPOLYLINE needs R14 or later
    drawing.header.version = AcadVersion::R2000;
    drawing.header.default_drawing_units = Units::Millimeters;

    for name in [OUTLINE_LAYER, CUTOUT_LAYER] {
        let mut layer = Layer::default();
        layer.name = name.to_string();
        drawing.add_layer(layer);
    }

    for ring in &outline.rings {
        let mut polyline = LwPolyline::default();
        polyline.flags = CLOSED_FLAG;
        polyline.vertices = ring
            .points
            .iter()
            .map(|p| LwPolylineVertex {
                x: p[0],
                y: p[1],
                ..Default::default()
            })
            .collect();

        let mut entity = Entity::new(EntityType::LwPolyline(polyline));
        entity.common.layer = if ring.is_hole {
            CUTOUT_LAYER
        } else {
            OUTLINE_LAYER
        }
        .to_string();
        drawing.add_entity(entity);
    }

    drawing
}

/// Writes `<panel>.dxf` files into one directory.
pub struct DxfExporter {
    dir: PathBuf,
}

impl DxfExporter {
    /// Create the exporter, creating `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>) -> ExportResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, panel: &Panel) -> PathBuf {
        self.dir.join(panel.name()).with_extension("dxf")
    }

    pub fn export_panel(&self, panel: &Panel) -> ExportResult<PathBuf> {
        let outline = panel.outline();
        if outline.is_empty() {
            return Err(ExportError::Dxf(format!("{} has no contours", panel.name())));
        }

        let drawing = outline_to_drawing(&outline);
        let path = self.path_for(panel);
        write_replacing(&path, |writer| {
            drawing
                .save(writer)
                .map_err(|e| ExportError::Dxf(format!("{}: {}", path.display(), e)))
        })?;

        debug!(
            "{}: {} contours, {:.0}mm cut, {:.0}mm2",
            panel.name(),
            outline.rings.len(),
            outline.cut_length(),
            outline.area()
        );
        info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Export every panel; returns the written paths in panel order.
    pub fn export_all(&self, house: &Birdhouse) -> ExportResult<Vec<PathBuf>> {
        house
            .panels()
            .iter()
            .map(|panel| self.export_panel(panel))
            .collect()
    }
}

/// Write through `<path>.part` and rename into place, so a failed write
/// never leaves a truncated file at `path`.
fn write_replacing<F>(path: &Path, write: F) -> ExportResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> ExportResult<()>,
{
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    let result = File::create(&partial)
        .map_err(ExportError::from)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()?;
            Ok(())
        })
        .and_then(|()| std::fs::rename(&partial, path).map_err(ExportError::from));

    if result.is_err() {
        let _ = std::fs::remove_file(&partial);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use birdhouse_panels::Ring;

    #[test]
    fn test_rings_become_closed_polylines_on_layers() {
        let outline = Outline {
            rings: vec![
                Ring {
                    points: vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
                    is_hole: false,
                },
                Ring {
                    points: vec![[4.0, 4.0], [4.0, 6.0], [6.0, 6.0], [6.0, 4.0]],
                    is_hole: true,
                },
            ],
        };

        let drawing = outline_to_drawing(&outline);
        let polylines: Vec<(String, LwPolyline)> = drawing
            .entities()
            .filter_map(|e| match &e.specific {
                EntityType::LwPolyline(p) => Some((e.common.layer.clone(), p.clone())),
                _ => None,
            })
            .collect();

        assert_eq!(polylines.len(), 2);
        assert_eq!(polylines[0].0, OUTLINE_LAYER);
        assert_eq!(polylines[1].0, CUTOUT_LAYER);
        assert!(polylines.iter().all(|(_, p)| p.flags & CLOSED_FLAG != 0));
        assert_eq!(polylines[0].1.vertices.len(), 4);
        assert_eq!(polylines[1].1.vertices[2].x, 6.0);
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("front_plate.dxf");

        let result = write_replacing(&path, |writer| {
            writer.write_all(b"0\nSECTION\n")?;
            Err(ExportError::Dxf("disk full".to_string()))
        });

        assert!(matches!(result, Err(ExportError::Dxf(_))));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("front_plate.dxf");
        std::fs::write(&path, "previous").unwrap();

        let result = write_replacing(&path, |_| Err(ExportError::Dxf("broken".to_string())));

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn test_successful_write_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("back_plate.dxf");
        std::fs::write(&path, "previous").unwrap();

        write_replacing(&path, |writer| Ok(writer.write_all(b"new")?)).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
