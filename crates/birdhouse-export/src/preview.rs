//! Assembly preview
//!
//! A [`Viewer`] receives every placed part with its name and color.
//! [`StlPreview`] writes one ASCII STL per part plus a `preview.json`
//! manifest that any mesh viewer can use to load and tint the parts.

use std::path::{Path, PathBuf};

use birdhouse_core::{ExportError, ExportResult};
use birdhouse_panels::{AssemblyPart, PanelKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Manifest file written next to the meshes.
pub const MANIFEST_FILE: &str = "preview.json";

/// Receives placed parts for display.
pub trait Viewer {
    fn show(&mut self, part: &AssemblyPart) -> ExportResult<()>;

    /// Called once after the last part.
    fn finish(&mut self) -> ExportResult<()> {
        Ok(())
    }
}

/// Discards every part.
#[derive(Debug, Default)]
pub struct NullViewer;

impl Viewer for NullViewer {
    fn show(&mut self, part: &AssemblyPart) -> ExportResult<()> {
        debug!("Skipping preview of {}", part.name);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewEntry {
    pub name: String,
    pub kind: PanelKind,
    /// `#rrggbb`
    pub color: String,
    pub file: String,
}

/// Writes STL meshes and a manifest into a directory.
pub struct StlPreview {
    dir: PathBuf,
    entries: Vec<PreviewEntry>,
}

impl StlPreview {
    pub fn new(dir: impl Into<PathBuf>) -> ExportResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            entries: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[PreviewEntry] {
        &self.entries
    }
}

impl Viewer for StlPreview {
    fn show(&mut self, part: &AssemblyPart) -> ExportResult<()> {
        if self.entries.iter().any(|e| e.name == part.name) {
            return Err(ExportError::Preview(format!(
                "part '{}' shown twice",
                part.name
            )));
        }

        let file = format!("{}.stl", part.name);
        std::fs::write(self.dir.join(&file), part.mesh.to_stl_ascii(&part.name))?;
        debug!("Preview {} ({})", part.name, part.color.hex());

        self.entries.push(PreviewEntry {
            name: part.name.clone(),
            kind: part.kind,
            color: part.color.hex(),
            file,
        });
        Ok(())
    }

    fn finish(&mut self) -> ExportResult<()> {
        let manifest = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| ExportError::Preview(format!("manifest: {}", e)))?;
        let path = self.dir.join(MANIFEST_FILE);
        std::fs::write(&path, manifest)?;
        info!(
            "Wrote preview of {} parts to {}",
            self.entries.len(),
            self.dir.display()
        );
        Ok(())
    }
}

/// Send every part to the viewer, then let it finish.
pub fn show_all(parts: &[AssemblyPart], viewer: &mut dyn Viewer) -> ExportResult<()> {
    for part in parts {
        viewer.show(part)?;
    }
    viewer.finish()
}
