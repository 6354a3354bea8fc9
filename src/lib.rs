//! # Birdhouse
//!
//! Parametric generator for a laser-cut birdhouse held together by finger
//! joints. One run produces a DXF file per distinct panel and, on request,
//! an STL preview of the assembled house.
//!
//! ## Architecture
//!
//! 1. **birdhouse-core** - Parameters, derived dimensions, error types
//! 2. **birdhouse-panels** - Connector rows, panel profiles, assembly placement
//! 3. **birdhouse-export** - DXF construction files and STL preview
//! 4. **birdhouse** - Command line binary tying the crates together

pub mod cli;

use std::path::PathBuf;

use anyhow::Context;
use birdhouse_core::BirdhouseParameters;
use birdhouse_export::{show_all, DxfExporter, NullViewer, StlPreview, Viewer};
use birdhouse_panels::Birdhouse;
use tracing::info;

pub use birdhouse_core::{Dimensions, Error, Result};
pub use birdhouse_panels::{Panel, PanelKind};
pub use cli::Cli;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Files produced by one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub dxf_files: Vec<PathBuf>,
    pub preview_parts: usize,
}

/// Initialize logging with the default configuration
///
/// Console output with pretty formatting, filtered through `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("logging already initialized")?;

    Ok(())
}

/// Parameters from `path`, or the built-in ones.
pub fn load_parameters(path: Option<&std::path::Path>) -> anyhow::Result<BirdhouseParameters> {
    match path {
        Some(path) => BirdhouseParameters::load_from_file(path)
            .with_context(|| format!("loading parameters from {}", path.display())),
        None => Ok(BirdhouseParameters::default()),
    }
}

/// Build the birdhouse and write every requested file.
pub fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let params = load_parameters(cli.params.as_deref())?;
    info!(
        "Birdhouse {}x{}x{} mm, {} mm stock",
        params.width, params.depth, params.height, params.wall_thickness
    );

    let house = Birdhouse::build(params)?;

    if let Some(path) = &cli.save_params {
        house
            .params()
            .save_to_file(path)
            .with_context(|| format!("saving parameters to {}", path.display()))?;
        info!("Saved parameters to {}", path.display());
    }

    let exporter = DxfExporter::new(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let dxf_files = exporter.export_all(&house)?;

    let mut viewer: Box<dyn Viewer> = match &cli.preview {
        Some(dir) => Box::new(StlPreview::new(dir)?),
        None => Box::new(NullViewer),
    };
    let parts = house.assembly();
    show_all(&parts, viewer.as_mut())?;

    Ok(RunSummary {
        dxf_files,
        preview_parts: if cli.preview.is_some() { parts.len() } else { 0 },
    })
}
