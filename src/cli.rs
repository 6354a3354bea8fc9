//! Command line arguments

use std::path::PathBuf;

use birdhouse_export::DEFAULT_OUTPUT_DIR;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "birdhouse")]
#[command(version)]
#[command(about = "Generates laser-cut construction files for a finger-jointed birdhouse.", long_about = None)]
pub struct Cli {
    /// Parameter file (.json or .toml). Built-in dimensions when omitted.
    #[arg(long, short)]
    pub params: Option<PathBuf>,
    /// Directory the DXF files are written to.
    #[arg(long, short, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
    /// Write an STL preview of the assembly into this directory.
    #[arg(long)]
    pub preview: Option<PathBuf>,
    /// Save the effective parameters to this file and continue.
    #[arg(long)]
    pub save_params: Option<PathBuf>,
}
