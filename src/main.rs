use birdhouse::{init_logging, run, Cli, BUILD_DATE, VERSION};
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    info!("birdhouse {} (built {})", VERSION, BUILD_DATE);

    let summary = run(&cli)?;
    info!(
        "Done: {} construction files in {}",
        summary.dxf_files.len(),
        cli.output.display()
    );
    Ok(())
}
