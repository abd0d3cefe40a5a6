// File: crates/stock-tracker/src/main.rs
// Summary: Loads `<symbol>.csv` for each requested stock and renders one comparison chart PNG.

mod cli;
mod config;
mod logging;

use anyhow::{Context, Result};
use chart_core::PngChartRenderer;
use stock_core::{DirectoryResolver, StockTracker};
use tracing::{debug, info};

use crate::cli::{CliArgs, USAGE};
use crate::config::TrackerConfig;

fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1)).map_err(|e| anyhow::anyhow!("{e}\n\n{USAGE}"))?;
    let Some(window) = args.window.filter(|_| !args.help) else {
        println!("{USAGE}");
        return Ok(());
    };

    let mut config = match &args.config {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;

    logging::init_logging(&config.log_level);
    debug!(?config, "effective configuration");

    let output = config.output_path(window, &args.symbols);
    let resolver = DirectoryResolver::new(&config.data_dir);
    let renderer = PngChartRenderer::new(config.render_options()).with_output(&output);
    let tracker = StockTracker::new(resolver, renderer).with_load_options(config.load_options());

    info!(symbols = ?args.symbols, %window, data_dir = %config.data_dir.display(), "plotting");
    let artifact = tracker
        .plot(window, &args.symbols)
        .with_context(|| format!("failed to plot {} over {window}", args.symbols.join(", ")))?;

    println!("{}", artifact.path.as_deref().unwrap_or(&output).display());
    Ok(())
}
