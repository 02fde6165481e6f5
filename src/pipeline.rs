//! Load → aggregate → render → export, once.

use crate::charts::DashboardRenderer;
use crate::config::DashboardConfig;
use crate::data::{Dashboard, DataLoader};
use crate::export::Exporter;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

/// Run the whole dashboard pipeline and return the path of the saved image.
pub fn run(config: &DashboardConfig) -> Result<PathBuf> {
    config.validate()?;

    info!("Step 1: loading data from {}", config.input.display());
    let table = DataLoader::new()
        .load_csv(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;
    info!("Data loaded: {} records", table.len());
    info!("Columns: {:?}", table.columns());

    info!("Step 2: aggregating sales");
    let dashboard = Dashboard::from_table(&table).context("aggregating sales")?;
    info!(
        "{} products, {} regions, {} days",
        dashboard.products.len(),
        dashboard.regions.len(),
        dashboard.daily.len()
    );

    let (width, height) = config.resolution();
    info!("Step 3: rendering dashboard ({}x{})", width, height);
    let composite = DashboardRenderer::render(&dashboard, &config.labels, (width, height))
        .context("rendering dashboard")?;

    info!("Step 4: saving dashboard");
    let saved = Exporter::save_png(&composite, &config.output).context("saving dashboard")?;
    info!("Dashboard saved as {}", saved.display());

    if config.show {
        // The image is already on disk; a missing viewer is not fatal
        if let Err(err) = Exporter::display(&saved) {
            warn!("{}", err);
        }
    }

    Ok(saved)
}
