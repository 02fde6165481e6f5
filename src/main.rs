//! Sales Dashboard - renders a four-chart summary of a sales CSV.

use clap::Parser;
use sales_dashboard::config::{ConfigError, DashboardConfig};
use std::path::PathBuf;

/// Render total sales by product, region share, daily trend and top products
/// from a CSV with `Product`, `Region`, `Date` and `Sales` columns.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Sales CSV to read.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// PNG file to write.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Image width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// JSON file with paths, resolution and chart labels.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Open the image in the system viewer after saving.
    #[arg(long)]
    show: bool,
}

impl Cli {
    /// Config file values, overridden by any flag given on the command line.
    fn resolve(self) -> Result<DashboardConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::from_json_file(path)?,
            None => DashboardConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        config.show |= self.show;

        Ok(config)
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let result = Cli::parse()
        .resolve()
        .map_err(anyhow::Error::from)
        .and_then(|config| sales_dashboard::run(&config));

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
