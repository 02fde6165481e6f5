//! Sales Dashboard - CSV sales summary rendered as a four-chart PNG
//!
//! Loads a `Product, Region, Date, Sales` CSV, aggregates it four ways and
//! draws the results into one image.

pub mod charts;
pub mod config;
pub mod data;
pub mod export;
pub mod pipeline;

pub use config::{ChartLabels, DashboardConfig};
pub use pipeline::run;
