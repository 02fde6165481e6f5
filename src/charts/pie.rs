//! Pie chart of each region's share of total sales.

use crate::charts::format;
use crate::charts::style::{self, PanelStyle, AXIS_DESC_SIZE, PIE_PALETTE};
use crate::charts::RenderError;
use crate::config::ChartLabels;
use crate::data::RegionTotals;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;

pub fn draw_region_share<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    regions: &RegionTotals,
    labels: &ChartLabels,
    style: &PanelStyle,
) -> Result<(), RenderError> {
    let grand_total = regions.total();
    if regions.is_empty() || grand_total <= 0.0 {
        return style::draw_placeholder(area, &labels.region_title, style);
    }

    let area = area.titled(&labels.region_title, style.panel_title())?;
    let (w, h) = area.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = w.min(h) as f64 * 0.36;

    let sizes: Vec<f64> = regions.values().map(|v| v.max(0.0)).collect();
    let colors: Vec<RGBColor> = (0..sizes.len())
        .map(|i| PIE_PALETTE[i % PIE_PALETTE.len()])
        .collect();
    let wedge_labels: Vec<String> = regions
        .iter()
        .map(|(region, total)| format::share_label(region, *total, grand_total))
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &wedge_labels);
    // first wedge starts at twelve o'clock
    pie.start_angle(-90.0);
    pie.label_style(style.bold(AXIS_DESC_SIZE).color(&BLACK));
    area.draw(&pie)?;

    Ok(())
}
