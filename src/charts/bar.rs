//! Vertical bar chart of total sales per product.

use crate::charts::format;
use crate::charts::style::{
    self, anchor, PanelStyle, ANNOTATION_SIZE, AXIS_DESC_SIZE, BAR_BLUE, GRID_GRAY, NAVY,
    TICK_SIZE,
};
use crate::charts::RenderError;
use crate::config::ChartLabels;
use crate::data::ProductTotals;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

/// One bar per product, in view order, each annotated with its total.
pub fn draw_product_totals<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    totals: &ProductTotals,
    labels: &ChartLabels,
    style: &PanelStyle,
) -> Result<(), RenderError> {
    if totals.is_empty() {
        return style::draw_placeholder(area, &labels.product_title, style);
    }

    let names: Vec<&str> = totals.keys().map(String::as_str).collect();
    let n = names.len() as u32;
    let prefix = labels.currency_prefix.as_str();
    let y_range = style::value_axis(
        totals.min_total().unwrap_or(0.0),
        totals.max_total().unwrap_or(0.0),
        1.15,
    );

    let mut chart = ChartBuilder::on(area)
        .caption(&labels.product_title, style.panel_title())
        .margin(style.px(10.0))
        .x_label_area_size(style.px(110.0))
        .y_label_area_size(style.px(100.0))
        .build_cartesian_2d((0..n).into_segmented(), y_range)?;

    let x_label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) => names
            .get(*i as usize)
            .map(|name| name.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };
    let y_label = |v: &f64| format::currency(*v, prefix);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE.mix(0.0))
        .bold_line_style(GRID_GRAY.mix(0.3))
        .x_labels(names.len())
        .x_label_formatter(&x_label)
        .x_label_style(style.font(TICK_SIZE).transform(FontTransform::Rotate90))
        .y_label_formatter(&y_label)
        .y_label_style(style.font(TICK_SIZE))
        .y_desc(labels.product_axis.as_str())
        .axis_desc_style(style.bold(AXIS_DESC_SIZE))
        .draw()?;

    let gap = style.px(12.0);
    let bar = |i: usize, total: f64, shape: ShapeStyle| {
        let i = i as u32;
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), total),
            ],
            shape,
        );
        rect.set_margin(0, 0, gap, gap);
        rect
    };

    chart.draw_series(
        totals
            .values()
            .enumerate()
            .map(|(i, total)| bar(i, total, BAR_BLUE.mix(0.8).filled())),
    )?;
    chart.draw_series(
        totals
            .values()
            .enumerate()
            .map(|(i, total)| bar(i, total, NAVY.stroke_width(1))),
    )?;

    // Totals sit just above each bar
    let lift = style.px(4.0) as i32;
    let annotation = style
        .font(ANNOTATION_SIZE)
        .color(&BLACK)
        .pos(anchor(HPos::Center, VPos::Bottom));
    let texts = format::currency_labels(totals.values(), prefix);
    chart.draw_series(totals.values().zip(texts).enumerate().map(|(i, (total, text))| {
        EmptyElement::at((SegmentValue::CenterOf(i as u32), total))
            + Text::new(text, (0, -lift), annotation.clone())
    }))?;

    Ok(())
}
