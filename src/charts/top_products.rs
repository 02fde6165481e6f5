//! Horizontal bar chart of the best-selling products.

use crate::charts::format;
use crate::charts::style::{
    self, anchor, PanelStyle, ANNOTATION_SIZE, AXIS_DESC_SIZE, DARK_RED, GRID_GRAY, TICK_SIZE,
    TOP_RED,
};
use crate::charts::RenderError;
use crate::config::ChartLabels;
use crate::data::TopProducts;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

/// Largest total on the top row, each bar labeled at its end.
pub fn draw_top_products<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    top: &TopProducts,
    labels: &ChartLabels,
    style: &PanelStyle,
) -> Result<(), RenderError> {
    if top.is_empty() {
        return style::draw_placeholder(area, &labels.top_title, style);
    }

    let names: Vec<&str> = top.keys().map(String::as_str).collect();
    let n = names.len() as u32;
    let prefix = labels.currency_prefix.as_str();
    let x_range = style::value_axis(
        top.min_total().unwrap_or(0.0),
        top.max_total().unwrap_or(0.0),
        1.3,
    );

    let mut chart = ChartBuilder::on(area)
        .caption(&labels.top_title, style.panel_title())
        .margin(style.px(10.0))
        .margin_right(style.px(30.0))
        .x_label_area_size(style.px(60.0))
        .y_label_area_size(style.px(140.0))
        .build_cartesian_2d(x_range, (0..n).into_segmented())?;

    let x_label = |v: &f64| format::currency(*v, prefix);
    let y_label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(row) => name_at_row(&names, *row).unwrap_or_default().to_string(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(WHITE.mix(0.0))
        .bold_line_style(GRID_GRAY.mix(0.3))
        .x_labels(5)
        .x_label_formatter(&x_label)
        .x_label_style(style.font(TICK_SIZE))
        .y_labels(names.len())
        .y_label_formatter(&y_label)
        .y_label_style(style.bold(TICK_SIZE))
        .x_desc(labels.top_axis.as_str())
        .axis_desc_style(style.bold(AXIS_DESC_SIZE))
        .draw()?;

    let gap = style.px(10.0);
    let bar = |rank: usize, total: f64, shape: ShapeStyle| {
        let row = row_of(rank, n);
        let mut rect = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(row)),
                (total, SegmentValue::Exact(row + 1)),
            ],
            shape,
        );
        rect.set_margin(gap, gap, 0, 0);
        rect
    };

    chart.draw_series(
        top.values()
            .enumerate()
            .map(|(rank, total)| bar(rank, total, TOP_RED.mix(0.9).filled())),
    )?;
    chart.draw_series(
        top.values()
            .enumerate()
            .map(|(rank, total)| bar(rank, total, DARK_RED.stroke_width(1))),
    )?;

    let nudge = style.px(6.0) as i32;
    let annotation = style
        .bold(ANNOTATION_SIZE)
        .color(&BLACK)
        .pos(anchor(HPos::Left, VPos::Center));
    let texts = format::currency_labels(top.values(), prefix);
    chart.draw_series(top.values().zip(texts).enumerate().map(|(rank, (total, text))| {
        EmptyElement::at((total, SegmentValue::CenterOf(row_of(rank, n))))
            + Text::new(text, (nudge, 0), annotation.clone())
    }))?;

    Ok(())
}

/// Plot row for the entry at `rank` among `n`. Row 0 is the bottom of the
/// plot, so rank 0 lands on the top row.
pub fn row_of(rank: usize, n: u32) -> u32 {
    n.saturating_sub(1).saturating_sub(rank as u32)
}

/// Name shown beside `row`, the inverse of [`row_of`].
pub fn name_at_row<'a>(names: &[&'a str], row: u32) -> Option<&'a str> {
    let rank = (names.len() as u32).checked_sub(row.checked_add(1)?)?;
    names.get(rank as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_total_is_on_the_top_row() {
        assert_eq!(row_of(0, 5), 4);
        assert_eq!(row_of(4, 5), 0);
        assert_eq!(row_of(0, 1), 0);
    }

    #[test]
    fn row_labels_follow_rank() {
        let names = ["Laptop", "Phone", "Tablet"];

        assert_eq!(name_at_row(&names, 2), Some("Laptop"));
        assert_eq!(name_at_row(&names, 0), Some("Tablet"));
        assert_eq!(name_at_row(&names, 3), None);
        for (rank, name) in names.iter().enumerate() {
            assert_eq!(name_at_row(&names, row_of(rank, 3)), Some(*name));
        }
    }
}
