//! Daily sales line with the area beneath it shaded.

use crate::charts::format;
use crate::charts::style::{
    self, PanelStyle, AXIS_DESC_SIZE, GRID_GRAY, TICK_SIZE, TREND_GREEN,
};
use crate::charts::RenderError;
use crate::config::ChartLabels;
use crate::data::DailyTotals;
use chrono::{Days, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Date labels go on every fifth day from the start of the axis.
pub const LABEL_EVERY_DAYS: i32 = 5;

pub fn draw_daily_trend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    daily: &DailyTotals,
    labels: &ChartLabels,
    style: &PanelStyle,
) -> Result<(), RenderError> {
    let (Some(&(first, _)), Some(&(last, _))) = (daily.entries().first(), daily.entries().last())
    else {
        return style::draw_placeholder(area, &labels.trend_title, style);
    };

    // A single day still needs a non-empty axis
    let (start, end) = if first == last {
        (
            first.pred_opt().unwrap_or(first),
            last.succ_opt().unwrap_or(last),
        )
    } else {
        (first, last)
    };
    let span = ((end - start).num_days() as i32).max(1);
    let offset = |day: &NaiveDate| (*day - start).num_days() as i32;
    let prefix = labels.currency_prefix.as_str();
    let y_range = style::value_axis(
        daily.min_total().unwrap_or(0.0),
        daily.max_total().unwrap_or(0.0),
        1.15,
    );

    // x is whole days since `start`
    let mut chart = ChartBuilder::on(area)
        .caption(&labels.trend_title, style.panel_title())
        .margin(style.px(10.0))
        .margin_right(style.px(30.0))
        .x_label_area_size(style.px(60.0))
        .y_label_area_size(style.px(100.0))
        .build_cartesian_2d(0..span, y_range)?;

    let x_label = |days: &i32| tick_label(start, *days).unwrap_or_default();
    let y_label = |v: &f64| format::currency(*v, prefix);

    chart
        .configure_mesh()
        .light_line_style(WHITE.mix(0.0))
        .bold_line_style(GRID_GRAY.mix(0.3))
        .x_labels((span / LABEL_EVERY_DAYS + 1) as usize)
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .label_style(style.font(TICK_SIZE))
        .x_desc(labels.trend_x_axis.as_str())
        .y_desc(labels.trend_y_axis.as_str())
        .axis_desc_style(style.bold(AXIS_DESC_SIZE))
        .draw()?;

    chart.draw_series(
        AreaSeries::new(
            daily.iter().map(|(day, total)| (offset(day), *total)),
            0.0,
            TREND_GREEN.mix(0.2),
        )
        .border_style(TREND_GREEN.stroke_width(style.px(3.0))),
    )?;

    // White markers with a green ring
    let radius = style.px(5.0) as i32;
    let ring = TREND_GREEN.stroke_width(style.px(2.0));
    chart.draw_series(daily.iter().map(|(day, total)| {
        EmptyElement::at((offset(day), *total))
            + Circle::new((0, 0), radius, WHITE.filled())
            + Circle::new((0, 0), radius, ring)
    }))?;

    Ok(())
}

/// `%b %d` label for the tick `days` after `start`, or `None` between labels.
pub fn tick_label(start: NaiveDate, days: i32) -> Option<String> {
    if days < 0 || days % LABEL_EVERY_DAYS != 0 {
        return None;
    }
    let day = start.checked_add_days(Days::new(days as u64))?;
    Some(day.format("%b %d").to_string())
}
