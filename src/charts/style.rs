//! Chart Style Module
//! Colors, font sizes and the helpers every panel shares.

use crate::charts::RenderError;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;

pub const TITLE_RED: RGBColor = RGBColor(197, 40, 47); // #C5282F
pub const BAR_BLUE: RGBColor = RGBColor(0, 119, 190); // #0077BE
pub const NAVY: RGBColor = RGBColor(0, 0, 128);
pub const TREND_GREEN: RGBColor = RGBColor(40, 167, 69); // #28A745
pub const TOP_RED: RGBColor = RGBColor(220, 53, 69); // #DC3545
pub const DARK_RED: RGBColor = RGBColor(139, 0, 0);
pub const GRID_GRAY: RGBColor = RGBColor(128, 128, 128);

/// Pie wedge colors, cycled when there are more regions.
pub const PIE_PALETTE: [RGBColor; 5] = [
    TITLE_RED,
    BAR_BLUE,
    TREND_GREEN,
    RGBColor(255, 193, 7),  // Amber
    RGBColor(111, 66, 193), // Purple
];

// Font sizes in pixels on a 1600 px wide canvas
pub const TITLE_SIZE: f64 = 30.0;
pub const PANEL_TITLE_SIZE: f64 = 20.0;
pub const AXIS_DESC_SIZE: f64 = 15.0;
pub const TICK_SIZE: f64 = 13.0;
pub const ANNOTATION_SIZE: f64 = 12.0;

/// Sizes scaled to the canvas width.
#[derive(Debug, Clone, Copy)]
pub struct PanelStyle {
    scale: f64,
}

impl PanelStyle {
    pub const BASE_WIDTH: f64 = 1600.0;

    pub fn for_width(width: u32) -> Self {
        Self {
            scale: width as f64 / Self::BASE_WIDTH,
        }
    }

    /// Pixel length for a length given at the base width.
    pub fn px(&self, base: f64) -> u32 {
        (base * self.scale).round().max(1.0) as u32
    }

    pub fn font(&self, size: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, size * self.scale, FontStyle::Normal)
    }

    pub fn bold(&self, size: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, size * self.scale, FontStyle::Bold)
    }

    pub fn panel_title(&self) -> FontDesc<'static> {
        self.bold(PANEL_TITLE_SIZE)
    }
}

pub fn anchor(h: HPos, v: VPos) -> Pos {
    Pos::new(h, v)
}

/// Value axis covering `min..max` from zero, padded by `headroom` for labels.
pub fn value_axis(min: f64, max: f64, headroom: f64) -> Range<f64> {
    let lo = if min < 0.0 { min * headroom } else { 0.0 };
    let hi = if max > 0.0 { max * headroom } else { 0.0 };
    if hi > lo {
        lo..hi
    } else {
        lo..lo + 1.0
    }
}

/// Title plus a "No data" note, for a view without entries.
pub fn draw_placeholder<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    style: &PanelStyle,
) -> Result<(), RenderError> {
    let area = area.titled(title, style.panel_title())?;
    let (w, h) = area.dim_in_pixel();
    area.draw(&Text::new(
        "No data",
        (w as i32 / 2, h as i32 / 2),
        style
            .font(AXIS_DESC_SIZE)
            .color(&GRID_GRAY)
            .pos(anchor(HPos::Center, VPos::Center)),
    ))?;
    Ok(())
}

/// Whether the sans-serif family resolves to a usable system font.
pub fn fonts_available() -> bool {
    [FontStyle::Normal, FontStyle::Bold].into_iter().all(|weight| {
        FontDesc::new(FontFamily::SansSerif, 12.0, weight)
            .box_size("0")
            .is_ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_axis_starts_at_zero() {
        assert_eq!(value_axis(10.0, 200.0, 1.5), 0.0..300.0);
    }

    #[test]
    fn value_axis_spans_negative_values() {
        let range = value_axis(-100.0, 50.0, 1.25);
        assert_eq!(range.start, -125.0);
        assert_eq!(range.end, 62.5);
    }

    #[test]
    fn value_axis_never_collapses() {
        assert_eq!(value_axis(0.0, 0.0, 1.15), 0.0..1.0);
    }

    #[test]
    fn sizes_scale_with_width() {
        let style = PanelStyle::for_width(3200);
        assert_eq!(style.px(10.0), 20);
        assert_eq!(PanelStyle::for_width(800).px(1.0), 1);
    }
}
