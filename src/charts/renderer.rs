//! Dashboard Renderer
//! Draws the four summary charts into one in-memory RGB image.
//!
//! Layout:
//! 1. Title: dashboard title centered across the top
//! 2. 2x2 grid of panels:
//!    - Top left: total sales by product (vertical bars)
//!    - Top right: share of sales by region (pie)
//!    - Bottom left: daily sales trend (shaded line)
//!    - Bottom right: top products (horizontal bars)

use crate::charts::style::{anchor, PanelStyle, TITLE_RED, TITLE_SIZE};
use crate::charts::{bar, pie, top_products, trend};
use crate::config::ChartLabels;
use crate::data::Dashboard;
use log::info;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};
use thiserror::Error;

const HEADER_HEIGHT: f64 = 70.0;
const OUTER_MARGIN: f64 = 16.0;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
    #[error("Canvas size {width}x{height} is empty")]
    EmptyCanvas { width: u32, height: u32 },
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(err.to_string())
    }
}

/// A rendered dashboard: tightly packed RGB8 pixels, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Composite {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        match self.pixels.get(idx..idx + 3)? {
            &[r, g, b] => Some([r, g, b]),
            _ => None,
        }
    }
}

pub struct DashboardRenderer;

impl DashboardRenderer {
    /// Render all four panels at `width` x `height`.
    pub fn render(
        dashboard: &Dashboard,
        labels: &ChartLabels,
        (width, height): (u32, u32),
    ) -> Result<Composite, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyCanvas { width, height });
        }

        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            Self::draw(&root, dashboard, labels, &PanelStyle::for_width(width))?;
            root.present()?;
        }

        Ok(Composite {
            width,
            height,
            pixels,
        })
    }

    /// Draw the dashboard onto any plotters backend.
    pub fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        dashboard: &Dashboard,
        labels: &ChartLabels,
        style: &PanelStyle,
    ) -> Result<(), RenderError> {
        root.fill(&WHITE)?;

        let (header, body) = root.split_vertically(style.px(HEADER_HEIGHT));
        Self::draw_title(&header, &labels.title, style)?;

        let margin = style.px(OUTER_MARGIN);
        let body = body.margin(0, margin, margin, margin);
        let panels = body.split_evenly((2, 2));

        bar::draw_product_totals(&panels[0], &dashboard.products, labels, style)?;
        info!("Chart 1: sales by product - done");

        pie::draw_region_share(&panels[1], &dashboard.regions, labels, style)?;
        info!("Chart 2: share by region - done");

        trend::draw_daily_trend(&panels[2], &dashboard.daily, labels, style)?;
        info!("Chart 3: daily trend - done");

        top_products::draw_top_products(&panels[3], &dashboard.top_products, labels, style)?;
        info!("Chart 4: top products - done");

        Ok(())
    }

    fn draw_title<DB: DrawingBackend>(
        header: &DrawingArea<DB, Shift>,
        title: &str,
        style: &PanelStyle,
    ) -> Result<(), RenderError> {
        let (w, h) = header.dim_in_pixel();
        header.draw(&Text::new(
            title,
            (w as i32 / 2, h as i32 / 2),
            style
                .bold(TITLE_SIZE)
                .color(&TITLE_RED)
                .pos(anchor(HPos::Center, VPos::Center)),
        ))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fonts_available;
    use crate::data::{SalesRecord, SalesTable};

    fn sample_dashboard() -> Dashboard {
        let table: SalesTable = vec![
            SalesRecord::new("Laptop", "North", "2024-01-01", 3_500_000.0),
            SalesRecord::new("Phone", "South", "2024-01-01", 2_100_000.0),
            SalesRecord::new("Tablet", "East", "2024-01-02", 900_000.0),
            SalesRecord::new("Laptop", "West", "2024-01-03", 1_250_000.0),
            SalesRecord::new("Monitor", "North", "2024-01-04", 640_000.0),
            SalesRecord::new("Mouse", "South", "2024-01-04", 45_000.0),
            SalesRecord::new("Keyboard", "East", "2024-01-05", 120_000.0),
        ]
        .into_iter()
        .collect();
        Dashboard::from_table(&table).expect("aggregate")
    }

    fn fonts_or_skip(test: &str) -> bool {
        let ok = fonts_available();
        if !ok {
            eprintln!("{test}: skipped, no sans-serif system font");
        }
        ok
    }

    fn assert_full_canvas(composite: &Composite) {
        assert_eq!(composite.width, 1200);
        assert_eq!(composite.height, 750);
        assert_eq!(composite.pixels.len(), 1200 * 750 * 3);
        // Background is white and something was drawn on it
        assert_eq!(composite.pixel(0, 0), Some([255, 255, 255]));
        assert!(composite.pixels.iter().any(|&b| b != 255));
    }

    #[test]
    fn renders_full_canvas() {
        if !fonts_or_skip("renders_full_canvas") {
            return;
        }

        let composite =
            DashboardRenderer::render(&sample_dashboard(), &ChartLabels::default(), (1200, 750))
                .expect("render");

        assert_full_canvas(&composite);
    }

    /// Run with `--ignored` on a machine with fonts to force the drawing path.
    #[test]
    #[ignore = "needs a sans-serif system font"]
    fn renders_full_canvas_with_system_fonts() {
        assert!(fonts_available(), "no sans-serif system font found");

        let composite =
            DashboardRenderer::render(&sample_dashboard(), &ChartLabels::default(), (1200, 750))
                .expect("render");

        assert_full_canvas(&composite);
    }

    #[test]
    fn renders_empty_views() {
        if !fonts_or_skip("renders_empty_views") {
            return;
        }

        let empty = Dashboard::from_table(&SalesTable::default()).expect("aggregate");
        let composite = DashboardRenderer::render(&empty, &ChartLabels::default(), (800, 500))
            .expect("render");

        assert_eq!(composite.pixels.len(), 800 * 500 * 3);
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let err = DashboardRenderer::render(&sample_dashboard(), &ChartLabels::default(), (0, 500))
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::EmptyCanvas {
                width: 0,
                height: 500
            }
        ));
    }

    #[test]
    fn pixel_lookup_is_bounds_checked() {
        let composite = Composite {
            width: 2,
            height: 1,
            pixels: vec![1, 2, 3, 4, 5, 6],
        };
        assert_eq!(composite.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(composite.pixel(2, 0), None);
    }

    #[test]
    fn pixel_lookup_tolerates_short_buffer() {
        let composite = Composite {
            width: 2,
            height: 2,
            pixels: vec![9; 5],
        };
        assert_eq!(composite.pixel(0, 0), Some([9, 9, 9]));
        assert_eq!(composite.pixel(1, 0), None);
        assert_eq!(composite.pixel(1, 1), None);
    }
}
