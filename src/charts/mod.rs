//! Charts module - Chart rendering

pub mod bar;
pub mod format;
pub mod pie;
mod renderer;
pub mod style;
pub mod top_products;
pub mod trend;

pub use renderer::{Composite, DashboardRenderer, RenderError};
pub use style::{fonts_available, PanelStyle};
