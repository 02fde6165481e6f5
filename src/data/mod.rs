//! Data module - CSV loading and aggregation

mod aggregator;
mod loader;
mod record;

pub use aggregator::{
    group_sum, parse_calendar_date, top_n, totals_by_day, totals_by_product, totals_by_region,
    AggregateError, DailyTotals, Dashboard, ProductTotals, RegionTotals, SummaryView,
    TopProducts, TOP_PRODUCTS,
};
pub use loader::{DataLoader, LoadError};
pub use record::{SalesRecord, SalesTable, REQUIRED_COLUMNS};
