//! Sales Aggregator Module
//! Group-by-and-sum summaries over a `SalesTable`.

use crate::data::record::SalesTable;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;

/// Number of entries in the top-products view.
pub const TOP_PRODUCTS: usize = 5;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    #[error("Row {row}: cannot parse date {value:?}")]
    DateParse { row: usize, value: String },
}

/// Ordered key → total mapping derived from a table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView<K> {
    entries: Vec<(K, f64)>,
}

pub type ProductTotals = SummaryView<String>;
pub type RegionTotals = SummaryView<String>;
pub type DailyTotals = SummaryView<NaiveDate>;
pub type TopProducts = SummaryView<String>;

impl<K> SummaryView<K> {
    pub fn new(entries: Vec<(K, f64)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(K, f64)] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (K, f64)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    /// Grand total over all entries.
    pub fn total(&self) -> f64 {
        self.values().sum()
    }

    pub fn max_total(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }

    pub fn min_total(&self) -> Option<f64> {
        self.values().reduce(f64::min)
    }
}

impl<K: Clone> SummaryView<K> {
    /// First `n` entries, or all of them when there are fewer.
    pub fn prefix(&self, n: usize) -> Self {
        Self::new(self.entries.iter().take(n).cloned().collect())
    }
}

impl<'a, K> IntoIterator for &'a SummaryView<K> {
    type Item = &'a (K, f64);
    type IntoIter = std::slice::Iter<'a, (K, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Group `items` by `key_of` and sum `value_of` per group. Groups come out in
/// the order their key was first seen.
pub fn group_sum<T, K, FK, FV>(
    items: impl IntoIterator<Item = T>,
    mut key_of: FK,
    mut value_of: FV,
) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    FK: FnMut(&T) -> K,
    FV: FnMut(&T) -> f64,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, f64)> = Vec::new();

    for item in items {
        let key = key_of(&item);
        let value = value_of(&item);
        match slots.get(&key) {
            Some(&idx) => groups[idx].1 += value,
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push((key, value));
            }
        }
    }

    groups
}

/// Parse a date cell to a calendar date, dropping any time of day.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Sales per product, largest first. Equal totals keep first-seen order.
pub fn totals_by_product(table: &SalesTable) -> ProductTotals {
    let mut groups = group_sum(table, |r| r.product.clone(), |r| r.sales);
    // sort_by is stable
    groups.sort_by(|a, b| b.1.total_cmp(&a.1));
    SummaryView::new(groups)
}

/// Sales per region in first-seen order.
pub fn totals_by_region(table: &SalesTable) -> RegionTotals {
    SummaryView::new(group_sum(table, |r| r.region.clone(), |r| r.sales))
}

/// Sales per calendar day, oldest first.
pub fn totals_by_day(table: &SalesTable) -> Result<DailyTotals, AggregateError> {
    let dated = table
        .iter()
        .enumerate()
        .map(|(i, r)| {
            parse_calendar_date(&r.date)
                .map(|day| (day, r.sales))
                .ok_or_else(|| AggregateError::DateParse {
                    row: i + 1,
                    value: r.date.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut groups = group_sum(dated, |(day, _)| *day, |(_, sales)| *sales);
    groups.sort_by_key(|(day, _)| *day);
    Ok(SummaryView::new(groups))
}

/// The `n` best-selling products from an already sorted product view.
pub fn top_n(product_totals: &ProductTotals, n: usize) -> TopProducts {
    product_totals.prefix(n)
}

/// The four summary views drawn on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub products: ProductTotals,
    pub regions: RegionTotals,
    pub daily: DailyTotals,
    pub top_products: TopProducts,
}

impl Dashboard {
    pub fn from_table(table: &SalesTable) -> Result<Self, AggregateError> {
        let products = totals_by_product(table);
        let regions = totals_by_region(table);
        let daily = totals_by_day(table)?;
        let top_products = top_n(&products, TOP_PRODUCTS);

        Ok(Self {
            products,
            regions,
            daily,
            top_products,
        })
    }
}
