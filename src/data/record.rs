//! Sales Record Module
//! Row and table types shared by the loader and the aggregator.

/// Columns every sales file must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Product", "Region", "Date", "Sales"];

/// One sales row. `date` keeps the text read from the file; it is parsed to a
/// calendar date only when daily totals are computed.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub product: String,
    pub region: String,
    pub date: String,
    pub sales: f64,
}

impl SalesRecord {
    pub fn new(
        product: impl Into<String>,
        region: impl Into<String>,
        date: impl Into<String>,
        sales: f64,
    ) -> Self {
        Self {
            product: product.into(),
            region: region.into(),
            date: date.into(),
            sales,
        }
    }
}

/// Read-only, ordered set of sales rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
    columns: Vec<String>,
}

impl SalesTable {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self {
            records,
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Attach the column names found in the source file.
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    /// Column names of the source file, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Sum of `Sales` over every row.
    pub fn total_sales(&self) -> f64 {
        self.records.iter().map(|r| r.sales).sum()
    }
}

impl FromIterator<SalesRecord> for SalesTable {
    fn from_iter<I: IntoIterator<Item = SalesRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SalesTable {
    type Item = &'a SalesRecord;
    type IntoIter = std::slice::Iter<'a, SalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
