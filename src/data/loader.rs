//! CSV Data Loader Module
//! Loads the sales CSV with Polars and converts it into a `SalesTable`.

use crate::data::record::{SalesRecord, SalesTable, REQUIRED_COLUMNS};
use log::debug;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load CSV")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("Row {row}: empty or invalid {column} value")]
    InvalidValue { row: usize, column: &'static str },
}

/// Handles CSV file loading with Polars.
#[derive(Debug, Default)]
pub struct DataLoader;

impl DataLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a sales CSV. The header must name `Product`, `Region`, `Date` and
    /// `Sales`; other columns are ignored.
    pub fn load_csv(&self, file_path: impl AsRef<Path>) -> Result<SalesTable, LoadError> {
        let file_path = file_path.as_ref();
        std::fs::metadata(file_path).map_err(|source| LoadError::Read {
            path: file_path.to_path_buf(),
            source,
        })?;

        // Every column is read as text; `to_records` does the typing, so a
        // late decimal or a late non-numeric code cannot be nulled by inference.
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let columns = Self::column_names(&df);
        Self::check_columns(&columns)?;
        debug!("{} rows read from {}", df.height(), file_path.display());

        let records = Self::to_records(&df)?;
        Ok(SalesTable::new(records).with_columns(columns))
    }

    fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn check_columns(columns: &[String]) -> Result<(), LoadError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !columns.iter().any(|c| c == *required))
            .map(|required| required.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(LoadError::MissingColumns(missing))
        }
    }

    fn to_records(df: &DataFrame) -> Result<Vec<SalesRecord>, LoadError> {
        let product = df.column("Product")?.cast(&DataType::String)?;
        let region = df.column("Region")?.cast(&DataType::String)?;
        let date = df.column("Date")?.cast(&DataType::String)?;
        let sales = df.column("Sales")?.cast(&DataType::Float64)?;

        let product = product.as_materialized_series().str()?;
        let region = region.as_materialized_series().str()?;
        let date = date.as_materialized_series().str()?;
        let sales = sales.as_materialized_series().f64()?;

        let mut records = Vec::with_capacity(df.height());
        for (i, (((p, r), d), s)) in product
            .into_iter()
            .zip(region.into_iter())
            .zip(date.into_iter())
            .zip(sales.into_iter())
            .enumerate()
        {
            let row = i + 1;
            let product = Self::text(p, row, "Product")?;
            let region = Self::text(r, row, "Region")?;
            let date = Self::text(d, row, "Date")?;
            let sales = match s {
                Some(v) if v.is_finite() => v,
                _ => return Err(LoadError::InvalidValue { row, column: "Sales" }),
            };
            records.push(SalesRecord::new(product, region, date, sales));
        }

        Ok(records)
    }

    fn text(value: Option<&str>, row: usize, column: &'static str) -> Result<String, LoadError> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
            _ => Err(LoadError::InvalidValue { row, column }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file.flush().expect("flush temp csv");
        file
    }

    #[test]
    fn loads_rows_in_file_order() {
        let file = csv_file(
            "Product,Region,Date,Sales\n\
             Laptop,North,2024-01-01,1200.50\n\
             Mouse,South,2024-01-02,25\n",
        );

        let table = DataLoader::new().load_csv(file.path()).expect("load");

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.records()[0],
            SalesRecord::new("Laptop", "North", "2024-01-01", 1200.5)
        );
        assert_eq!(table.records()[1].sales, 25.0);
    }

    #[test]
    fn integer_sales_and_extra_columns_are_accepted() {
        let file = csv_file(
            "Date,Product,Units,Region,Sales\n\
             2024-03-01,Desk,2,East,300\n",
        );

        let table = DataLoader::new().load_csv(file.path()).expect("load");

        assert_eq!(table.columns(), &["Date", "Product", "Units", "Region", "Sales"]);
        assert_eq!(
            table.records()[0],
            SalesRecord::new("Desk", "East", "2024-03-01", 300.0)
        );
    }

    #[test]
    fn late_decimal_and_late_text_code_still_load() {
        let mut contents = String::from("Product,Region,Date,Sales\n");
        for _ in 0..10_001 {
            contents.push_str("1001,North,2024-01-01,1\n");
        }
        contents.push_str("Widget,South,2024-01-02,12.5\n");
        let file = csv_file(&contents);

        let table = DataLoader::new().load_csv(file.path()).expect("load");

        assert_eq!(table.len(), 10_002);
        assert_eq!(table.total_sales(), 10_013.5);
        assert_eq!(table.records()[0].product, "1001");
        assert_eq!(
            table.records()[10_001],
            SalesRecord::new("Widget", "South", "2024-01-02", 12.5)
        );
    }

    #[test]
    fn missing_sales_column_is_reported() {
        let file = csv_file("Product,Region,Date\nA,North,2024-01-01\n");

        let err = DataLoader::new().load_csv(file.path()).unwrap_err();

        match err {
            LoadError::MissingColumns(cols) => assert_eq!(cols, vec!["Sales".to_string()]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn every_missing_column_is_listed() {
        let file = csv_file("Item,Amount\nA,1\n");

        let err = DataLoader::new().load_csv(file.path()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Missing required column(s): Product, Region, Date, Sales"
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nope.csv");

        let err = DataLoader::new().load_csv(&path).unwrap_err();

        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn non_numeric_sales_is_rejected() {
        let file = csv_file(
            "Product,Region,Date,Sales\n\
             A,North,2024-01-01,100\n\
             B,South,2024-01-02,lots\n",
        );

        let err = DataLoader::new().load_csv(file.path()).unwrap_err();

        assert!(matches!(
            err,
            LoadError::InvalidValue {
                row: 2,
                column: "Sales"
            }
        ));
    }

    #[test]
    fn empty_product_is_rejected() {
        let file = csv_file("Product,Region,Date,Sales\n,North,2024-01-01,100\n");

        let err = DataLoader::new().load_csv(file.path()).unwrap_err();

        assert!(matches!(
            err,
            LoadError::InvalidValue {
                row: 1,
                column: "Product"
            }
        ));
    }
}
