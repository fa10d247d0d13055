//! CSV loader for salary batches.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column   | Required | Type    | Notes                                         |
//! |----------|----------|---------|-----------------------------------------------|
//! | `salary` | yes      | decimal | Gross amount, `.` as decimal separator        |
//! | `period` | no       | string  | `monthly`/`mensal` or `annual`/`anual`; empty means monthly |
//!
//! ```csv
//! salary,period
//! 7000.00,monthly
//! 120000.00,annual
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use irpf_core::Period;
use irpf_core::calculations::common::to_amount;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct CsvRow {
    // Kept as text so the amount's scale survives; csv would otherwise hand
    // `1000.00` to the decimal parser as a float.
    salary: String,
    period: Option<String>,
}

/// Errors that can occur while loading a salary batch.
#[derive(Debug, Error)]
pub enum SalaryLoaderError {
    #[error("cannot read salary file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structurally invalid CSV or missing `salary` column.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, not counting the header.
    #[error("invalid salary '{salary}' on row {row}: {source}")]
    InvalidSalary {
        salary: String,
        row: usize,
        #[source]
        source: rust_decimal::Error,
    },

    /// `row` is 1-based, not counting the header.
    #[error("unrecognised period '{period}' on row {row}")]
    InvalidPeriod { period: String, row: usize },
}

/// One salary to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRecord {
    pub salary: Decimal,
    pub period: Period,
}

impl SalaryRecord {
    /// The salary normalized to a monthly figure.
    pub fn monthly_salary(&self) -> f64 {
        self.period.to_monthly(to_amount(self.salary))
    }
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<SalaryRecord, SalaryLoaderError> {
    let salary = row
        .salary
        .parse::<Decimal>()
        .map_err(|source| SalaryLoaderError::InvalidSalary {
            salary: row.salary.clone(),
            row: row_number,
            source,
        })?;

    let period = match row.period {
        None => Period::default(),
        Some(p) if p.trim().is_empty() => Period::default(),
        Some(p) => Period::parse(&p).ok_or(SalaryLoaderError::InvalidPeriod {
            period: p,
            row: row_number,
        })?,
    };

    Ok(SalaryRecord { salary, period })
}

/// Loader for salary batches.
pub struct SalaryLoader;

impl SalaryLoader {
    /// Parse salary records from any reader. Rows are returned in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<SalaryRecord>, SalaryLoaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        reader
            .deserialize::<CsvRow>()
            .enumerate()
            .map(|(idx, result)| {
                let row = result?;
                convert_row(row, idx + 1)
            })
            .collect()
    }

    /// Convenience wrapper: open a file and delegate to [`SalaryLoader::parse`].
    pub fn load_from_file(path: &Path) -> Result<Vec<SalaryRecord>, SalaryLoaderError> {
        let file = std::fs::File::open(path).map_err(|source| SalaryLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(file)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_salary_only_defaults_to_monthly() {
        let records = SalaryLoader::parse("salary\n7000.00\n".as_bytes()).expect("should parse");

        assert_eq!(
            records,
            vec![SalaryRecord {
                salary: dec!(7000.00),
                period: Period::Monthly,
            }]
        );
    }

    #[test]
    fn parse_mixed_periods_in_file_order() {
        let csv = "\
salary,period
7000.00,monthly
120000.00,anual
5000,
";
        let records = SalaryLoader::parse(csv.as_bytes()).expect("should parse");

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].period, Period::Monthly);
        assert_eq!(records[1].period, Period::Annual);
        assert_eq!(records[2].period, Period::Monthly);
    }

    #[test]
    fn monthly_salary_divides_annual_amounts() {
        let record = SalaryRecord {
            salary: dec!(120000.00),
            period: Period::Annual,
        };

        assert_eq!(record.monthly_salary(), 10000.0);
    }

    #[test]
    fn parse_invalid_period_reports_row() {
        let csv = "salary,period\n1000,monthly\n2000,weekly\n";

        match SalaryLoader::parse(csv.as_bytes()) {
            Err(SalaryLoaderError::InvalidPeriod { period, row }) => {
                assert_eq!(period, "weekly");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidPeriod, got {:?}", other),
        }
    }

    #[test]
    fn parse_non_numeric_salary_reports_row() {
        let csv = "salary\n1000\nseven thousand\n";

        match SalaryLoader::parse(csv.as_bytes()) {
            Err(SalaryLoaderError::InvalidSalary { salary, row, .. }) => {
                assert_eq!(salary, "seven thousand");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidSalary, got {:?}", other),
        }
    }

    #[test]
    fn parse_missing_salary_column_returns_parse_error() {
        let csv = "period\nmonthly\n";

        match SalaryLoader::parse(csv.as_bytes()) {
            Err(SalaryLoaderError::Parse(_)) => { /* expected */ }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn parse_preserves_salary_scale_and_precision() {
        let csv = "salary\n1000.00\n12345678.123456789012\n";

        let records = SalaryLoader::parse(csv.as_bytes()).expect("should parse");

        assert_eq!(records[0].salary.to_string(), "1000.00");
        assert_eq!(records[1].salary.to_string(), "12345678.123456789012");
    }

    #[test]
    fn parse_column_order_does_not_matter() {
        let csv = "period , salary\nannual , 60000\n";

        let records = SalaryLoader::parse(csv.as_bytes()).expect("should parse");

        assert_eq!(records[0].salary, dec!(60000));
        assert_eq!(records[0].period, Period::Annual);
    }

    #[test]
    fn parse_header_only_returns_empty_vec() {
        let records = SalaryLoader::parse("salary,period\n".as_bytes()).expect("valid");

        assert!(records.is_empty());
    }
}
