//! CSV export of batch calculations.
//!
//! Each input row produces one output row:
//!
//! | Column             | Notes                                          |
//! |--------------------|------------------------------------------------|
//! | `salary`           | amount as read from the input                  |
//! | `period`           | `monthly` or `annual`                          |
//! | `monthly_salary`   | normalized salary, 0 when the input is unusable |
//! | `rule_applied`     | `exemption`, `discount`, `standard`, `initial` |
//! | `current_tax`      | centavos, half-up                              |
//! | `final_tax`        | centavos, half-up                              |
//! | `net_difference`   | centavos, half-up                              |
//! | `discount_applied` | fraction; empty unless `rule_applied` is `discount` |

use std::io::Write;

use irpf_core::calculations::common::to_currency;
use irpf_core::{Period, ProposedRules, RuleApplied, calculate_proposed_ir};
use irpf_data::SalaryRecord;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct ResultRow {
    salary: Decimal,
    period: Period,
    monthly_salary: Option<Decimal>,
    rule_applied: RuleApplied,
    current_tax: Option<Decimal>,
    final_tax: Option<Decimal>,
    net_difference: Option<Decimal>,
    discount_applied: Option<f64>,
}

/// Evaluates every record against `rules` and writes one CSV row per record.
///
/// Returns the number of rows written.
pub fn write_results<W: Write>(
    records: &[SalaryRecord],
    rules: &ProposedRules,
    writer: W,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        let result = calculate_proposed_ir(record.monthly_salary(), rules);
        debug!(
            salary = %record.salary,
            rule = result.rule_applied().as_str(),
            "evaluated batch row"
        );

        csv_writer.serialize(ResultRow {
            salary: record.salary,
            period: record.period,
            monthly_salary: to_currency(result.monthly_salary),
            rule_applied: result.rule_applied(),
            current_tax: to_currency(result.current_tax),
            final_tax: to_currency(result.final_tax),
            net_difference: to_currency(result.net_difference),
            discount_applied: result.discount_applied(),
        })?;
    }

    csv_writer.flush()?;
    Ok(records.len())
}
