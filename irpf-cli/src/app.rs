//! Glue between user input, the rules configuration and the calculator.

use std::path::Path;

use anyhow::{Context, Result};
use irpf_core::calculations::common::to_amount;
use irpf_core::{CalculationResult, Period, ProposedRules, calculate_proposed_ir};
use irpf_data::RulesLoader;
use tracing::{debug, info};

use crate::utils::parse_brl_amount;

/// Loads rules from `path`, or the published proposal when `path` is `None`.
pub fn load_rules(path: Option<&Path>) -> Result<ProposedRules> {
    match path {
        Some(path) => RulesLoader::load_from_file(path)
            .with_context(|| format!("Failed to load rules from: {}", path.display())),
        None => {
            debug!("no rules file given; using the published proposal");
            Ok(ProposedRules::default())
        }
    }
}

/// Evaluates salary text as typed by the user.
///
/// Text without any digits becomes NaN, which the calculator answers with
/// the initial result.
pub fn evaluate_input(
    salary_text: &str,
    period: Period,
    rules: &ProposedRules,
) -> CalculationResult {
    let amount = parse_brl_amount(salary_text).map_or(f64::NAN, to_amount);
    let monthly_salary = period.to_monthly(amount);

    let result = calculate_proposed_ir(monthly_salary, rules);
    info!(
        monthly_salary,
        period = period.as_str(),
        rule = result.rule_applied().as_str(),
        "calculated proposal"
    );
    result
}
