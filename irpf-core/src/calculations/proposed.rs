//! Evaluation of the proposed exemption and discount rules.
//!
//! The proposal layers three regimes over the standard table:
//!
//! | Monthly salary                                  | Rule        | Proposed tax                  |
//! |-------------------------------------------------|-------------|-------------------------------|
//! | up to `exemption_limit`                         | exemption   | 0                             |
//! | up to `standard_range_start`, covered by a tier | discount    | standard tax × (1 − discount) |
//! | anything else                                   | standard    | standard tax                  |
//!
//! A salary in the discount range that no tier covers is treated as
//! standard.
//!
//! # Example
//!
//! ```
//! use approx::assert_relative_eq;
//! use irpf_core::{ProposedRules, RuleApplied, calculate_proposed_ir};
//!
//! let result = calculate_proposed_ir(7000.0, &ProposedRules::default());
//!
//! assert_eq!(result.rule_applied(), RuleApplied::Discount);
//! assert_relative_eq!(result.current_tax, 1029.0, epsilon = 1e-9);
//! assert_relative_eq!(result.final_tax, 514.5, epsilon = 1e-9);
//! ```

use tracing::debug;

use crate::calculations::standard::{StandardTax, StandardTaxTable};
use crate::{BracketDetails, CalculationResult, ProposedRules, RuleOutcome};

/// Calculator for the proposed rules over a standard table.
#[derive(Debug, Clone, Copy)]
pub struct ProposedRuleEvaluator<'a> {
    table: StandardTaxTable<'a>,
    rules: &'a ProposedRules,
}

impl<'a> ProposedRuleEvaluator<'a> {
    pub fn new(
        table: StandardTaxTable<'a>,
        rules: &'a ProposedRules,
    ) -> Self {
        Self { table, rules }
    }

    /// Evaluates a monthly salary.
    ///
    /// NaN and non-positive salaries yield [`CalculationResult::initial`]
    /// rather than an error.
    pub fn calculate(
        &self,
        monthly_salary: f64,
    ) -> CalculationResult {
        if monthly_salary.is_nan() || monthly_salary <= 0.0 {
            return CalculationResult::initial();
        }

        let StandardTax {
            tax: current_tax,
            bracket,
        } = self.table.evaluate(monthly_salary);
        let details = BracketDetails {
            base_tax: current_tax,
            aliquot: bracket.rate,
            deduction: bracket.deduction,
        };

        if monthly_salary <= self.rules.exemption_limit {
            let final_tax = 0.0;
            return CalculationResult {
                final_tax,
                current_tax,
                net_difference: current_tax - final_tax,
                monthly_salary,
                outcome: RuleOutcome::Exemption(details),
            };
        }

        if monthly_salary <= self.rules.standard_range_start {
            if let Some(tier) = self.rules.matching_tier(monthly_salary) {
                let final_tax = current_tax * (1.0 - tier.discount);
                return CalculationResult {
                    final_tax,
                    current_tax,
                    net_difference: current_tax - final_tax,
                    monthly_salary,
                    outcome: RuleOutcome::Discount {
                        details,
                        discount_applied: tier.discount,
                    },
                };
            }

            debug!(
                monthly_salary,
                standard_range_start = self.rules.standard_range_start,
                "no discount tier covers salary; applying standard table"
            );
        }

        CalculationResult {
            final_tax: current_tax,
            current_tax,
            net_difference: 0.0,
            monthly_salary,
            outcome: RuleOutcome::Standard(details),
        }
    }
}

/// Evaluates a monthly salary against `rules` and the published table.
pub fn calculate_proposed_ir(
    monthly_salary: f64,
    rules: &ProposedRules,
) -> CalculationResult {
    ProposedRuleEvaluator::new(StandardTaxTable::current(), rules).calculate(monthly_salary)
}
