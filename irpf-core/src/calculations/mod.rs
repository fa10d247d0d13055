//! Income tax calculations for the monthly withholding table and the
//! proposed exemption/discount rules.
//!
//! [`standard`] maps a salary onto the published progressive table;
//! [`proposed`] decides which branch of the proposal applies and builds the
//! final [`CalculationResult`](crate::CalculationResult).

pub mod common;
pub mod proposed;
pub mod standard;

pub use proposed::{ProposedRuleEvaluator, calculate_proposed_ir};
pub use standard::{
    STANDARD_BRACKETS, StandardTax, StandardTaxTable, StandardTaxTableError, evaluate_standard,
};
