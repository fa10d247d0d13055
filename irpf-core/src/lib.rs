pub mod calculations;
pub mod models;

pub use calculations::{
    ProposedRuleEvaluator, StandardTax, StandardTaxTable, StandardTaxTableError,
    calculate_proposed_ir, evaluate_standard,
};
pub use models::*;
