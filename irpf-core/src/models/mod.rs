mod calculation_result;
mod discount_tier;
mod period;
mod proposed_rules;
mod standard_bracket;

pub use calculation_result::{BracketDetails, CalculationResult, RuleApplied, RuleOutcome};
pub use discount_tier::DiscountTier;
pub use period::Period;
pub use proposed_rules::ProposedRules;
pub use standard_bracket::StandardBracket;
