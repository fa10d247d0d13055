use serde::{Deserialize, Serialize};

/// Which branch of the proposal produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleApplied {
    Exemption,
    Discount,
    Standard,
    Initial,
}

impl RuleApplied {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exemption => "exemption",
            Self::Discount => "discount",
            Self::Standard => "standard",
            Self::Initial => "initial",
        }
    }
}

/// Standard-table figures behind a result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketDetails {
    /// Tax due under the standard table.
    pub base_tax: f64,
    /// Rate of the matched standard bracket.
    pub aliquot: f64,
    /// Deduction of the matched standard bracket.
    pub deduction: f64,
}

/// Branch-specific payload of a [`CalculationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule_applied", rename_all = "lowercase")]
pub enum RuleOutcome {
    /// No usable salary was supplied.
    Initial,
    Exemption(BracketDetails),
    Discount {
        details: BracketDetails,
        discount_applied: f64,
    },
    Standard(BracketDetails),
}

/// Outcome of evaluating one monthly salary against the proposal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Tax due under the proposal.
    pub final_tax: f64,
    /// Tax due under the standard table.
    pub current_tax: f64,
    /// Monthly gain: `current_tax - final_tax`.
    pub net_difference: f64,
    pub monthly_salary: f64,
    pub outcome: RuleOutcome,
}

impl CalculationResult {
    /// The zeroed result used when there is no meaningful input yet.
    pub fn initial() -> Self {
        Self {
            final_tax: 0.0,
            current_tax: 0.0,
            net_difference: 0.0,
            monthly_salary: 0.0,
            outcome: RuleOutcome::Initial,
        }
    }

    pub fn rule_applied(&self) -> RuleApplied {
        match self.outcome {
            RuleOutcome::Initial => RuleApplied::Initial,
            RuleOutcome::Exemption(_) => RuleApplied::Exemption,
            RuleOutcome::Discount { .. } => RuleApplied::Discount,
            RuleOutcome::Standard(_) => RuleApplied::Standard,
        }
    }

    /// Standard-table details, absent for the initial result.
    pub fn details(&self) -> Option<&BracketDetails> {
        match &self.outcome {
            RuleOutcome::Initial => None,
            RuleOutcome::Exemption(details) | RuleOutcome::Standard(details) => Some(details),
            RuleOutcome::Discount { details, .. } => Some(details),
        }
    }

    /// Discount fraction, present only for discount results.
    pub fn discount_applied(&self) -> Option<f64> {
        match self.outcome {
            RuleOutcome::Discount {
                discount_applied, ..
            } => Some(discount_applied),
            _ => None,
        }
    }

    pub fn current_net_salary(&self) -> f64 {
        self.monthly_salary - self.current_tax
    }

    pub fn proposed_net_salary(&self) -> f64 {
        self.monthly_salary - self.final_tax
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn details() -> BracketDetails {
        BracketDetails {
            base_tax: 1029.0,
            aliquot: 0.275,
            deduction: 896.0,
        }
    }

    #[test]
    fn initial_result_is_zeroed() {
        let result = CalculationResult::initial();

        assert_eq!(result.final_tax, 0.0);
        assert_eq!(result.current_tax, 0.0);
        assert_eq!(result.net_difference, 0.0);
        assert_eq!(result.monthly_salary, 0.0);
        assert_eq!(result.rule_applied(), RuleApplied::Initial);
        assert!(result.details().is_none());
        assert!(result.discount_applied().is_none());
    }

    #[test]
    fn discount_is_only_reported_for_discount_outcome() {
        let discount = CalculationResult {
            final_tax: 514.5,
            current_tax: 1029.0,
            net_difference: 514.5,
            monthly_salary: 7000.0,
            outcome: RuleOutcome::Discount {
                details: details(),
                discount_applied: 0.5,
            },
        };
        let standard = CalculationResult {
            outcome: RuleOutcome::Standard(details()),
            ..discount
        };

        assert_eq!(discount.rule_applied(), RuleApplied::Discount);
        assert_eq!(discount.discount_applied(), Some(0.5));
        assert_eq!(standard.rule_applied(), RuleApplied::Standard);
        assert_eq!(standard.discount_applied(), None);
        assert_eq!(standard.details(), Some(&details()));
    }

    #[test]
    fn net_salaries_subtract_each_tax() {
        let result = CalculationResult {
            final_tax: 514.5,
            current_tax: 1029.0,
            net_difference: 514.5,
            monthly_salary: 7000.0,
            outcome: RuleOutcome::Discount {
                details: details(),
                discount_applied: 0.5,
            },
        };

        assert_eq!(result.current_net_salary(), 5971.0);
        assert_eq!(result.proposed_net_salary(), 6485.5);
    }
}
