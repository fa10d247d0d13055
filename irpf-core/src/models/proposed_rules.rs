use serde::{Deserialize, Serialize};

use crate::DiscountTier;

/// The alternative rule set under evaluation.
///
/// Salaries up to `exemption_limit` pay nothing, salaries up to
/// `standard_range_start` get the discount of the first tier that covers
/// them, and everything above follows the standard table.
///
/// The ordering `exemption_limit <= discount_tiers[0].limit <= ... <=
/// standard_range_start` is expected but not checked here; see the rules
/// loader in `irpf-data` for validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedRules {
    pub exemption_limit: f64,
    #[serde(default)]
    pub discount_tiers: Vec<DiscountTier>,
    pub standard_range_start: f64,
}

impl ProposedRules {
    /// First tier (in declaration order) whose limit covers `monthly_salary`.
    pub fn matching_tier(
        &self,
        monthly_salary: f64,
    ) -> Option<&DiscountTier> {
        self.discount_tiers
            .iter()
            .find(|t| monthly_salary <= t.limit)
    }
}

impl Default for ProposedRules {
    /// The published proposal: exemption up to R$ 5.000,00, 75% off up to
    /// R$ 6.000,00, 50% off up to R$ 7.350,00.
    fn default() -> Self {
        Self {
            exemption_limit: 5000.0,
            discount_tiers: vec![
                DiscountTier {
                    limit: 6000.0,
                    discount: 0.75,
                    label: "até R$ 6.000,00".to_string(),
                },
                DiscountTier {
                    limit: 7350.0,
                    discount: 0.50,
                    label: "de R$ 6.000,01 a R$ 7.350,00".to_string(),
                },
            ],
            standard_range_start: 7350.0,
        }
    }
}
