use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Inclusive upper bound of the tier.
    pub limit: f64,
    /// Fraction of the standard tax forgiven, between 0 and 1.
    pub discount: f64,
    /// Human-readable salary range, e.g. "até R$ 6.000,00".
    pub label: String,
}
