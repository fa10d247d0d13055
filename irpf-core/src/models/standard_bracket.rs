use serde::{Deserialize, Serialize};

/// One row of the progressive monthly withholding table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardBracket {
    /// Inclusive upper bound of the bracket. The last bracket is unbounded.
    pub limit: f64,
    /// Marginal rate as a fraction (0.275 for 27.5%).
    pub rate: f64,
    /// Fixed amount subtracted after applying the rate.
    pub deduction: f64,
}
