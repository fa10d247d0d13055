use serde::{Deserialize, Serialize};

/// How a salary figure was entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Monthly,
    Annual,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "mensal" => Some(Self::Monthly),
            "annual" | "anual" => Some(Self::Annual),
            _ => None,
        }
    }

    /// Normalizes an amount entered for this period to a monthly figure.
    pub fn to_monthly(
        &self,
        amount: f64,
    ) -> f64 {
        match self {
            Self::Monthly => amount,
            Self::Annual => amount / 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_english_and_portuguese_names() {
        assert_eq!(Period::parse("monthly"), Some(Period::Monthly));
        assert_eq!(Period::parse(" Anual "), Some(Period::Annual));
        assert_eq!(Period::parse("weekly"), None);
    }

    #[test]
    fn annual_amounts_are_divided_by_twelve() {
        assert_eq!(Period::Annual.to_monthly(120000.0), 10000.0);
        assert_eq!(Period::Monthly.to_monthly(7000.0), 7000.0);
    }

    #[test]
    fn nan_passes_through_unchanged() {
        assert!(Period::Annual.to_monthly(f64::NAN).is_nan());
    }
}
