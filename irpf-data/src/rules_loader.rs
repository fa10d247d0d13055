//! Loader for proposal rule files.
//!
//! ## File format
//!
//! Rules are written in TOML. `discount_tiers` is an array of tables in
//! ascending `limit` order; it may be omitted entirely.
//!
//! ```toml
//! exemption_limit = 5000.00
//! standard_range_start = 7350.00
//!
//! [[discount_tiers]]
//! limit = 6000.00
//! discount = 0.75
//! label = "até R$ 6.000,00"
//!
//! [[discount_tiers]]
//! limit = 7350.00
//! discount = 0.50
//! label = "de R$ 6.000,01 a R$ 7.350,00"
//! ```
//!
//! ## Validation
//!
//! Every amount must be finite, every discount must lie in `0..=1`, and the
//! limits must not decrease from `exemption_limit` through each tier to
//! `standard_range_start`. A range between the last tier and
//! `standard_range_start` is accepted but logged: salaries there are taxed
//! under the standard table.

use std::path::{Path, PathBuf};

use irpf_core::ProposedRules;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur when loading a rules file.
#[derive(Debug, Error)]
pub enum RulesLoaderError {
    #[error("cannot read rules file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{field} must be a finite amount, got {value}")]
    NonFinite { field: String, value: f64 },

    #[error("discount tier {index} has discount {discount}; expected a fraction between 0 and 1")]
    DiscountOutOfRange { index: usize, discount: f64 },

    #[error("{field} ({value}) is below the preceding limit ({previous})")]
    OutOfOrder {
        field: String,
        value: f64,
        previous: f64,
    },
}

/// Loader for [`ProposedRules`] stored as TOML.
pub struct RulesLoader;

impl RulesLoader {
    /// Parse and validate rules from TOML text.
    pub fn parse(input: &str) -> Result<ProposedRules, RulesLoaderError> {
        let rules: ProposedRules = toml::from_str(input)?;
        Self::validate(&rules)?;

        if let Some((from, to)) = Self::coverage_gap(&rules) {
            warn!(
                from,
                to, "no discount tier covers this salary range; the standard table applies there"
            );
        }

        Ok(rules)
    }

    /// Read a file from disk and delegate to [`RulesLoader::parse`].
    pub fn load_from_file(path: &Path) -> Result<ProposedRules, RulesLoaderError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RulesLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::parse(&contents)?;

        info!(
            path = %path.display(),
            tiers = rules.discount_tiers.len(),
            "loaded proposal rules"
        );
        Ok(rules)
    }

    /// Checks finiteness, discount range and limit ordering.
    pub fn validate(rules: &ProposedRules) -> Result<(), RulesLoaderError> {
        check_finite("exemption_limit", rules.exemption_limit)?;
        check_finite("standard_range_start", rules.standard_range_start)?;

        let mut previous = rules.exemption_limit;
        for (index, tier) in rules.discount_tiers.iter().enumerate() {
            let field = format!("discount_tiers[{index}].limit");
            check_finite(&field, tier.limit)?;

            if !(0.0..=1.0).contains(&tier.discount) {
                return Err(RulesLoaderError::DiscountOutOfRange {
                    index,
                    discount: tier.discount,
                });
            }
            check_order(field, tier.limit, previous)?;
            previous = tier.limit;
        }

        check_order(
            "standard_range_start".to_string(),
            rules.standard_range_start,
            previous,
        )
    }

    /// The salary range `(from, to]` above the exemption that no discount
    /// tier covers, if any.
    pub fn coverage_gap(rules: &ProposedRules) -> Option<(f64, f64)> {
        let covered = rules
            .discount_tiers
            .last()
            .map_or(rules.exemption_limit, |t| t.limit);

        (covered < rules.standard_range_start).then_some((covered, rules.standard_range_start))
    }
}

fn check_finite(
    field: &str,
    value: f64,
) -> Result<(), RulesLoaderError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RulesLoaderError::NonFinite {
            field: field.to_string(),
            value,
        })
    }
}

fn check_order(
    field: String,
    value: f64,
    previous: f64,
) -> Result<(), RulesLoaderError> {
    if value < previous {
        Err(RulesLoaderError::OutOfOrder {
            field,
            value,
            previous,
        })
    } else {
        Ok(())
    }
}
