//! Progressive monthly withholding table (in force since February 2024).
//!
//! # Table
//!
//! | Up to (R$) | Rate  | Deduction (R$) |
//! |------------|-------|----------------|
//! | 2.259,20   | 0%    | 0,00           |
//! | 2.826,65   | 7.5%  | 169,44         |
//! | 3.751,05   | 15%   | 381,44         |
//! | 4.664,68   | 22.5% | 662,77         |
//! | above      | 27.5% | 896,00         |
//!
//! The tax for a salary is `salary * rate - deduction` of the first bracket
//! whose limit is at or above the salary, never below zero.
//!
//! # Example
//!
//! ```
//! use approx::assert_relative_eq;
//! use irpf_core::evaluate_standard;
//!
//! let result = evaluate_standard(10000.0);
//!
//! assert_relative_eq!(result.tax, 1854.0, epsilon = 1e-9);
//! assert_eq!(result.bracket.rate, 0.275);
//! ```

use thiserror::Error;

use crate::StandardBracket;

/// The published monthly table, ascending by limit.
pub const STANDARD_BRACKETS: [StandardBracket; 5] = [
    StandardBracket {
        limit: 2259.20,
        rate: 0.0,
        deduction: 0.0,
    },
    StandardBracket {
        limit: 2826.65,
        rate: 0.075,
        deduction: 169.44,
    },
    StandardBracket {
        limit: 3751.05,
        rate: 0.15,
        deduction: 381.44,
    },
    StandardBracket {
        limit: 4664.68,
        rate: 0.225,
        deduction: 662.77,
    },
    StandardBracket {
        limit: f64::INFINITY,
        rate: 0.275,
        deduction: 896.00,
    },
];

/// Errors raised when building a table from caller-supplied brackets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StandardTaxTableError {
    /// No brackets were provided.
    #[error("no tax brackets provided")]
    NoBrackets,

    /// Bracket limits are not in ascending order.
    #[error("tax bracket {0} has a limit below the previous bracket")]
    UnsortedBrackets(usize),
}

/// Tax owed under the standard table, with the bracket that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardTax {
    pub tax: f64,
    pub bracket: StandardBracket,
}

/// Calculator over an ascending, non-empty sequence of brackets.
#[derive(Debug, Clone, Copy)]
pub struct StandardTaxTable<'a> {
    brackets: &'a [StandardBracket],
    first: &'a StandardBracket,
    last: &'a StandardBracket,
}

const CURRENT_TABLE: StandardTaxTable<'static> = StandardTaxTable {
    brackets: &STANDARD_BRACKETS,
    first: &STANDARD_BRACKETS[0],
    last: &STANDARD_BRACKETS[STANDARD_BRACKETS.len() - 1],
};

impl<'a> StandardTaxTable<'a> {
    /// Creates a calculator over custom brackets.
    ///
    /// # Errors
    ///
    /// Returns [`StandardTaxTableError`] if the slice is empty or its limits
    /// are not ascending.
    pub fn new(brackets: &'a [StandardBracket]) -> Result<Self, StandardTaxTableError> {
        let (first, last) = match brackets {
            [] => return Err(StandardTaxTableError::NoBrackets),
            [first, .., last] => (first, last),
            [only] => (only, only),
        };

        if let Some(pos) = brackets.windows(2).position(|w| w[1].limit < w[0].limit) {
            return Err(StandardTaxTableError::UnsortedBrackets(pos + 1));
        }

        Ok(Self {
            brackets,
            first,
            last,
        })
    }

    /// The published table.
    pub fn current() -> StandardTaxTable<'static> {
        CURRENT_TABLE
    }

    pub fn brackets(&self) -> &'a [StandardBracket] {
        self.brackets
    }

    /// Evaluates the tax for a monthly salary.
    ///
    /// Non-positive salaries owe nothing and report the first bracket. NaN is
    /// matched by no bracket and lands on the last one with a tax of 0, since
    /// the clamp at zero discards the NaN product. Callers are expected to
    /// screen NaN out first.
    pub fn evaluate(
        &self,
        monthly_salary: f64,
    ) -> StandardTax {
        if monthly_salary <= 0.0 {
            return StandardTax {
                tax: 0.0,
                bracket: *self.first,
            };
        }

        let bracket = self.find_bracket(monthly_salary);
        let tax = monthly_salary * bracket.rate - bracket.deduction;

        StandardTax {
            tax: tax.max(0.0),
            bracket: *bracket,
        }
    }

    /// First bracket whose limit is at or above the salary, falling back to
    /// the last bracket when every limit is exceeded.
    fn find_bracket(
        &self,
        monthly_salary: f64,
    ) -> &'a StandardBracket {
        self.brackets
            .iter()
            .find(|b| monthly_salary <= b.limit)
            .unwrap_or(self.last)
    }
}

impl Default for StandardTaxTable<'static> {
    fn default() -> Self {
        CURRENT_TABLE
    }
}

/// Evaluates a monthly salary against the published table.
pub fn evaluate_standard(monthly_salary: f64) -> StandardTax {
    CURRENT_TABLE.evaluate(monthly_salary)
}
