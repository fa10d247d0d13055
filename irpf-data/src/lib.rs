//! Loading of proposal rule files and salary batches.

pub mod rules_loader;
pub mod salary_loader;

pub use rules_loader::{RulesLoader, RulesLoaderError};
pub use salary_loader::{SalaryLoader, SalaryLoaderError, SalaryRecord};
