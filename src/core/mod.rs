//! Validation and calculation logic, independent of any terminal I/O

pub mod calc;
pub mod config;
pub mod error;
pub mod form;
pub mod log;
pub mod money;
pub mod validate;

// Re-export main types for cleaner imports
pub use calc::{CalculationInput, CalculationResult, Calculator};
pub use error::CalcError;
pub use form::{BalanceForm, Field, Outcome};
pub use money::Money;
pub use validate::RawInput;
