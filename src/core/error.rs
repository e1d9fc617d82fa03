//! Errors surfaced to the user when a submission is rejected.

use thiserror::Error;

/// Reasons a submission does not produce a result.
///
/// The `Display` text of each variant is the message shown in the error
/// banner, so it is part of the user-facing contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// At least one of the four fields is empty.
    #[error("Please fill in all fields")]
    MissingField,

    /// The end date is on or before the start date.
    #[error("End date must be after start date")]
    InvalidDateOrder,

    /// A balance is zero, negative or not a number.
    #[error("Balances must be positive numbers")]
    NonPositiveBalance,

    /// A balance is too large to compute with, or the formula produced a
    /// non-finite value.
    #[error("Error calculating IRR. Please check your inputs.")]
    ComputationFailure,
}
