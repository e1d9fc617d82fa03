//! Checks the raw form fields before anything is computed.
use crate::core::calc::CalculationInput;
use crate::core::error::CalcError;
use crate::core::money::{Money, ParseMoneyError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Date format of the date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The four field values exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub start_date: String,
    pub end_date: String,
    pub begin_balance: String,
    pub end_balance: String,
}

impl RawInput {
    fn fields(&self) -> [&str; 4] {
        [
            self.start_date.as_str(),
            self.end_date.as_str(),
            self.begin_balance.as_str(),
            self.end_balance.as_str(),
        ]
    }
}

/// Validates `raw`, stopping at the first problem.
///
/// Presence is checked first, then date order, then balance positivity. A
/// date that cannot be read counts as missing. A positive balance too large
/// to represent fails as a computation error.
pub fn validate(raw: &RawInput) -> Result<CalculationInput, CalcError> {
    if raw.fields().iter().any(|field| field.trim().is_empty()) {
        debug!("Rejected submission with an empty field");
        return Err(CalcError::MissingField);
    }

    let (Some(start_date), Some(end_date)) =
        (parse_date(&raw.start_date), parse_date(&raw.end_date))
    else {
        debug!(
            "Rejected unreadable dates: {:?}, {:?}",
            raw.start_date, raw.end_date
        );
        return Err(CalcError::MissingField);
    };

    if end_date <= start_date {
        return Err(CalcError::InvalidDateOrder);
    }

    match (
        parse_balance(&raw.begin_balance),
        parse_balance(&raw.end_balance),
    ) {
        (Ok(begin_balance), Ok(end_balance)) => Ok(CalculationInput::new(
            start_date,
            end_date,
            begin_balance,
            end_balance,
        )),
        (Err(CalcError::NonPositiveBalance), _) | (_, Err(CalcError::NonPositiveBalance)) => {
            Err(CalcError::NonPositiveBalance)
        }
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

fn parse_balance(text: &str) -> Result<Money, CalcError> {
    match text.parse::<Money>() {
        Ok(money) if money.is_positive() => Ok(money),
        Ok(money) => {
            debug!("Balance {money} is not positive");
            Err(CalcError::NonPositiveBalance)
        }
        Err(e @ ParseMoneyError::OutOfRange {
            negative: false, ..
        }) => {
            debug!("{e}");
            Err(CalcError::ComputationFailure)
        }
        Err(e) => {
            debug!("{e}");
            Err(CalcError::NonPositiveBalance)
        }
    }
}
