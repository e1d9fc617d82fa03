//! Annualized return between two dated balances.
use crate::core::error::CalcError;
use crate::core::money::Money;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Length of a year in days. Leap days are not special-cased.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Validated inputs for one calculation.
///
/// Only [`crate::core::validate::validate`] builds these, so the end date is
/// always after the start date and both balances are positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationInput {
    start_date: NaiveDate,
    end_date: NaiveDate,
    begin_balance: Money,
    end_balance: Money,
}

impl CalculationInput {
    pub(crate) fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        begin_balance: Money,
        end_balance: Money,
    ) -> Self {
        CalculationInput {
            start_date,
            end_date,
            begin_balance,
            end_balance,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn begin_balance(&self) -> Money {
        self.begin_balance
    }

    pub fn end_balance(&self) -> Money {
        self.end_balance
    }

    pub fn elapsed_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Outcome of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub irr_percent: f64,
    pub elapsed_days: i64,
    pub years: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub begin_balance: Money,
    pub end_balance: Money,
}

/// Computes `(FV / PV) ^ (1 / years) - 1` as a percentage.
///
/// `min_elapsed_days`, when set, floors the day count used for `years`.
/// Without it a one day span raises the ratio to the 365th power.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    min_elapsed_days: Option<u32>,
}

impl Calculator {
    pub fn new(min_elapsed_days: Option<u32>) -> Self {
        Calculator { min_elapsed_days }
    }

    pub fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult, CalcError> {
        let elapsed_days = input.elapsed_days();
        let period_days = match self.min_elapsed_days {
            Some(floor) => elapsed_days.max(i64::from(floor)),
            None => elapsed_days,
        };

        let present_value = input
            .begin_balance
            .to_f64()
            .ok_or(CalcError::ComputationFailure)?;
        let future_value = input
            .end_balance
            .to_f64()
            .ok_or(CalcError::ComputationFailure)?;

        let years = period_days as f64 / DAYS_PER_YEAR;
        let irr_percent = annualized_return_percent(present_value, future_value, years);
        debug!("irr: {present_value} -> {future_value} over {years}yrs = {irr_percent}");

        if !irr_percent.is_finite() {
            debug!("Non-finite IRR for {input:?}");
            return Err(CalcError::ComputationFailure);
        }

        Ok(CalculationResult {
            irr_percent,
            elapsed_days,
            years,
            start_date: input.start_date,
            end_date: input.end_date,
            begin_balance: input.begin_balance,
            end_balance: input.end_balance,
        })
    }
}

/// Compound annual growth from `present_value` to `future_value`, in percent.
pub fn annualized_return_percent(present_value: f64, future_value: f64, years: f64) -> f64 {
    ((future_value / present_value).powf(1.0 / years) - 1.0) * 100.0
}
