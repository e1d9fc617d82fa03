//! Monetary amounts as typed into the balance fields.
//!
//! All parsing of balance text goes through [`Money::from_str`]. Amounts are
//! kept as [`Decimal`] rounded to cents so that `"1,000.10"` and `"1000.1"`
//! are the same value.
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Currency symbols accepted (and ignored) in front of an amount.
const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₹'];

/// Number of fractional digits kept after parsing.
const CENTS_DP: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// The text is not an amount at all.
    #[error("invalid monetary amount: {input:?}")]
    Invalid { input: String },

    /// A well-formed amount too large for a `Decimal`.
    #[error("monetary amount out of range: {input:?}")]
    OutOfRange { input: String, negative: bool },
}

impl ParseMoneyError {
    fn invalid(input: &str) -> Self {
        ParseMoneyError::Invalid {
            input: input.to_string(),
        }
    }
}

/// A monetary amount rounded to two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps `amount`, rounding half away from zero to cents.
    pub fn new(amount: Decimal) -> Self {
        Money(
            amount
                .round_dp_with_strategy(CENTS_DP, RoundingStrategy::MidpointAwayFromZero)
                .normalize(),
        )
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses text such as `1234.5`, `1,234.50` or `$ 1,234.5`.
    ///
    /// Group separators are dropped wherever they appear. A leading `-` is
    /// accepted so that negative balances can be reported as such rather than
    /// as unparseable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };
        let rest = rest
            .strip_prefix(CURRENCY_SYMBOLS)
            .map_or(rest, str::trim_start);

        let digits: String = rest.chars().filter(|c| *c != ',').collect();
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(ParseMoneyError::invalid(s));
        }

        let canonical = format!(
            "{}{}.{}",
            if negative { "-" } else { "" },
            if int_part.is_empty() { "0" } else { int_part },
            if frac_part.is_empty() { "0" } else { frac_part },
        );
        let amount =
            Decimal::from_str(&canonical).map_err(|_| ParseMoneyError::OutOfRange {
                input: s.to_string(),
                negative,
            })?;
        Ok(Money::new(amount))
    }
}

impl Display for Money {
    /// en-US grouping with up to two fractional digits, trailing zeros dropped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.normalize().to_string();
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        match unsigned.split_once('.') {
            Some((int_part, frac_part)) => {
                write!(f, "{sign}{}.{frac_part}", group_thousands(int_part))
            }
            None => write!(f, "{sign}{}", group_thousands(unsigned)),
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Strips everything except ASCII digits and `.` from typed text.
pub fn mask_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Whether masked text may be kept while the user is still typing.
///
/// Accepts the empty string and partial numbers like `12.`; rejects a lone
/// `.` and anything with more than one decimal point.
pub fn accepts_partial(masked: &str) -> bool {
    if masked.is_empty() {
        return true;
    }
    masked.matches('.').count() <= 1
        && masked.chars().any(|c| c.is_ascii_digit())
        && masked.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Reformats a field's text with group separators once editing is done.
///
/// Amounts too large to hold are grouped as typed. Text that does not parse
/// is returned unchanged.
pub fn format_on_blur(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    match text.parse::<Money>() {
        Ok(money) => money.to_string(),
        Err(ParseMoneyError::OutOfRange { .. }) => group_typed_amount(text),
        Err(ParseMoneyError::Invalid { .. }) => text.to_string(),
    }
}

fn group_typed_amount(text: &str) -> String {
    let digits = mask_input(text);
    match digits.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{frac_part}", group_thousands(int_part)),
        None => group_thousands(&digits),
    }
}
