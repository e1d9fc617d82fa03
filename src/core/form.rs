//! State of the calculator form between keystrokes and submissions.
use crate::core::calc::{CalculationResult, Calculator};
use crate::core::error::CalcError;
use crate::core::money;
use crate::core::validate::{RawInput, validate};
use tracing::debug;

pub type Outcome = Result<CalculationResult, CalcError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StartDate,
    EndDate,
    BeginBalance,
    EndBalance,
}

impl Field {
    /// Fields in the order the form presents them.
    pub const ALL: [Field; 4] = [
        Field::StartDate,
        Field::EndDate,
        Field::BeginBalance,
        Field::EndBalance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::StartDate => "Start Date",
            Field::EndDate => "End Date",
            Field::BeginBalance => "Beginning Balance",
            Field::EndBalance => "Ending Balance",
        }
    }

    pub fn is_balance(&self) -> bool {
        matches!(self, Field::BeginBalance | Field::EndBalance)
    }
}

/// Runs the validator and then the calculator on one set of field values.
pub fn evaluate(raw: &RawInput, calculator: &Calculator) -> Outcome {
    let input = validate(raw)?;
    calculator.calculate(&input)
}

/// The four field values plus the outcome of the last submission.
#[derive(Debug, Default)]
pub struct BalanceForm {
    values: RawInput,
    calculator: Calculator,
    outcome: Option<Outcome>,
}

impl BalanceForm {
    pub fn new(calculator: Calculator) -> Self {
        BalanceForm {
            calculator,
            ..Default::default()
        }
    }

    pub fn values(&self) -> &RawInput {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::StartDate => &self.values.start_date,
            Field::EndDate => &self.values.end_date,
            Field::BeginBalance => &self.values.begin_balance,
            Field::EndBalance => &self.values.end_balance,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::StartDate => &mut self.values.start_date,
            Field::EndDate => &mut self.values.end_date,
            Field::BeginBalance => &mut self.values.begin_balance,
            Field::EndBalance => &mut self.values.end_balance,
        }
    }

    /// Applies typed text to `field`. Returns false if the text was rejected
    /// and the previous value kept.
    ///
    /// Balance fields are masked down to digits and `.` first.
    pub fn input(&mut self, field: Field, text: &str) -> bool {
        if !field.is_balance() {
            *self.value_mut(field) = text.to_string();
            return true;
        }

        let masked = money::mask_input(text);
        if money::accepts_partial(&masked) {
            *self.value_mut(field) = masked;
            true
        } else {
            debug!("Rejected input {text:?} for {}", field.label());
            false
        }
    }

    /// Reformats a balance field with group separators when editing ends.
    pub fn blur(&mut self, field: Field) {
        if field.is_balance() {
            let formatted = money::format_on_blur(self.value(field));
            *self.value_mut(field) = formatted;
        }
    }

    /// Evaluates the current values, replacing any previous outcome.
    pub fn submit(&mut self) -> &Outcome {
        self.outcome = None;
        let outcome = evaluate(&self.values, &self.calculator);
        debug!("Form submitted: {outcome:?}");
        self.outcome.insert(outcome)
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }
}
