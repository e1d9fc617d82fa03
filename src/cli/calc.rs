use super::ui;
use crate::core::config::AppConfig;
use crate::core::form::{Outcome, evaluate};
use crate::core::{CalculationResult, RawInput};
use anyhow::Result;
use serde::Serialize;
use tracing::info;

/// Output options for the `calc` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalcOptions {
    pub json: bool,
    pub details: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Report<'a> {
    Success(&'a CalculationResult),
    Failure { error: String },
}

impl<'a> From<&'a Outcome> for Report<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        match outcome {
            Ok(result) => Report::Success(result),
            Err(e) => Report::Failure {
                error: e.to_string(),
            },
        }
    }
}

/// Evaluates one submission and prints its banner.
///
/// A rejected submission is returned as an error after its banner is shown.
pub fn run(input: &RawInput, config: &AppConfig, options: CalcOptions) -> Result<()> {
    info!("Calculating IRR for {input:?}");

    let outcome = evaluate(input, &config.calculator());
    println!("{}", render(&outcome, config, options)?);

    outcome.map(|_| ()).map_err(Into::into)
}

fn render(outcome: &Outcome, config: &AppConfig, options: CalcOptions) -> Result<String> {
    if options.json {
        return Ok(serde_json::to_string_pretty(&Report::from(outcome))?);
    }

    let mut output = ui::outcome_banner(outcome, &config.currency_symbol, config.precision);
    if let (true, Ok(result)) = (options.details, outcome) {
        let table = ui::details_table(result, &config.currency_symbol, config.precision);
        output.push_str(&format!("\n\n{table}"));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;

    fn raw(start: &str, end: &str, begin: &str, end_balance: &str) -> RawInput {
        RawInput {
            start_date: start.to_string(),
            end_date: end.to_string(),
            begin_balance: begin.to_string(),
            end_balance: end_balance.to_string(),
        }
    }

    #[test]
    fn json_success_report() {
        let outcome = evaluate(
            &raw("2020-01-01", "2025-01-01", "1000", "2000"),
            &Default::default(),
        );
        let options = CalcOptions {
            json: true,
            details: false,
        };
        let json = render(&outcome, &AppConfig::default(), options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!((value["irr_percent"].as_f64().unwrap() - 14.85).abs() < 0.01);
        assert_eq!(value["elapsed_days"], 1827);
        assert_eq!(value["start_date"], "2020-01-01");
        assert_eq!(value["begin_balance"], "1000");
    }

    #[test]
    fn json_failure_report() {
        let outcome: Outcome = Err(CalcError::InvalidDateOrder);
        let options = CalcOptions {
            json: true,
            details: false,
        };
        let json = render(&outcome, &AppConfig::default(), options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "End date must be after start date");
    }

    #[test]
    fn details_follow_banner() {
        let outcome = evaluate(
            &raw("2020-01-01", "2021-01-01", "1000", "1100"),
            &Default::default(),
        );
        let options = CalcOptions {
            json: false,
            details: true,
        };
        let text = render(&outcome, &AppConfig::default(), options).unwrap();
        assert!(text.contains("The Internal Rate of Return (IRR) is: 9.97%"));
        assert!(text.contains("Elapsed Days"));
    }

    #[test]
    fn run_returns_rejection_as_error() {
        let err = run(
            &raw("2020-01-01", "2021-01-01", "0", "100"),
            &AppConfig::default(),
            CalcOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Balances must be positive numbers");
    }
}
