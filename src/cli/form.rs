use super::ui;
use crate::core::config::AppConfig;
use crate::core::{BalanceForm, Field};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Prompts for each field on stdin, then submits the form once.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_with(&mut input, &mut output, config)
}

pub fn run_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &AppConfig,
) -> Result<()> {
    info!("Starting interactive form");
    writeln!(
        output,
        "{}\n",
        ui::style_text("IRR Calculator", ui::StyleType::Title)
    )?;

    let mut form = BalanceForm::new(config.calculator());
    for field in Field::ALL {
        prompt_field(&mut form, field, input, output, config)?;
    }

    let outcome = form.submit();
    writeln!(
        output,
        "\n{}",
        ui::outcome_banner(outcome, &config.currency_symbol, config.precision)
    )?;
    Ok(())
}

/// Reads lines until `field` accepts one or input runs out.
fn prompt_field<R: BufRead, W: Write>(
    form: &mut BalanceForm,
    field: Field,
    input: &mut R,
    output: &mut W,
    config: &AppConfig,
) -> Result<()> {
    loop {
        let hint = if field.is_balance() {
            config.currency_symbol.as_str()
        } else {
            "YYYY-MM-DD"
        };
        write!(output, "{} ({hint}): ", field.label())?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .with_context(|| format!("Failed to read {}", field.label()))?;
        if read == 0 {
            writeln!(output)?;
            return Ok(());
        }

        if form.input(field, line.trim_end_matches(['\r', '\n'])) {
            form.blur(field);
            if field.is_balance() && !form.value(field).is_empty() {
                let echo = format!("  {}{}", config.currency_symbol, form.value(field));
                writeln!(output, "{}", ui::style_text(&echo, ui::StyleType::Subtle))?;
            }
            return Ok(());
        }

        writeln!(
            output,
            "{}",
            ui::style_text("  Enter a non-negative amount", ui::StyleType::Subtle)
        )?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, config: &AppConfig) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_with(&mut input, &mut output, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn full_form_shows_result() {
        let output = run_script(
            "2020-01-01\n2025-01-01\n1000\n2,000\n",
            &AppConfig::default(),
        );
        assert!(output.contains("$1,000"));
        assert!(output.contains("The Internal Rate of Return (IRR) is: 14.85%"));
        assert!(output.contains("Based on initial investment of $1,000 and final value of $2,000"));
    }

    #[test]
    fn rejected_amount_is_prompted_again() {
        let output = run_script(
            "2020-01-01\n2021-01-01\n1.2.3\n1000\n1100\n",
            &AppConfig::default(),
        );
        assert!(output.contains("Enter a non-negative amount"));
        assert!(output.contains("9.97%"));
    }

    #[test]
    fn early_end_of_input_reports_missing_fields() {
        let output = run_script("2020-01-01\n", &AppConfig::default());
        assert!(output.contains("Please fill in all fields"));
    }

    #[test]
    fn reversed_dates_are_reported() {
        let output = run_script(
            "2021-01-01\r\n2020-01-01\r\n1000\r\n1100\r\n",
            &AppConfig::default(),
        );
        assert!(output.contains("End date must be after start date"));
    }

    #[test]
    fn configured_symbol_is_used() {
        let config = AppConfig {
            currency_symbol: "€".to_string(),
            ..Default::default()
        };
        let output = run_script("2020-01-01\n2021-01-01\n1000\n1100\n", &config);
        assert!(output.contains("final value of €1,100"));
    }
}
