use crate::core::{CalcError, CalculationResult, Outcome};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Success,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Success => style(text).green(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Creates a cell for a rate with color coding.
pub fn rate_cell(rate: f64, precision: usize) -> Cell {
    let color = if rate >= 0.0 { Color::Green } else { Color::Red };
    value_cell(format!("{rate:.precision$}%"))
        .fg(color)
        .add_attribute(Attribute::Bold)
}

/// The success message, unstyled.
pub fn result_message(
    result: &CalculationResult,
    currency_symbol: &str,
    precision: usize,
) -> String {
    let sym = currency_symbol;
    format!(
        "The Internal Rate of Return (IRR) is: {:.precision$}%\n\
         Based on initial investment of {sym}{} and final value of {sym}{}",
        result.irr_percent, result.begin_balance, result.end_balance,
    )
}

pub fn error_banner(error: &CalcError) -> String {
    style_text(&error.to_string(), StyleType::Error)
}

pub fn success_banner(
    result: &CalculationResult,
    currency_symbol: &str,
    precision: usize,
) -> String {
    style_text(
        &result_message(result, currency_symbol, precision),
        StyleType::Success,
    )
}

pub fn outcome_banner(outcome: &Outcome, currency_symbol: &str, precision: usize) -> String {
    match outcome {
        Ok(result) => success_banner(result, currency_symbol, precision),
        Err(e) => error_banner(e),
    }
}

/// Tabulates the values that went into a result.
pub fn details_table(
    result: &CalculationResult,
    currency_symbol: &str,
    precision: usize,
) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![header_cell("Input"), header_cell("Value")]);

    let rows = [
        ("Start Date", result.start_date.to_string()),
        ("End Date", result.end_date.to_string()),
        ("Elapsed Days", result.elapsed_days.to_string()),
        ("Years", format!("{:.5}", result.years)),
        (
            "Beginning Balance",
            format!("{currency_symbol}{}", result.begin_balance),
        ),
        (
            "Ending Balance",
            format!("{currency_symbol}{}", result.end_balance),
        ),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), value_cell(value)]);
    }
    table.add_row(vec![
        Cell::new("IRR").add_attribute(Attribute::Bold),
        rate_cell(result.irr_percent, precision),
    ]);
    table
}
