//! Terminal front end: one module per command, plus shared styling

pub mod calc;
pub mod form;
pub mod setup;
pub mod ui;
