//! Display formatting for terminal output
//!
//! Formats catalogs, registration summaries, validation errors and
//! notifications for the CLI; the TUI reuses the summary rows.

pub mod options;
pub mod registration;

pub use options::format_catalogs;
pub use registration::{format_notification, format_summary, format_validation_errors, summary_rows};
