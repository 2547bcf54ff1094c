//! `options` command
//!
//! Prints the codes accepted by each select field.

use crate::display::format_catalogs;
use crate::models::all_catalogs;

/// Print every catalog as a table
pub fn handle_options_command() {
    println!("{}", format_catalogs(&all_catalogs()));
}
