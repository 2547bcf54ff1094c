//! Catalog display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Catalog;

/// One printed row of a catalog
#[derive(Tabled)]
struct ChoiceRow {
    #[tabled(rename = "Código")]
    code: &'static str,
    #[tabled(rename = "Descrição")]
    label: &'static str,
}

/// Format every catalog as a titled table
pub fn format_catalogs(catalogs: &[Catalog]) -> String {
    let mut output = String::new();

    for (i, catalog) in catalogs.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(catalog.title);
        output.push('\n');

        let rows = catalog
            .choices
            .iter()
            .map(|&(code, label)| ChoiceRow { code, label });
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output
}
