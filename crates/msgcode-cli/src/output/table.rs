//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// One row of the code listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeRow {
    pub code: String,
    #[serde(rename = "type")]
    pub severity: String,
    pub status_code: u16,
    /// `default`, `custom` or `override`.
    pub origin: &'static str,
    pub title: String,
}

/// Format the code listing as a table.
pub fn format_codes_table(rows: &[CodeRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Code", "Type", "Status", "Origin", "Title"]);

    for row in rows {
        table.add_row(vec![
            row.code.clone(),
            row.severity.clone(),
            row.status_code.to_string(),
            row.origin.to_string(),
            row.title.clone(),
        ]);
    }

    table
}
