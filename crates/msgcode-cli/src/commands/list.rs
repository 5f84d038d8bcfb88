//! Implementation of the `msgcode list` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};

use super::load_registry;
use crate::output::table::{format_codes_table, CodeRow};

/// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Custom catalog files layered over the defaults, later files winning.
    #[arg(short, long = "catalog")]
    pub catalogs: Vec<PathBuf>,

    /// Only list codes starting with this prefix (e.g. AUTH_).
    #[arg(long)]
    pub prefix: Option<String>,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the list command.
pub fn run_list(args: ListArgs) -> Result<i32> {
    let registry = load_registry(&args.catalogs)?;
    let snapshot = registry.snapshot();

    let rows: Vec<CodeRow> = snapshot
        .codes()
        .into_iter()
        .filter(|code| {
            args.prefix
                .as_deref()
                .is_none_or(|prefix| code.starts_with(prefix))
        })
        .filter_map(|code| {
            let template = snapshot.get(&code)?;
            let origin = match (snapshot.get_custom(&code), snapshot.get_default(&code)) {
                (Some(_), Some(_)) => "override",
                (Some(_), None) => "custom",
                _ => "default",
            };
            Some(CodeRow {
                severity: template.severity.to_string(),
                status_code: template.resolved_status_code(),
                origin,
                title: template.title.clone(),
                code,
            })
        })
        .collect();

    if args.json {
        let json_output = serde_json::to_string_pretty(&rows).into_diagnostic()?;
        println!("{}", json_output);
    } else if rows.is_empty() {
        println!("No message codes found.");
    } else {
        println!("{}", format_codes_table(&rows));
    }

    Ok(exitcode::OK)
}
