//! Implementation of the `msgcode check` command.

use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Report, Result};
use msgcode::{placeholders, MessageRegistry};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::read_catalog;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Catalog files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    entries: usize,
    overrides: usize,
    errors: Vec<String>,
    /// Set when a diagnostic has already been printed for the file.
    #[serde(skip)]
    reported: bool,
}

/// Run the check command.
///
/// Every file is parsed and every entry is materialized against the built-in
/// defaults, so partial entries for unknown codes are reported too.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let snapshot = MessageRegistry::new().snapshot();
    let mut reports = Vec::new();

    for path in &args.files {
        let catalog = match read_catalog(path) {
            Ok(catalog) => catalog,
            Err(report) => {
                reports.push(failed_report(path, &report, args.json));
                continue;
            }
        };

        let mut errors = Vec::new();
        let mut overrides = 0;
        for (code, entry) in &catalog {
            let base = snapshot.get_default(code);
            if base.is_some() {
                overrides += 1;
            }
            match entry.clone().materialize(base) {
                Ok(template) => {
                    tracing::debug!(
                        code = %code,
                        placeholders = ?placeholders(&template.description),
                        "entry is valid"
                    );
                }
                Err(reason) => errors.push(format!("{code}: {reason}")),
            }
        }

        reports.push(FileReport {
            file: path.display().to_string(),
            entries: catalog.len(),
            overrides,
            errors,
            reported: false,
        });
    }

    let failed = reports.iter().any(|r| !r.errors.is_empty());

    if args.json {
        let output = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{}", output);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Record a file that could not be read or parsed, printing its diagnostic
/// unless JSON output was requested.
fn failed_report(path: &Path, report: &Report, json: bool) -> FileReport {
    if !json {
        eprintln!("{:?}", report);
    }
    FileReport {
        file: path.display().to_string(),
        entries: 0,
        overrides: 0,
        errors: vec![report.to_string()],
        reported: !json,
    }
}

fn print_report(report: &FileReport) {
    if report.errors.is_empty() {
        println!(
            "{} {} ({} entries, {} overrides)",
            "✓".if_supports_color(Stream::Stdout, |t| t.green()),
            report.file,
            report.entries,
            report.overrides
        );
        return;
    }

    if report.reported {
        return;
    }

    println!(
        "{} {}",
        "✗".if_supports_color(Stream::Stdout, |t| t.red()),
        report.file
    );
    for error in &report.errors {
        println!("  - {}", error);
    }
}
