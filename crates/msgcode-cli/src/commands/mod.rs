//! CLI command implementations.

mod check;
mod list;
mod render;

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{miette, IntoDiagnostic, Result, WrapErr};
use msgcode::source::{parse_catalog, Catalog, CompositeSource, InMemorySource};
use msgcode::{LoadError, MessageRegistry};

use crate::output::CatalogDiagnostic;

pub use check::{run_check, CheckArgs};
pub use list::{run_list, ListArgs};
pub use render::{run_render, RenderArgs};

/// Read and parse one catalog file.
///
/// Syntax errors become source-spanned diagnostics.
fn read_catalog(path: &Path) -> Result<Catalog> {
    let content = read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read catalog file {}", path.display()))?;

    parse_catalog(&path.display().to_string(), &content).map_err(|e| match e {
        LoadError::Parse {
            line,
            column,
            message,
            ..
        } => CatalogDiagnostic::at(path, &content, line, column, message).into(),
        other => miette!("{}", other),
    })
}

/// Build a registry over the built-in defaults with `files` as the custom layer,
/// later files winning.
fn load_registry(files: &[PathBuf]) -> Result<MessageRegistry> {
    let registry = MessageRegistry::new();
    if files.is_empty() {
        return Ok(registry);
    }

    let mut composite = CompositeSource::default();
    for path in files {
        let catalog = read_catalog(path)?;
        composite = composite.with(InMemorySource::new(catalog).named(path.display().to_string()));
    }
    registry
        .configure(&composite)
        .map_err(|e| miette!("Failed to load catalogs: {}", e))?;
    Ok(registry)
}
