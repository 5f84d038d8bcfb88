//! JSON catalog documents.

use crate::error::LoadError;
use crate::source::Catalog;

/// Parse a JSON catalog document.
///
/// The document is an object keyed by message code whose values are template
/// objects (`type`, `title`, `description`, `hint`, `httpStatusCode`), any of
/// which may be omitted. `origin` names the document in errors.
///
/// # Example
///
/// ```
/// use msgcode::source::parse_catalog;
///
/// let catalog = parse_catalog("inline", r#"{ "X_001": { "title": "Hi" } }"#).unwrap();
/// assert_eq!(catalog["X_001"].title.as_deref(), Some("Hi"));
/// ```
pub fn parse_catalog(origin: &str, content: &str) -> Result<Catalog, LoadError> {
    let catalog: Catalog = serde_json::from_str(content).map_err(|e| {
        let full = e.to_string();
        let position = format!(" at line {} column {}", e.line(), e.column());
        LoadError::Parse {
            origin: origin.to_string(),
            line: e.line(),
            column: e.column(),
            message: full.strip_suffix(&position).unwrap_or(&full).to_string(),
        }
    })?;

    if catalog.keys().any(|code| code.trim().is_empty()) {
        return Err(LoadError::Parse {
            origin: origin.to_string(),
            line: 0,
            column: 0,
            message: "message codes must not be empty".to_string(),
        });
    }

    Ok(catalog)
}
