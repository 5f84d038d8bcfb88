//! Error types for msgcode.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::types::TemplateError;

/// Maximum number of known codes carried by [`RegistryError::MessageNotFound`].
pub const KNOWN_CODE_SAMPLE: usize = 10;

/// Errors that occur while loading a message source.
///
/// Every variant names the source it came from. A failed load never touches the
/// snapshot a registry has already published.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a source file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source's JSON is malformed or has the wrong shape.
    #[error("{origin}:{line}:{column}: {message}")]
    Parse {
        origin: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// An entry could not be turned into a whole template.
    #[error("{origin}: invalid entry '{code}': {reason}")]
    InvalidEntry {
        origin: String,
        code: String,
        #[source]
        reason: TemplateError,
    },

    /// A backing store failed to produce its records.
    #[error("{origin}: failed to fetch templates: {source}")]
    Fetch {
        origin: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl LoadError {
    /// Name of the source that failed.
    pub fn origin(&self) -> String {
        match self {
            LoadError::Io { path, .. } => path.display().to_string(),
            LoadError::Parse { origin, .. }
            | LoadError::InvalidEntry { origin, .. }
            | LoadError::Fetch { origin, .. } => origin.clone(),
        }
    }
}

/// Errors from resolving message codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The code is in neither the custom nor the default layer.
    #[error("message code '{code}' not found{}", describe_known(.known, .suggestions))]
    MessageNotFound {
        code: String,
        /// A bounded, sorted sample of codes that do exist.
        known: Vec<String>,
        /// Known codes spelled closest to the requested one.
        suggestions: Vec<String>,
    },
}

/// Errors from the formatter registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No formatter is registered under the name.
    #[error("formatter '{name}' is not registered, available: {}", .available.join(", "))]
    FormatterNotFound { name: String, available: Vec<String> },
}

/// Any msgcode error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

fn describe_known(known: &[String], suggestions: &[String]) -> String {
    let mut text = String::new();
    if !suggestions.is_empty() {
        text.push_str(&format!(", did you mean: {}?", suggestions.join(", ")));
    }
    if !known.is_empty() {
        text.push_str(&format!(" (known codes include: {})", known.join(", ")));
    }
    text
}

/// Known names closest in spelling to `name`.
///
/// Candidates within an edit distance of 1 (names up to 3 characters) or 2
/// (longer names) are kept, closest first, at most three. Comparison ignores
/// ASCII case.
///
/// ```
/// use msgcode::compute_suggestions;
///
/// let known = vec!["AUTH_001".to_string(), "AUTH_002".to_string(), "CRUD_001".to_string()];
/// assert_eq!(compute_suggestions("auth_01", &known)[0], "AUTH_001");
/// ```
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let wanted = name.to_ascii_uppercase();
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(&wanted, &candidate.to_ascii_uppercase());
            (dist <= max_distance && candidate != name).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_by(|(a_dist, a), (b_dist, b)| a_dist.cmp(b_dist).then_with(|| a.cmp(b)));
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, s)| s.clone())
        .collect()
}
