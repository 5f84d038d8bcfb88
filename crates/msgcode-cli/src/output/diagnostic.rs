//! Miette diagnostic wrapper for catalog syntax errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for a malformed catalog file.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid catalog: {message}")]
#[diagnostic(
    code(msgcode::catalog),
    help("a catalog is a JSON object mapping each code to a template object")
)]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl CatalogDiagnostic {
    /// Create a diagnostic pointing at a 1-based line and column of `content`.
    pub fn at(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        // Byte length of every line before the error line, terminators included.
        let offset = content
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_of(content: &str, line: usize, column: usize) -> usize {
        CatalogDiagnostic::at(Path::new("c.json"), content, line, column, String::new())
            .span
            .offset()
    }

    #[test]
    fn offset_counts_lf_line_endings() {
        let content = "{\n  \"X\": oops\n}";
        assert_eq!(&content[offset_of(content, 2, 8)..][..4], "oops");
    }

    #[test]
    fn offset_counts_crlf_line_endings() {
        let content = "{\r\n  \"X\": {}\r\n  \"Y\": oops\r\n}";
        assert_eq!(&content[offset_of(content, 3, 8)..][..4], "oops");
    }

    #[test]
    fn offset_is_clamped_to_content() {
        assert_eq!(offset_of("{}", 9, 9), 2);
    }
}
