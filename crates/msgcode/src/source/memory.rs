use crate::error::LoadError;
use crate::source::{Catalog, MessageSource};
use crate::types::PartialTemplate;

/// Entries held in memory, typically built in code or by tests.
///
/// # Example
///
/// ```
/// use msgcode::source::{InMemorySource, MessageSource};
/// use msgcode::{PartialTemplate, Severity, Template};
///
/// let source = InMemorySource::new([
///     (
///         "X_001",
///         PartialTemplate::from(
///             Template::builder()
///                 .severity(Severity::Info)
///                 .title("Hello")
///                 .description("Hi there.")
///                 .build(),
///         ),
///     ),
///     (
///         "AUTH_001",
///         PartialTemplate {
///             description: Some("Please log in.".to_string()),
///             ..Default::default()
///         },
///     ),
/// ]);
///
/// assert_eq!(source.load().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    entries: Catalog,
}

impl InMemorySource {
    /// Build a source from `(code, entry)` pairs. A later pair for the same code
    /// replaces an earlier one.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<PartialTemplate>,
    {
        Self {
            name: "<in-memory>".to_string(),
            entries: entries
                .into_iter()
                .map(|(code, entry)| (code.into(), entry.into()))
                .collect(),
        }
    }

    /// Rename the source for error messages.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl MessageSource for InMemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> Result<Catalog, LoadError> {
        Ok(self.entries.clone())
    }
}
