use crate::error::LoadError;
use crate::source::{Catalog, MessageSource, parse_catalog};

const DEFAULT_MESSAGES: &str = include_str!("../../resources/default_messages.json");

/// A catalog compiled into the binary.
///
/// [`EmbeddedSource::defaults`] is the built-in catalog every registry starts from.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSource {
    name: &'static str,
    content: &'static str,
}

impl EmbeddedSource {
    /// Wrap a JSON catalog embedded with `include_str!`.
    pub const fn new(name: &'static str, content: &'static str) -> Self {
        Self { name, content }
    }

    /// The built-in default catalog.
    pub const fn defaults() -> Self {
        Self::new("<embedded defaults>", DEFAULT_MESSAGES)
    }
}

impl MessageSource for EmbeddedSource {
    fn name(&self) -> String {
        self.name.to_string()
    }

    fn load(&self) -> Result<Catalog, LoadError> {
        parse_catalog(self.name, self.content)
    }
}
