use tracing::debug;

use crate::error::LoadError;
use crate::source::{Catalog, MessageSource};

/// An ordered list of sources folded into one catalog.
///
/// When several children define the same code, the entry from the **last** child
/// replaces earlier ones as a whole; fields are not merged between children. Any
/// child failing to load fails the whole composite.
#[derive(Default)]
pub struct CompositeSource {
    sources: Vec<Box<dyn MessageSource>>,
}

impl CompositeSource {
    pub fn new(sources: Vec<Box<dyn MessageSource>>) -> Self {
        Self { sources }
    }

    /// Append a source with higher priority than those already added.
    pub fn with(mut self, source: impl MessageSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl MessageSource for CompositeSource {
    fn name(&self) -> String {
        let names: Vec<String> = self.sources.iter().map(MessageSource::name).collect();
        format!("composite({})", names.join(", "))
    }

    fn load(&self) -> Result<Catalog, LoadError> {
        let mut merged = Catalog::new();
        for source in &self.sources {
            let catalog = source.load()?;
            debug!(source = %source.name(), entries = catalog.len(), "folding source into composite");
            merged.extend(catalog);
        }
        Ok(merged)
    }
}
