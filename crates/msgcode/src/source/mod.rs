//! Read-only message sources.
//!
//! A source produces a [`Catalog`] of template entries keyed by code. Entries may
//! be partial; the registry materializes them against its defaults when a source
//! is configured. Sources are read at load time and not retained afterwards.

mod composite;
mod database;
mod document;
mod embedded;
mod file;
mod memory;

use std::collections::BTreeMap;

pub use composite::CompositeSource;
pub use database::{DatabaseSource, StoreError, TemplateRecord, TemplateStore};
pub use document::parse_catalog;
pub use embedded::EmbeddedSource;
pub use file::FileSource;
pub use memory::InMemorySource;

use crate::error::LoadError;
use crate::types::PartialTemplate;

/// Template entries keyed by message code.
pub type Catalog = BTreeMap<String, PartialTemplate>;

/// A read-only provider of code → template entries.
pub trait MessageSource: Send + Sync {
    /// Name used to identify this source in errors and logs.
    fn name(&self) -> String;

    /// Read the source's entries.
    fn load(&self) -> Result<Catalog, LoadError>;
}

impl<S: MessageSource + ?Sized> MessageSource for Box<S> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn load(&self) -> Result<Catalog, LoadError> {
        (**self).load()
    }
}
