use std::error::Error as StdError;

use tracing::debug;

use crate::error::LoadError;
use crate::source::{Catalog, MessageSource};
use crate::types::PartialTemplate;

/// Error type returned by a [`TemplateStore`].
pub type StoreError = Box<dyn StdError + Send + Sync>;

/// One row fetched from a template store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    pub code: String,
    pub template: PartialTemplate,
}

impl TemplateRecord {
    pub fn new(code: impl Into<String>, template: impl Into<PartialTemplate>) -> Self {
        Self {
            code: code.into(),
            template: template.into(),
        }
    }
}

/// Backing store that can list template records.
///
/// Implement this over whatever database access layer an application uses.
/// Any `Fn() -> Result<Vec<TemplateRecord>, StoreError>` closure is a store.
pub trait TemplateStore: Send + Sync {
    fn fetch_templates(&self) -> Result<Vec<TemplateRecord>, StoreError>;
}

impl<F> TemplateStore for F
where
    F: Fn() -> Result<Vec<TemplateRecord>, StoreError> + Send + Sync,
{
    fn fetch_templates(&self) -> Result<Vec<TemplateRecord>, StoreError> {
        self()
    }
}

/// A source whose entries come from a [`TemplateStore`].
///
/// Records are fetched on every load. When a store returns the same code more
/// than once, the last record wins.
pub struct DatabaseSource<S> {
    name: String,
    store: S,
}

impl<S: TemplateStore> DatabaseSource<S> {
    pub fn new(name: impl Into<String>, store: S) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }
}

impl<S: TemplateStore> MessageSource for DatabaseSource<S> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn load(&self) -> Result<Catalog, LoadError> {
        let records = self
            .store
            .fetch_templates()
            .map_err(|source| LoadError::Fetch {
                origin: self.name.clone(),
                source,
            })?;
        debug!(source = %self.name, records = records.len(), "fetched template records");
        Ok(records
            .into_iter()
            .map(|record| (record.code, record.template))
            .collect())
    }
}
