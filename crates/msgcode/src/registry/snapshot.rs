use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::types::Template;

/// Whole templates keyed by code.
pub type TemplateMap = BTreeMap<String, Template>;

/// An immutable view of the registry's templates.
///
/// A snapshot pairs the shared default layer with one custom layer. Lookups try
/// the custom layer first. Snapshots are never modified once published; a
/// reconfiguration publishes a new one.
#[derive(Debug, Clone)]
pub struct Snapshot {
    defaults: Arc<TemplateMap>,
    custom: TemplateMap,
}

impl Snapshot {
    pub(crate) fn new(defaults: Arc<TemplateMap>, custom: TemplateMap) -> Self {
        Self { defaults, custom }
    }

    pub(crate) fn defaults_only(defaults: Arc<TemplateMap>) -> Self {
        Self::new(defaults, TemplateMap::new())
    }

    /// Look up a template, custom layer first.
    pub fn get(&self, code: &str) -> Option<&Template> {
        self.custom.get(code).or_else(|| self.defaults.get(code))
    }

    /// Look up a template in the default layer only.
    pub fn get_default(&self, code: &str) -> Option<&Template> {
        self.defaults.get(code)
    }

    /// Look up a template in the custom layer only.
    pub fn get_custom(&self, code: &str) -> Option<&Template> {
        self.custom.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Sorted, deduplicated codes across both layers.
    pub fn codes(&self) -> Vec<String> {
        self.defaults
            .keys()
            .chain(self.custom.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of templates in the custom layer.
    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }

    /// Number of templates in the default layer.
    pub fn default_len(&self) -> usize {
        self.defaults.len()
    }
}
