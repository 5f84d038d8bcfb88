//! Message registry with atomically published snapshots.
//!
//! The registry resolves codes against two layers: built-in defaults and one
//! custom layer loaded from sources. Readers pin the current [`Snapshot`] without
//! locking. Reconfiguration builds a complete replacement snapshot off to the side
//! and publishes it with a single atomic store, so a concurrent reader observes
//! either the whole previous snapshot or the whole new one.

mod snapshot;

use std::path::Path;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use tracing::{debug, warn};

pub use snapshot::{Snapshot, TemplateMap};

use crate::error::{KNOWN_CODE_SAMPLE, LoadError, RegistryError, compute_suggestions};
use crate::source::{CompositeSource, EmbeddedSource, FileSource, InMemorySource, MessageSource};
use crate::types::{Message, PartialTemplate, Template};

static BUILTIN_DEFAULTS: LazyLock<Arc<TemplateMap>> = LazyLock::new(|| {
    let defaults = materialize_defaults(&EmbeddedSource::defaults())
        .expect("embedded default catalog is valid");
    Arc::new(defaults)
});

/// Resolves message codes into [`Message`] values.
///
/// A registry is owned by the application's composition root and shared by
/// reference (usually behind an `Arc`). All methods take `&self`.
///
/// # Example
///
/// ```
/// use msgcode::{MessageRegistry, Params};
///
/// let registry = MessageRegistry::new();
/// let message = registry
///     .get("CRUD_001")
///     .unwrap()
///     .with_params(&Params::new().with("resource", "User"));
///
/// assert_eq!(message.description(), "User has been created.");
/// assert_eq!(message.status_code(), 200);
/// ```
#[derive(Debug)]
pub struct MessageRegistry {
    defaults: Arc<TemplateMap>,
    snapshot: ArcSwap<Snapshot>,
}

impl Default for MessageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRegistry {
    /// Create a registry over the built-in default catalog.
    ///
    /// The embedded catalog is parsed once per process, on first use.
    pub fn new() -> Self {
        Self::from_defaults(Arc::clone(&BUILTIN_DEFAULTS))
    }

    /// Create a registry whose default layer comes from `source`.
    ///
    /// Every entry in a default source must be complete.
    pub fn with_defaults(source: &dyn MessageSource) -> Result<Self, LoadError> {
        let defaults = materialize_defaults(source)?;
        Ok(Self::from_defaults(Arc::new(defaults)))
    }

    fn from_defaults(defaults: Arc<TemplateMap>) -> Self {
        let snapshot = Snapshot::defaults_only(Arc::clone(&defaults));
        Self {
            defaults,
            snapshot: ArcSwap::from_pointee(snapshot),
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Resolve `code` into a fresh message.
    ///
    /// Looks in the custom layer, then the defaults. Unknown codes are always an
    /// error, never an empty message.
    pub fn get(&self, code: &str) -> Result<Message, RegistryError> {
        let snapshot = self.snapshot.load();
        match snapshot.get(code) {
            Some(template) => Ok(Message::from_template(code, template)),
            None => Err(not_found(code, &snapshot)),
        }
    }

    /// The template `code` currently resolves to, custom layer first.
    pub fn get_template(&self, code: &str) -> Option<Template> {
        self.snapshot.load().get(code).cloned()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.snapshot.load().contains(code)
    }

    /// Sorted, deduplicated codes across defaults and the custom layer.
    ///
    /// Intended for introspection and tooling.
    pub fn all_codes(&self) -> Vec<String> {
        self.snapshot.load().codes()
    }

    /// Pin the currently published snapshot.
    ///
    /// Use this when several lookups must see the same state.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot.load_full()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the custom layer with the contents of `source`.
    ///
    /// Partial entries are merged field by field onto the default template for
    /// the same code. On error the published snapshot is left as it was. Returns
    /// the number of templates in the new custom layer.
    pub fn configure(&self, source: &dyn MessageSource) -> Result<usize, LoadError> {
        let name = source.name();
        let custom = match self.build_custom_layer(source) {
            Ok(custom) => custom,
            Err(e) => {
                warn!(source = %name, error = %e, "message source rejected");
                return Err(e);
            }
        };

        let count = custom.len();
        self.publish(Snapshot::new(Arc::clone(&self.defaults), custom));
        debug!(source = %name, templates = count, "published message snapshot");
        Ok(count)
    }

    /// Replace the custom layer with several sources, later ones winning.
    ///
    /// Behaves exactly like configuring a [`CompositeSource`] of `sources`.
    pub fn configure_all(&self, sources: Vec<Box<dyn MessageSource>>) -> Result<usize, LoadError> {
        self.configure(&CompositeSource::new(sources))
    }

    /// Replace the custom layer with a JSON catalog file.
    pub fn load_custom_messages(&self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        self.configure(&FileSource::new(path.as_ref()))
    }

    /// Replace the custom layer with in-memory entries.
    pub fn load_custom_messages_from<K, V>(
        &self,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Result<usize, LoadError>
    where
        K: Into<String>,
        V: Into<PartialTemplate>,
    {
        self.configure(&InMemorySource::new(entries))
    }

    /// Discard the custom layer, leaving only the defaults.
    ///
    /// Meant for tests. Racing this against `configure` in production has no
    /// defined winner.
    pub fn reset(&self) {
        self.publish(Snapshot::defaults_only(Arc::clone(&self.defaults)));
        debug!("message registry reset to defaults");
    }

    fn build_custom_layer(&self, source: &dyn MessageSource) -> Result<TemplateMap, LoadError> {
        let name = source.name();
        source
            .load()?
            .into_iter()
            .map(|(code, entry)| {
                let template = entry
                    .materialize(self.defaults.get(&code))
                    .map_err(|reason| LoadError::InvalidEntry {
                        origin: name.clone(),
                        code: code.clone(),
                        reason,
                    })?;
                Ok((code, template))
            })
            .collect()
    }

    fn publish(&self, snapshot: Snapshot) {
        self.snapshot.store(Arc::new(snapshot));
    }
}

fn materialize_defaults(source: &dyn MessageSource) -> Result<TemplateMap, LoadError> {
    let name = source.name();
    let defaults = source
        .load()?
        .into_iter()
        .map(|(code, entry)| {
            let template = entry
                .materialize(None)
                .map_err(|reason| LoadError::InvalidEntry {
                    origin: name.clone(),
                    code: code.clone(),
                    reason,
                })?;
            Ok((code, template))
        })
        .collect::<Result<TemplateMap, LoadError>>()?;
    debug!(source = %name, templates = defaults.len(), "loaded default messages");
    Ok(defaults)
}

fn not_found(code: &str, snapshot: &Snapshot) -> RegistryError {
    let codes = snapshot.codes();
    RegistryError::MessageNotFound {
        code: code.to_string(),
        suggestions: compute_suggestions(code, &codes),
        known: codes.into_iter().take(KNOWN_CODE_SAMPLE).collect(),
    }
}
