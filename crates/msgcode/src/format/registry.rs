use std::collections::BTreeMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

use crate::error::FormatError;
use crate::format::{
    ConsoleFormatter, Formatter, FormatterOptions, InterceptedFormatter, JsonFormatter,
    TextFormatter, XmlFormatter,
};
use crate::intercept::InterceptorPipeline;

type Factory = Arc<dyn Fn() -> Arc<dyn Formatter> + Send + Sync>;

#[derive(Clone)]
enum Registration {
    /// A fresh instance per lookup.
    Factory(Factory),
    /// One shared instance.
    Singleton(Arc<dyn Formatter>),
}

/// Name-keyed formatter lookup.
///
/// Names are case-sensitive. Registering a name that already exists replaces the
/// previous registration. Lookups never block; registration copies the map and
/// publishes the copy.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use msgcode::{FormatterOptions, FormatterRegistry, InterceptorPipeline, TextFormatter};
///
/// let pipeline = Arc::new(InterceptorPipeline::new());
/// let formatters = FormatterRegistry::with_builtins(pipeline, FormatterOptions::default());
/// formatters.register("plain", || TextFormatter::default());
///
/// assert_eq!(formatters.names(), vec!["console", "json", "plain", "text", "xml"]);
/// assert!(formatters.get("JSON").is_err());
/// ```
pub struct FormatterRegistry {
    pipeline: Arc<InterceptorPipeline>,
    entries: ArcSwap<BTreeMap<String, Registration>>,
}

impl FormatterRegistry {
    /// Create an empty registry whose intercepted registrations use `pipeline`.
    pub fn new(pipeline: Arc<InterceptorPipeline>) -> Self {
        Self {
            pipeline,
            entries: ArcSwap::from_pointee(BTreeMap::new()),
        }
    }

    /// Create a registry with `json`, `xml`, `text` and `console` registered as
    /// intercepted formatters sharing `options`.
    pub fn with_builtins(pipeline: Arc<InterceptorPipeline>, options: FormatterOptions) -> Self {
        let registry = Self::new(pipeline);
        let opts = options.clone();
        registry.register_intercepted("json", move || JsonFormatter::new(opts.clone()));
        let opts = options.clone();
        registry.register_intercepted("xml", move || XmlFormatter::new(opts.clone()));
        let opts = options.clone();
        registry.register_intercepted("text", move || TextFormatter::new(opts.clone()));
        registry.register_intercepted("console", move || ConsoleFormatter::new(options.clone()));
        registry
    }

    /// The pipeline intercepted registrations run through.
    pub fn pipeline(&self) -> &Arc<InterceptorPipeline> {
        &self.pipeline
    }

    /// Register a factory producing a new formatter on every lookup.
    ///
    /// The formatter is used bare: interceptors do not run around it.
    pub fn register<F, T>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Formatter + 'static,
    {
        let factory: Factory = Arc::new(move || Arc::new(factory()) as Arc<dyn Formatter>);
        self.insert(name.into(), Registration::Factory(factory));
    }

    /// Register a factory whose formatters run inside the interceptor pipeline.
    pub fn register_intercepted<F, T>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Formatter + 'static,
    {
        let pipeline = Arc::clone(&self.pipeline);
        let factory: Factory = Arc::new(move || {
            Arc::new(InterceptedFormatter::new(factory(), Arc::clone(&pipeline)))
                as Arc<dyn Formatter>
        });
        self.insert(name.into(), Registration::Factory(factory));
    }

    /// Register one shared formatter instance, used bare.
    ///
    /// Wrap the instance in an [`InterceptedFormatter`] first to have it run
    /// through interceptors.
    pub fn register_singleton(&self, name: impl Into<String>, formatter: Arc<dyn Formatter>) {
        self.insert(name.into(), Registration::Singleton(formatter));
    }

    /// Look up a formatter by exact name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Formatter>, FormatError> {
        let entries = self.entries.load();
        match entries.get(name) {
            Some(Registration::Factory(factory)) => Ok(factory()),
            Some(Registration::Singleton(formatter)) => Ok(Arc::clone(formatter)),
            None => Err(FormatError::FormatterNotFound {
                name: name.to_string(),
                available: sorted_names(&entries),
            }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.load().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        sorted_names(&self.entries.load())
    }

    fn insert(&self, name: String, registration: Registration) {
        debug!(formatter = %name, "registering formatter");
        self.entries.rcu(|current| {
            let mut next = BTreeMap::clone(current);
            next.insert(name.clone(), registration.clone());
            next
        });
    }
}

fn sorted_names(entries: &BTreeMap<String, Registration>) -> Vec<String> {
    entries.keys().cloned().collect()
}
