//! Code-addressed response messages.
//!
//! `msgcode` resolves symbolic codes such as `"AUTH_001"` into immutable
//! [`Message`] values, lets callers enrich them through `with_*` methods, and
//! renders them through pluggable [`Formatter`]s with [`Interceptor`] hooks
//! running around formatting.
//!
//! - [`MessageRegistry`] layers custom catalogs over built-in defaults and
//!   publishes each configuration as one atomic snapshot.
//! - [`source`] holds the catalog providers: embedded, file, in-memory,
//!   composite and store-backed.
//! - [`FormatterRegistry`] maps names to JSON, XML, text and console renderers.
//! - [`MessageContext`] is the composition root owning all three stores.

mod context;
mod error;
pub mod format;
pub mod intercept;
pub mod registry;
pub mod source;
mod substitution;
pub mod types;

pub use context::MessageContext;
pub use error::{
    Error, FormatError, KNOWN_CODE_SAMPLE, LoadError, RegistryError, compute_suggestions,
};
pub use format::{
    ColorMode, ConsoleFormatter, Formatter, FormatterOptions, FormatterRegistry,
    InterceptedFormatter, JsonFormatter, TextFormatter, XmlFormatter,
};
pub use intercept::{
    CorrelationIdInterceptor, Intercepted, Interceptor, InterceptorPipeline, MetadataInterceptor,
    TracingInterceptor,
};
pub use registry::{MessageRegistry, Snapshot};
pub use substitution::{placeholders, substitute};
pub use types::{
    LogLevel, Message, Params, PartialTemplate, Severity, Template, TemplateError, UnknownSeverity,
    Value,
};

/// Creates a [`Params`] collection from name/value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, booleans and
/// strings can be passed directly. Order is preserved.
///
/// # Example
///
/// ```
/// use msgcode::params;
///
/// let p = params! { "resource" => "User", "id" => 7 };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p.get("ID").and_then(|v| v.as_number()), Some(7));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Params::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut params = $crate::Params::new();
            $(
                params.insert($key, $value);
            )+
            params
        }
    };
}
