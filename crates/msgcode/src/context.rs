//! The composition root tying registry, formatters and interceptors together.

use std::sync::Arc;

use bon::bon;
use serde_json::Value as JsonValue;

use crate::error::FormatError;
use crate::format::{FormatterOptions, FormatterRegistry};
use crate::intercept::{Interceptor, InterceptorPipeline};
use crate::registry::MessageRegistry;
use crate::types::Message;

/// Owns the three process-scoped stores: message registry, formatter registry and
/// interceptor pipeline.
///
/// Create one at startup and hand it (or its parts) to whatever needs them. The
/// stores are independent: no operation spans more than one of them atomically.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use msgcode::{Interceptor, MessageContext, MetadataInterceptor, Params};
///
/// let metadata: Arc<dyn Interceptor> = Arc::new(MetadataInterceptor::new().with("service", "api"));
/// let context = MessageContext::builder().interceptors(vec![metadata]).build();
///
/// let message = context
///     .registry()
///     .get("VAL_001")
///     .unwrap()
///     .with_params(&Params::new().with("field", "Email"));
/// let json = context.format_as_object(&message, "json").unwrap();
///
/// assert_eq!(json["description"], "Email is required.");
/// assert_eq!(json["metadata"]["service"], "api");
/// ```
pub struct MessageContext {
    registry: Arc<MessageRegistry>,
    formatters: Arc<FormatterRegistry>,
    interceptors: Arc<InterceptorPipeline>,
}

#[bon]
impl MessageContext {
    /// Build a context.
    ///
    /// Without a registry the built-in defaults are used. The built-in formatters
    /// are registered with `options`, and `interceptors` are registered in order.
    #[builder]
    pub fn new(
        registry: Option<Arc<MessageRegistry>>,
        #[builder(default)] options: FormatterOptions,
        #[builder(default)] interceptors: Vec<Arc<dyn Interceptor>>,
    ) -> Self {
        let pipeline = Arc::new(InterceptorPipeline::new());
        for interceptor in interceptors {
            pipeline.register_arc(interceptor);
        }
        let formatters = FormatterRegistry::with_builtins(Arc::clone(&pipeline), options);
        Self {
            registry: registry.unwrap_or_default(),
            formatters: Arc::new(formatters),
            interceptors: pipeline,
        }
    }
}

impl Default for MessageContext {
    fn default() -> Self {
        MessageContext::builder().build()
    }
}

impl MessageContext {
    pub fn registry(&self) -> &Arc<MessageRegistry> {
        &self.registry
    }

    pub fn formatters(&self) -> &Arc<FormatterRegistry> {
        &self.formatters
    }

    pub fn interceptors(&self) -> &Arc<InterceptorPipeline> {
        &self.interceptors
    }

    /// Render `message` with the formatter registered as `formatter`.
    pub fn format(&self, message: &Message, formatter: &str) -> Result<String, FormatError> {
        Ok(self.formatters.get(formatter)?.format(message))
    }

    /// Render `message` as a structured value with the named formatter.
    pub fn format_as_object(
        &self,
        message: &Message,
        formatter: &str,
    ) -> Result<JsonValue, FormatError> {
        Ok(self.formatters.get(formatter)?.format_as_object(message))
    }
}
