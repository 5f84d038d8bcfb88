use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::trace;

use crate::format::Formatter;
use crate::intercept::{Intercepted, InterceptorPipeline};
use crate::types::Message;

/// A formatter whose rendering is wrapped by an interceptor pipeline.
///
/// Before hooks see the message first and may enrich it; the inner formatter
/// renders the enriched message; after hooks then see the rendered message.
pub struct InterceptedFormatter {
    inner: Arc<dyn Formatter>,
    pipeline: Arc<InterceptorPipeline>,
}

impl InterceptedFormatter {
    pub fn new(inner: impl Formatter + 'static, pipeline: Arc<InterceptorPipeline>) -> Self {
        Self::from_arc(Arc::new(inner), pipeline)
    }

    pub fn from_arc(inner: Arc<dyn Formatter>, pipeline: Arc<InterceptorPipeline>) -> Self {
        Self { inner, pipeline }
    }

    /// Render `message` as text and return the message as left by the after hooks.
    pub fn render(&self, message: Message) -> Intercepted<String> {
        trace!(code = message.code(), "formatting message");
        self.pipeline.run(message, |m| self.inner.format(m))
    }

    /// Render `message` as a structured value and return the final message.
    pub fn render_object(&self, message: Message) -> Intercepted<JsonValue> {
        trace!(code = message.code(), "formatting message as object");
        self.pipeline.run(message, |m| self.inner.format_as_object(m))
    }
}

impl Formatter for InterceptedFormatter {
    fn format(&self, message: &Message) -> String {
        self.render(message.clone()).output
    }

    fn format_as_object(&self, message: &Message) -> JsonValue {
        self.render_object(message.clone()).output
    }
}
