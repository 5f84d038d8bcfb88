use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{Level, error, info, warn};

use crate::intercept::Interceptor;
use crate::types::{LogLevel, Message};

/// Adds fixed metadata entries before formatting.
///
/// Entries already present on the message are left alone.
#[derive(Debug, Clone, Default)]
pub struct MetadataInterceptor {
    entries: BTreeMap<String, JsonValue>,
}

impl MetadataInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl Interceptor for MetadataInterceptor {
    fn on_before_format(&self, message: Message) -> Message {
        let missing: Vec<(String, JsonValue)> = self
            .entries
            .iter()
            .filter(|(key, _)| !message.metadata().contains_key(*key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        if missing.is_empty() {
            message
        } else {
            message.with_metadata_entries(missing)
        }
    }
}

/// Fills in a correlation id when the message has none.
pub struct CorrelationIdInterceptor {
    generate: Arc<dyn Fn() -> String + Send + Sync>,
}

impl CorrelationIdInterceptor {
    pub fn new(generate: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            generate: Arc::new(generate),
        }
    }
}

impl Interceptor for CorrelationIdInterceptor {
    fn on_before_format(&self, message: Message) -> Message {
        if message.correlation_id().is_some() {
            message
        } else {
            message.with_correlation_id((self.generate)())
        }
    }
}

/// Emits one structured `tracing` event per formatted message.
///
/// The event level follows [`Severity::log_level`](crate::Severity::log_level).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingInterceptor;

impl Interceptor for TracingInterceptor {
    fn on_after_format(&self, message: Message) -> Message {
        let LogLevel { level, critical } = message.severity().log_level();
        let code = message.code();
        let status = message.status_code();
        let correlation_id = message.correlation_id().unwrap_or_default();

        if level == Level::ERROR {
            error!(code, status, critical, correlation_id, "{}", message.title());
        } else if level == Level::WARN {
            warn!(code, status, correlation_id, "{}", message.title());
        } else {
            info!(code, status, correlation_id, "{}", message.title());
        }
        message
    }
}
