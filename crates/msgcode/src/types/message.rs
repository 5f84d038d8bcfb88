use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

use super::{Params, Severity, Template};
use crate::substitution::substitute;

/// An immutable response message instantiated from a [`Template`].
///
/// Messages are enriched through `with_*` methods. Each call leaves the receiver
/// untouched and returns a new message, so a message obtained from a registry can
/// be shared and specialized freely.
///
/// The status code is resolved on every read: a status set through
/// [`with_status_code`](Message::with_status_code) wins over the template's
/// explicit status, which wins over the severity default.
///
/// # Example
///
/// ```
/// use msgcode::{Message, Params, Severity, Template};
///
/// let template = Template::builder()
///     .severity(Severity::Success)
///     .title("Created")
///     .description("{resource} has been created.")
///     .build();
///
/// let message = Message::from_template("CRUD_001", &template)
///     .with_params(&Params::new().with("resource", "User"))
///     .with_correlation_id("req-42");
///
/// assert_eq!(message.description(), "User has been created.");
/// assert_eq!(message.status_code(), 200);
/// assert_eq!(message.correlation_id(), Some("req-42"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    code: String,
    severity: Severity,
    title: String,
    description: String,
    hint: Option<String>,
    template_status: Option<u16>,
    status_override: Option<u16>,
    timestamp: DateTime<Utc>,
    correlation_id: Option<String>,
    data: Option<JsonValue>,
    metadata: BTreeMap<String, JsonValue>,
    params: Option<Params>,
}

impl Message {
    /// Instantiate `template` under `code`, stamped with the current time.
    pub fn from_template(code: impl Into<String>, template: &Template) -> Self {
        Message {
            code: code.into(),
            severity: template.severity,
            title: template.title.clone(),
            description: template.description.clone(),
            hint: template.hint.clone(),
            template_status: template.status_code,
            status_override: None,
            timestamp: Utc::now(),
            correlation_id: None,
            data: None,
            metadata: BTreeMap::new(),
            params: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// The effective status code.
    pub fn status_code(&self) -> u16 {
        self.status_override
            .or(self.template_status)
            .unwrap_or_else(|| self.severity.default_status_code())
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn data(&self) -> Option<&JsonValue> {
        self.data.as_ref()
    }

    /// Metadata entries, ordered by key. Empty when nothing was attached.
    pub fn metadata(&self) -> &BTreeMap<String, JsonValue> {
        &self.metadata
    }

    /// The parameters most recently applied through [`with_params`](Message::with_params).
    pub fn params(&self) -> Option<&Params> {
        self.params.as_ref()
    }

    /// Whether the message reports a successful outcome.
    pub fn is_success(&self) -> bool {
        self.severity.is_success()
    }

    // =========================================================================
    // Enrichment
    // =========================================================================

    /// Substitute `{name}` placeholders in the title and description.
    pub fn with_params(&self, params: &Params) -> Message {
        let mut next = self.clone();
        next.title = substitute(&self.title, params);
        next.description = substitute(&self.description, params);
        next.params = Some(params.clone());
        next
    }

    /// Override the status code. Always takes precedence over template and
    /// severity defaults.
    pub fn with_status_code(&self, status_code: u16) -> Message {
        let mut next = self.clone();
        next.status_override = Some(status_code);
        next
    }

    pub fn with_correlation_id(&self, correlation_id: impl Into<String>) -> Message {
        let mut next = self.clone();
        next.correlation_id = Some(correlation_id.into());
        next
    }

    /// Attach a data payload, replacing any previous payload.
    pub fn with_data(&self, data: impl Into<JsonValue>) -> Message {
        let mut next = self.clone();
        next.data = Some(data.into());
        next
    }

    /// Add or replace one metadata entry.
    pub fn with_metadata(&self, key: impl Into<String>, value: impl Into<JsonValue>) -> Message {
        let mut next = self.clone();
        next.metadata.insert(key.into(), value.into());
        next
    }

    /// Add or replace several metadata entries at once.
    pub fn with_metadata_entries<K, V>(&self, entries: impl IntoIterator<Item = (K, V)>) -> Message
    where
        K: Into<String>,
        V: Into<JsonValue>,
    {
        let mut next = self.clone();
        next.metadata
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        next
    }

    pub fn with_hint(&self, hint: impl Into<String>) -> Message {
        let mut next = self.clone();
        next.hint = Some(hint.into());
        next
    }

    pub fn with_timestamp(&self, timestamp: DateTime<Utc>) -> Message {
        let mut next = self.clone();
        next.timestamp = timestamp;
        next
    }
}
