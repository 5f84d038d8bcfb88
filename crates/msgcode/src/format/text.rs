use chrono::SecondsFormat;
use serde_json::Value as JsonValue;

use crate::format::{Formatter, FormatterOptions, fields};
use crate::types::Message;

/// Renders messages as plain, line-oriented text.
///
/// The first line is `[SEVERITY] CODE: Title`, followed by the description and
/// one `Label: value` line per enabled optional field.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    options: FormatterOptions,
}

impl TextFormatter {
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }
}

impl Formatter for TextFormatter {
    fn format(&self, message: &Message) -> String {
        text_lines(message, &self.options).join("\n")
    }

    fn format_as_object(&self, message: &Message) -> JsonValue {
        JsonValue::Object(fields::extract(message, &self.options))
    }
}

/// The text rendering as separate lines; the first line is the header.
pub(crate) fn text_lines(message: &Message, options: &FormatterOptions) -> Vec<String> {
    let mut lines = vec![
        format!(
            "[{}] {}: {}",
            message.severity().as_str().to_uppercase(),
            message.code(),
            message.title()
        ),
        message.description().to_string(),
    ];

    if options.include_hint {
        if let Some(hint) = message.hint() {
            lines.push(format!("Hint: {hint}"));
        }
    }
    if options.include_status_code {
        lines.push(format!("Status: {}", message.status_code()));
    }
    if options.include_correlation_id {
        if let Some(id) = message.correlation_id() {
            lines.push(format!("Correlation ID: {id}"));
        }
    }
    if options.include_timestamp {
        lines.push(format!(
            "Timestamp: {}",
            message
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        ));
    }
    if options.include_data {
        if let Some(data) = message.data() {
            lines.push(format!("Data: {}", plain(data)));
        }
    }
    if options.include_metadata && !message.metadata().is_empty() {
        let entries: Vec<String> = message
            .metadata()
            .iter()
            .map(|(key, value)| format!("{key}={}", plain(value)))
            .collect();
        lines.push(format!("Metadata: {}", entries.join(", ")));
    }
    if options.include_parameters {
        if let Some(params) = message.params().filter(|p| !p.is_empty()) {
            let entries: Vec<String> = params
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            lines.push(format!("Parameters: {}", entries.join(", ")));
        }
    }

    lines
}

/// Strings print without quotes; everything else prints as compact JSON.
fn plain(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
