//! Field extraction shared by the built-in formatters.

use chrono::SecondsFormat;
use serde_json::{Map, Value as JsonValue};

use crate::format::FormatterOptions;
use crate::types::Message;

/// Build the structured representation of `message` under `options`.
///
/// Keys are camelCase and appear in a fixed order: `success`, `code`, `type`,
/// `title`, `description`, `hint`, `statusCode`, `timestamp`, `correlationId`,
/// `data`, `metadata`, `parameters`.
pub fn extract(message: &Message, options: &FormatterOptions) -> Map<String, JsonValue> {
    let mut fields = Map::new();
    fields.insert("success".into(), JsonValue::Bool(message.is_success()));
    fields.insert("code".into(), message.code().into());
    fields.insert("type".into(), message.severity().as_str().into());
    fields.insert("title".into(), message.title().into());
    fields.insert("description".into(), message.description().into());

    if options.include_hint {
        optional(
            &mut fields,
            "hint",
            message.hint().map(JsonValue::from),
            options,
        );
    }
    if options.include_status_code {
        fields.insert("statusCode".into(), message.status_code().into());
    }
    if options.include_timestamp {
        fields.insert(
            "timestamp".into(),
            message
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::Millis, true)
                .into(),
        );
    }
    if options.include_correlation_id {
        optional(
            &mut fields,
            "correlationId",
            message.correlation_id().map(JsonValue::from),
            options,
        );
    }
    if options.include_data {
        optional(&mut fields, "data", message.data().cloned(), options);
    }
    if options.include_metadata
        && (!message.metadata().is_empty() || options.include_null_fields)
    {
        let metadata: Map<String, JsonValue> = message
            .metadata()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        fields.insert("metadata".into(), JsonValue::Object(metadata));
    }
    if options.include_parameters {
        let parameters = message.params().map(|params| {
            JsonValue::Object(
                params
                    .iter()
                    .map(|(name, value)| (name.to_string(), JsonValue::from(value)))
                    .collect(),
            )
        });
        optional(&mut fields, "parameters", parameters, options);
    }

    fields
}

fn optional(
    fields: &mut Map<String, JsonValue>,
    key: &str,
    value: Option<JsonValue>,
    options: &FormatterOptions,
) {
    match value {
        Some(value) => {
            fields.insert(key.to_string(), value);
        }
        None if options.include_null_fields => {
            fields.insert(key.to_string(), JsonValue::Null);
        }
        None => {}
    }
}
