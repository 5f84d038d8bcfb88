use serde_json::Value as JsonValue;

use crate::format::{Formatter, FormatterOptions, fields};
use crate::types::Message;

/// Renders messages as JSON objects.
///
/// ```
/// use msgcode::{Formatter, FormatterOptions, JsonFormatter, MessageRegistry};
///
/// let message = MessageRegistry::new().get("AUTH_001").unwrap();
/// let json = JsonFormatter::new(FormatterOptions::default()).format_as_object(&message);
///
/// assert_eq!(json["statusCode"], 401);
/// assert_eq!(json["success"], false);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    options: FormatterOptions,
}

impl JsonFormatter {
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, message: &Message) -> String {
        let object = self.format_as_object(message);
        if self.options.pretty {
            format!("{object:#}")
        } else {
            object.to_string()
        }
    }

    fn format_as_object(&self, message: &Message) -> JsonValue {
        JsonValue::Object(fields::extract(message, &self.options))
    }
}
