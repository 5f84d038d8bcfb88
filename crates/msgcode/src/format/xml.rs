use serde_json::Value as JsonValue;

use crate::format::{Formatter, FormatterOptions, fields};
use crate::types::Message;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Renders messages as an XML `<message>` document.
///
/// Each extracted field becomes a child element. Nested objects (data and
/// metadata) become `<entry key="...">` elements and arrays become `<item>`
/// elements, so arbitrary keys never have to be valid XML names. Null values
/// render as empty elements.
#[derive(Debug, Clone, Default)]
pub struct XmlFormatter {
    options: FormatterOptions,
}

impl XmlFormatter {
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }
}

impl Formatter for XmlFormatter {
    fn format(&self, message: &Message) -> String {
        let mut writer = XmlWriter::new(self.options.pretty);
        writer.out.push_str(DECLARATION);
        writer.newline();
        writer.out.push_str("<message>");
        for (name, value) in fields::extract(message, &self.options) {
            writer.newline();
            writer.element(&name, None, &value, 1);
        }
        writer.newline();
        writer.out.push_str("</message>");
        writer.out
    }

    fn format_as_object(&self, message: &Message) -> JsonValue {
        JsonValue::Object(fields::extract(message, &self.options))
    }
}

struct XmlWriter {
    out: String,
    pretty: bool,
}

impl XmlWriter {
    fn new(pretty: bool) -> Self {
        Self {
            out: String::new(),
            pretty,
        }
    }

    fn newline(&mut self) {
        if self.pretty {
            self.out.push('\n');
        }
    }

    fn indent(&mut self, depth: usize) {
        if self.pretty {
            self.out.push_str(&"  ".repeat(depth));
        }
    }

    fn open(&mut self, name: &str, key: Option<&str>) {
        self.out.push('<');
        self.out.push_str(name);
        if let Some(key) = key {
            self.out.push_str(" key=\"");
            self.out.push_str(&escape(key));
            self.out.push('"');
        }
    }

    fn element(&mut self, name: &str, key: Option<&str>, value: &JsonValue, depth: usize) {
        self.indent(depth);
        self.open(name, key);
        match value {
            JsonValue::Null => self.out.push_str(" />"),
            JsonValue::Object(map) if map.is_empty() => self.out.push_str(" />"),
            JsonValue::Array(items) if items.is_empty() => self.out.push_str(" />"),
            JsonValue::Object(map) => {
                self.out.push('>');
                for (child_key, child) in map {
                    self.newline();
                    self.element("entry", Some(child_key), child, depth + 1);
                }
                self.close_block(name, depth);
            }
            JsonValue::Array(items) => {
                self.out.push('>');
                for item in items {
                    self.newline();
                    self.element("item", None, item, depth + 1);
                }
                self.close_block(name, depth);
            }
            JsonValue::String(s) => self.close_inline(name, &escape(s)),
            JsonValue::Bool(b) => self.close_inline(name, &b.to_string()),
            JsonValue::Number(n) => self.close_inline(name, &n.to_string()),
        }
    }

    fn close_inline(&mut self, name: &str, text: &str) {
        self.out.push('>');
        self.out.push_str(text);
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    fn close_block(&mut self, name: &str, depth: usize) {
        self.newline();
        self.indent(depth);
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }
}

/// Escape text for element content and attribute values.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
