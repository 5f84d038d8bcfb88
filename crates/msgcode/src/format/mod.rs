//! Message formatters.
//!
//! A [`Formatter`] turns a [`Message`] into text or a structured value. There are
//! two ways to expose one:
//!
//! - bare, where the formatter renders exactly what it is given;
//! - wrapped in an [`InterceptedFormatter`], which runs the interceptor pipeline's
//!   before hooks ahead of rendering and its after hooks once output exists.
//!
//! The built-ins registered by [`FormatterRegistry::with_builtins`] are all
//! intercepted. Registering a bare formatter skips interceptors entirely, which
//! suits hot paths that want no hook overhead.

mod console;
pub mod fields;
mod intercepted;
mod json;
mod options;
mod registry;
mod text;
mod xml;

use serde_json::Value as JsonValue;

pub use console::{ColorMode, ConsoleFormatter, severity_icon};
pub use intercepted::InterceptedFormatter;
pub use json::JsonFormatter;
pub use options::FormatterOptions;
pub use registry::FormatterRegistry;
pub use text::TextFormatter;
pub use xml::XmlFormatter;

use crate::types::Message;

/// Renders a message.
pub trait Formatter: Send + Sync {
    /// Render `message` as text.
    fn format(&self, message: &Message) -> String;

    /// Render `message` as a structured value.
    fn format_as_object(&self, message: &Message) -> JsonValue;
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, message: &Message) -> String {
        (**self).format(message)
    }

    fn format_as_object(&self, message: &Message) -> JsonValue {
        (**self).format_as_object(message)
    }
}
