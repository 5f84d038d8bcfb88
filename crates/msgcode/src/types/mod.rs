mod message;
mod params;
mod severity;
mod template;
mod value;

pub use message::Message;
pub use params::Params;
pub use severity::{LogLevel, Severity, UnknownSeverity};
pub use template::{PartialTemplate, Template, TemplateError};
pub use value::Value;
