use owo_colors::{AnsiColors, OwoColorize, Stream};
use serde_json::Value as JsonValue;

use crate::format::text::text_lines;
use crate::format::{Formatter, FormatterOptions, fields};
use crate::types::{Message, Severity};

/// When the console formatter emits ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when stdout supports it (honors `NO_COLOR` / `FORCE_COLOR`).
    #[default]
    Auto,
    Always,
    Never,
}

/// Plain text with a severity icon and a severity-colored header line.
#[derive(Debug, Clone, Default)]
pub struct ConsoleFormatter {
    options: FormatterOptions,
    color: ColorMode,
}

impl ConsoleFormatter {
    pub fn new(options: FormatterOptions) -> Self {
        Self {
            options,
            color: ColorMode::Auto,
        }
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    fn paint(&self, text: &str, severity: Severity) -> String {
        let color = severity_color(severity);
        match self.color {
            ColorMode::Always => text.color(color).to_string(),
            ColorMode::Never => text.to_string(),
            ColorMode::Auto => text
                .if_supports_color(Stream::Stdout, |t| t.color(color))
                .to_string(),
        }
    }
}

impl Formatter for ConsoleFormatter {
    fn format(&self, message: &Message) -> String {
        let mut lines = text_lines(message, &self.options);
        let severity = message.severity();
        let header = format!("{} {}", severity_icon(severity), lines[0]);
        lines[0] = self.paint(&header, severity);
        lines.join("\n")
    }

    fn format_as_object(&self, message: &Message) -> JsonValue {
        JsonValue::Object(fields::extract(message, &self.options))
    }
}

/// Icon printed before the header line.
pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✔",
        Severity::Info => "ℹ",
        Severity::Warning => "⚠",
        Severity::Error => "✖",
        Severity::Critical => "‼",
    }
}

fn severity_color(severity: Severity) -> AnsiColors {
    match severity {
        Severity::Success => AnsiColors::Green,
        Severity::Info => AnsiColors::Blue,
        Severity::Warning => AnsiColors::Yellow,
        Severity::Error => AnsiColors::Red,
        Severity::Critical => AnsiColors::BrightRed,
    }
}
