use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::Level;

/// The kind of outcome a message describes.
///
/// Severity is a closed set: every message falls into exactly one of these five
/// categories, and the category drives both the default HTTP status code and the
/// decoration applied by console-style formatters.
///
/// # Example
///
/// ```
/// use msgcode::Severity;
///
/// let severity: Severity = "error".parse().unwrap();
/// assert_eq!(severity, Severity::Error);
/// assert_eq!(severity.default_status_code(), 400);
/// assert_eq!(severity.to_string(), "error");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
    Critical,
}

/// Level a logging sink should use for a severity.
///
/// `tracing` has no level above `ERROR`, so critical messages map to `ERROR`
/// with `critical` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel {
    pub level: Level,
    pub critical: bool,
}

/// Returned when a severity name is not one of the five known kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown message type '{name}', expected one of: success, info, warning, error, critical")]
pub struct UnknownSeverity {
    pub name: String,
}

impl Severity {
    /// All severities, from least to most severe.
    pub const ALL: [Severity; 5] = [
        Severity::Success,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Lowercase name used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }

    /// Status code used when neither the template nor the caller supplies one.
    pub fn default_status_code(self) -> u16 {
        match self {
            Severity::Success | Severity::Info | Severity::Warning => 200,
            Severity::Error => 400,
            Severity::Critical => 500,
        }
    }

    /// Whether messages of this kind report a successful outcome.
    pub fn is_success(self) -> bool {
        matches!(self, Severity::Success | Severity::Info | Severity::Warning)
    }

    /// Log level a sink should emit this severity at.
    pub fn log_level(self) -> LogLevel {
        let level = match self {
            Severity::Success | Severity::Info => Level::INFO,
            Severity::Warning => Level::WARN,
            Severity::Error | Severity::Critical => Level::ERROR,
        };
        LogLevel {
            level,
            critical: self == Severity::Critical,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSeverity {
                name: s.to_string(),
            })
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
