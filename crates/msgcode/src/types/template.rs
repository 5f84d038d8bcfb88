use bon::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Severity;

/// The static definition behind a message code.
///
/// Templates are plain data. The description may contain `{name}` placeholders
/// that are filled in later through [`Message::with_params`](crate::Message::with_params).
///
/// # Example
///
/// ```
/// use msgcode::{Severity, Template};
///
/// let template = Template::builder()
///     .severity(Severity::Error)
///     .title("Validation failed")
///     .description("{field} is required.")
///     .build();
///
/// assert_eq!(template.status_code, None);
/// assert_eq!(template.resolved_status_code(), 400);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "type")]
    pub severity: Severity,

    #[builder(into)]
    pub title: String,

    #[builder(into)]
    pub description: String,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Explicit status; when absent the severity default applies.
    #[serde(rename = "httpStatusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl Template {
    /// The template's status code, falling back to the severity default.
    pub fn resolved_status_code(&self) -> u16 {
        self.status_code
            .unwrap_or_else(|| self.severity.default_status_code())
    }
}

/// A template entry as it appears in a source, where every field may be absent.
///
/// Absent fields are inherited from the default template for the same code when
/// the entry is materialized. An entry for a code with no default must be complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTemplate {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    #[serde(
        rename = "httpStatusCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<u16>,
}

/// Why a partial entry could not become a [`Template`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A required field is absent and there is no default template to inherit it from.
    #[error("missing required field '{field}' and no default template to inherit it from")]
    MissingField { field: &'static str },

    /// A required text field is present but empty.
    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// The status code is not a valid HTTP status.
    #[error("status code {status} is outside 100..=599")]
    StatusOutOfRange { status: u16 },
}

impl PartialTemplate {
    /// Whether the entry carries every required field on its own.
    pub fn is_complete(&self) -> bool {
        self.severity.is_some() && self.title.is_some() && self.description.is_some()
    }

    /// Overlays this entry onto `base`, producing a whole template.
    ///
    /// Fields present here win; absent fields come from `base`.
    pub fn materialize(self, base: Option<&Template>) -> Result<Template, TemplateError> {
        let severity = self
            .severity
            .or(base.map(|b| b.severity))
            .ok_or(TemplateError::MissingField { field: "type" })?;
        let title = required(self.title, base.map(|b| &b.title), "title")?;
        let description = required(
            self.description,
            base.map(|b| &b.description),
            "description",
        )?;
        let hint = self.hint.or_else(|| base.and_then(|b| b.hint.clone()));
        let status_code = self.status_code.or(base.and_then(|b| b.status_code));

        if let Some(status) = status_code {
            if !(100..=599).contains(&status) {
                return Err(TemplateError::StatusOutOfRange { status });
            }
        }

        Ok(Template {
            severity,
            title,
            description,
            hint,
            status_code,
        })
    }
}

fn required(
    value: Option<String>,
    inherited: Option<&String>,
    field: &'static str,
) -> Result<String, TemplateError> {
    let value = value
        .or_else(|| inherited.cloned())
        .ok_or(TemplateError::MissingField { field })?;
    if value.trim().is_empty() {
        return Err(TemplateError::EmptyField { field });
    }
    Ok(value)
}

impl From<Template> for PartialTemplate {
    fn from(template: Template) -> Self {
        PartialTemplate {
            severity: Some(template.severity),
            title: Some(template.title),
            description: Some(template.description),
            hint: template.hint,
            status_code: template.status_code,
        }
    }
}
