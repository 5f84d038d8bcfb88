use bon::Builder;
use serde::{Deserialize, Serialize};

/// Toggles controlling which message fields the built-in formatters emit.
///
/// The defaults include everything except the parameters used and fields whose
/// value is absent. Options deserialize from camelCase keys with every key
/// optional, so an application can bind them from its own configuration.
///
/// # Example
///
/// ```
/// use msgcode::FormatterOptions;
///
/// let options = FormatterOptions::builder()
///     .include_timestamp(false)
///     .pretty(true)
///     .build();
/// assert!(options.include_status_code);
///
/// let bound: FormatterOptions =
///     serde_json::from_str(r#"{ "includeParameters": true }"#).unwrap();
/// assert!(bound.include_parameters);
/// assert!(bound.include_timestamp);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatterOptions {
    #[builder(default = true)]
    pub include_timestamp: bool,

    #[builder(default = true)]
    pub include_correlation_id: bool,

    #[builder(default = true)]
    pub include_status_code: bool,

    #[builder(default = true)]
    pub include_metadata: bool,

    #[builder(default = true)]
    pub include_data: bool,

    /// Emit the parameters applied through `with_params`.
    #[builder(default)]
    pub include_parameters: bool,

    #[builder(default = true)]
    pub include_hint: bool,

    /// Emit absent optional fields as explicit nulls (or empty maps) instead of
    /// omitting them.
    #[builder(default)]
    pub include_null_fields: bool,

    /// Indent JSON and XML output.
    #[builder(default)]
    pub pretty: bool,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        FormatterOptions::builder().build()
    }
}
