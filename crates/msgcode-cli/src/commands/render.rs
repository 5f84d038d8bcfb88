//! Implementation of the `msgcode render` command.

use std::path::PathBuf;
use std::sync::Arc;

use miette::{miette, Result};
use msgcode::{
    FormatError, FormatterOptions, Interceptor, MessageContext, MetadataInterceptor, Params,
    TracingInterceptor, Value,
};

use super::load_registry;

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Message code to resolve (e.g. AUTH_001)
    pub code: String,

    /// Custom catalog files layered over the defaults, later files winning
    #[arg(short, long = "catalog")]
    pub catalogs: Vec<PathBuf>,

    /// Formatter name (json, xml, text, console)
    #[arg(short, long, default_value = "console", env = "MSGCODE_FORMAT")]
    pub format: String,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Metadata entries in key=value format added before formatting (repeatable)
    #[arg(short = 'm', long = "meta", value_parser = parse_key_val)]
    pub metadata: Vec<(String, String)>,

    /// Override the status code
    #[arg(long)]
    pub status: Option<u16>,

    /// Correlation id to attach
    #[arg(long)]
    pub correlation_id: Option<String>,

    /// Data payload as a JSON document
    #[arg(long)]
    pub data: Option<String>,

    /// Omit the timestamp
    #[arg(long)]
    pub no_timestamp: bool,

    /// Include the parameters used for substitution
    #[arg(long)]
    pub show_params: bool,

    /// Emit absent fields as nulls
    #[arg(long)]
    pub null_fields: bool,

    /// Indent JSON and XML output
    #[arg(long)]
    pub pretty: bool,

    /// Log the rendered message through tracing
    #[arg(long)]
    pub log: bool,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> Result<i32> {
    let registry = load_registry(&args.catalogs)?;

    let options = FormatterOptions::builder()
        .include_timestamp(!args.no_timestamp)
        .include_parameters(args.show_params)
        .include_null_fields(args.null_fields)
        .pretty(args.pretty)
        .build();

    let mut interceptors: Vec<Arc<dyn Interceptor>> = Vec::new();
    if !args.metadata.is_empty() {
        let metadata = args
            .metadata
            .iter()
            .fold(MetadataInterceptor::new(), |interceptor, (key, value)| {
                interceptor.with(key.clone(), value.clone())
            });
        interceptors.push(Arc::new(metadata));
    }
    if args.log {
        interceptors.push(Arc::new(TracingInterceptor));
    }

    let context = MessageContext::builder()
        .registry(Arc::new(registry))
        .options(options)
        .interceptors(interceptors)
        .build();

    let mut message = match context.registry().get(&args.code) {
        Ok(message) => message,
        Err(e) => {
            eprintln!("Lookup error: {}", e);
            return Ok(exitcode::DATAERR);
        }
    };

    if !args.params.is_empty() {
        let params: Params = args
            .params
            .iter()
            .map(|(name, raw)| (name.clone(), Value::infer(raw)))
            .collect();
        message = message.with_params(&params);
    }
    if let Some(status) = args.status {
        message = message.with_status_code(status);
    }
    if let Some(id) = &args.correlation_id {
        message = message.with_correlation_id(id.as_str());
    }
    if let Some(data) = &args.data {
        let data: serde_json::Value = serde_json::from_str(data)
            .map_err(|e| miette!("Invalid --data JSON: {}", e))?;
        message = message.with_data(data);
    }

    match context.format(&message, &args.format) {
        Ok(output) => {
            println!("{}", output);
            Ok(exitcode::OK)
        }
        Err(e @ FormatError::FormatterNotFound { .. }) => {
            eprintln!("{}", e);
            Ok(exitcode::USAGE)
        }
    }
}
