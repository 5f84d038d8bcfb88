//! Integration tests for the interceptor pipeline and built-in interceptors.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use msgcode::{
    CorrelationIdInterceptor, Formatter, InterceptedFormatter, Interceptor, InterceptorPipeline,
    JsonFormatter, Message, MessageContext, MessageRegistry, MetadataInterceptor,
    TracingInterceptor,
};

type Log = Arc<Mutex<Vec<String>>>;

/// Records each hook call under its name.
struct Recorder {
    name: &'static str,
    log: Log,
}

impl Interceptor for Recorder {
    fn on_before_format(&self, message: Message) -> Message {
        self.log.lock().unwrap().push(format!("before:{}", self.name));
        message.with_metadata(format!("seen_by_{}", self.name), true)
    }

    fn on_after_format(&self, message: Message) -> Message {
        self.log.lock().unwrap().push(format!("after:{}", self.name));
        message
    }
}

fn recorder(name: &'static str, log: &Log) -> Recorder {
    Recorder {
        name,
        log: Arc::clone(log),
    }
}

fn message() -> Message {
    MessageRegistry::new().get("INFO_001").unwrap()
}

// =========================================================================
// Ordering
// =========================================================================

#[test]
fn hooks_run_in_registration_order() {
    let log = Log::default();
    let pipeline = InterceptorPipeline::new();
    pipeline.register(recorder("first", &log));
    pipeline.register(recorder("second", &log));

    let result = pipeline.run(message(), |_| log.lock().unwrap().push("render".to_string()));

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "before:first",
            "before:second",
            "render",
            "after:first",
            "after:second",
        ]
    );
    assert_eq!(result.message.metadata().len(), 2);
}

#[test]
fn render_sees_enriched_message() {
    let log = Log::default();
    let pipeline = Arc::new(InterceptorPipeline::new());
    pipeline.register(recorder("only", &log));

    let formatter = InterceptedFormatter::new(JsonFormatter::default(), Arc::clone(&pipeline));
    let object = formatter.format_as_object(&message());

    assert_eq!(object["metadata"]["seen_by_only"], true);
}

#[test]
fn formatting_does_not_change_callers_message() {
    let pipeline = Arc::new(InterceptorPipeline::new());
    pipeline.register(MetadataInterceptor::new().with("service", "api"));
    let formatter = InterceptedFormatter::new(JsonFormatter::default(), pipeline);

    let original = message();
    formatter.format(&original);
    assert!(original.metadata().is_empty());
}

#[test]
fn after_hooks_receive_rendered_message() {
    let pipeline = Arc::new(InterceptorPipeline::new());
    pipeline.register(MetadataInterceptor::new().with("service", "api"));
    let formatter = InterceptedFormatter::new(JsonFormatter::default(), pipeline);

    let result = formatter.render(message());
    assert!(result.output.contains("\"service\":\"api\""));
    assert_eq!(result.message.metadata()["service"], "api");
}

// =========================================================================
// Registration
// =========================================================================

#[test]
fn clear_removes_every_interceptor() {
    let log = Log::default();
    let pipeline = InterceptorPipeline::new();
    pipeline.register(recorder("gone", &log));
    assert_eq!(pipeline.len(), 1);

    pipeline.clear();
    pipeline.run(message(), |m| m.code().to_string());

    assert!(pipeline.is_empty());
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn interceptors_registered_later_apply_to_existing_formatters() {
    let context = MessageContext::default();
    let formatter = context.formatters().get("json").unwrap();

    context
        .interceptors()
        .register(MetadataInterceptor::new().with("region", "eu"));

    let object = formatter.format_as_object(&message());
    assert_eq!(object["metadata"]["region"], "eu");
}

#[test]
fn context_builder_registers_interceptors_in_order() {
    let log = Log::default();
    let first: Arc<dyn Interceptor> = Arc::new(recorder("a", &log));
    let second: Arc<dyn Interceptor> = Arc::new(recorder("b", &log));
    let context = MessageContext::builder()
        .interceptors(vec![first, second])
        .build();

    context.format(&message(), "text").unwrap();
    assert_eq!(
        *log.lock().unwrap(),
        vec!["before:a", "before:b", "after:a", "after:b"]
    );
}

// =========================================================================
// Built-ins
// =========================================================================

#[test]
fn metadata_interceptor_keeps_existing_entries() {
    let interceptor = MetadataInterceptor::new()
        .with("service", "api")
        .with("version", 2);
    let message = interceptor.on_before_format(message().with_metadata("service", "billing"));

    assert_eq!(message.metadata()["service"], "billing");
    assert_eq!(message.metadata()["version"], 2);
}

#[test]
fn correlation_id_interceptor_fills_only_missing_ids() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let interceptor = CorrelationIdInterceptor::new(move || {
        format!("gen-{}", counter.fetch_add(1, Ordering::SeqCst))
    });

    let generated = interceptor.on_before_format(message());
    let kept = interceptor.on_before_format(message().with_correlation_id("given"));

    assert_eq!(generated.correlation_id(), Some("gen-0"));
    assert_eq!(kept.correlation_id(), Some("given"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn tracing_interceptor_passes_message_through() {
    let message = MessageRegistry::new().get("SYS_001").unwrap();
    let after = TracingInterceptor.on_after_format(message.clone());
    assert_eq!(after, message);
}
