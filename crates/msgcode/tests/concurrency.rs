//! Readers racing reconfiguration must only ever see whole snapshots.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use msgcode::source::InMemorySource;
use msgcode::{MessageContext, MessageRegistry, Severity, Template};

const BATCH: usize = 64;

fn batch(title: &str) -> InMemorySource {
    InMemorySource::new((0..BATCH).map(|i| {
        (
            format!("BATCH_{i:03}"),
            Template::builder()
                .severity(Severity::Info)
                .title(title)
                .description("batch entry")
                .build(),
        )
    }))
}

#[test]
fn readers_never_observe_partial_configuration() {
    let registry = MessageRegistry::new();
    let first = batch("first");
    let second = batch("second");
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                while !done.load(Ordering::Relaxed) {
                    let snapshot = registry.snapshot();
                    let titles: Vec<Option<&str>> = (0..BATCH)
                        .map(|i| {
                            snapshot
                                .get(&format!("BATCH_{i:03}"))
                                .map(|t| t.title.as_str())
                        })
                        .collect();
                    assert!(
                        titles.iter().all(|t| *t == titles[0]),
                        "mixed snapshot: {titles:?}"
                    );
                    assert!(snapshot.contains("AUTH_001"));
                }
            });
        }

        for round in 0..200 {
            match round % 3 {
                0 => registry.configure(&first).map(|_| ()).unwrap(),
                1 => registry.configure(&second).map(|_| ()).unwrap(),
                _ => registry.reset(),
            }
        }
        done.store(true, Ordering::Relaxed);
    });
}

#[test]
fn formatting_and_registration_run_concurrently() {
    let context = MessageContext::default();
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                while !done.load(Ordering::Relaxed) {
                    let message = context.registry().get("CRUD_001").unwrap();
                    let output = context.format(&message, "json").unwrap();
                    assert!(output.contains("CRUD_001"));
                }
            });
        }

        for i in 0..100 {
            context
                .interceptors()
                .register(msgcode::MetadataInterceptor::new().with(format!("k{i}"), i));
            context
                .formatters()
                .register(format!("extra-{i}"), msgcode::TextFormatter::default);
        }
        done.store(true, Ordering::Relaxed);
    });

    assert_eq!(context.interceptors().len(), 100);
    assert!(context.formatters().contains("extra-99"));
}
