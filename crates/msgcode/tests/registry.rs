//! Integration tests for the message registry and its sources.

use std::io::Write;

use msgcode::source::{
    CompositeSource, DatabaseSource, EmbeddedSource, FileSource, InMemorySource, MessageSource,
    StoreError, TemplateRecord,
};
use msgcode::{
    KNOWN_CODE_SAMPLE, LoadError, MessageRegistry, PartialTemplate, RegistryError, Severity,
    Template, TemplateError,
};
use tempfile::NamedTempFile;

fn template(severity: Severity, title: &str, description: &str) -> Template {
    Template::builder()
        .severity(severity)
        .title(title)
        .description(description)
        .build()
}

fn title_only(title: &str) -> PartialTemplate {
    PartialTemplate {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

fn json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn registry_with_x() -> MessageRegistry {
    let defaults = InMemorySource::new([(
        "X",
        Template::builder()
            .severity(Severity::Error)
            .title("A")
            .description("default description")
            .status_code(401)
            .build(),
    )]);
    MessageRegistry::with_defaults(&defaults).unwrap()
}

// =========================================================================
// Defaults
// =========================================================================

#[test]
fn embedded_defaults_are_complete() {
    let catalog = EmbeddedSource::defaults().load().unwrap();
    assert!(!catalog.is_empty());
    for (code, entry) in catalog {
        assert!(entry.is_complete(), "default '{code}' is partial");
        entry.materialize(None).unwrap();
    }
}

#[test]
fn default_registry_resolves_builtin_codes() {
    let registry = MessageRegistry::new();
    let message = registry.get("AUTH_001").unwrap();
    assert_eq!(message.code(), "AUTH_001");
    assert_eq!(message.severity(), Severity::Error);
    assert_eq!(message.status_code(), 401);
}

#[test]
fn with_defaults_rejects_partial_entries() {
    let source = InMemorySource::new([("X", title_only("only a title"))]).named("defaults");
    let err = MessageRegistry::with_defaults(&source).unwrap_err();
    match err {
        LoadError::InvalidEntry {
            origin,
            code,
            reason,
        } => {
            assert_eq!(origin, "defaults");
            assert_eq!(code, "X");
            assert_eq!(reason, TemplateError::MissingField { field: "type" });
        }
        other => panic!("unexpected error: {other}"),
    }
}

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn unknown_code_is_an_error_naming_the_code() {
    let registry = MessageRegistry::new();
    let err = registry.get("DOES_NOT_EXIST").unwrap_err();

    let RegistryError::MessageNotFound { code, known, .. } = &err;
    assert_eq!(code, "DOES_NOT_EXIST");
    assert!(!known.is_empty());
    assert!(known.len() <= KNOWN_CODE_SAMPLE);
    assert!(err.to_string().contains("DOES_NOT_EXIST"));
}

#[test]
fn unknown_code_suggests_close_spellings() {
    let registry = MessageRegistry::new();
    let err = registry.get("AUTH_01").unwrap_err();

    let RegistryError::MessageNotFound { suggestions, .. } = &err;
    assert_eq!(suggestions.first().map(String::as_str), Some("AUTH_001"));
    assert!(err.to_string().contains("did you mean"));
}

#[test]
fn get_template_reflects_current_layer() {
    let registry = registry_with_x();
    assert_eq!(registry.get_template("X").unwrap().title, "A");
    assert!(registry.get_template("Y").is_none());

    registry
        .load_custom_messages_from([("X", title_only("custom"))])
        .unwrap();
    let template = registry.get_template("X").unwrap();
    assert_eq!(template.title, "custom");
    assert_eq!(template.status_code, Some(401));
}

#[test]
fn codes_are_case_sensitive() {
    let registry = MessageRegistry::new();
    assert!(registry.contains("AUTH_001"));
    assert!(!registry.contains("auth_001"));
}

#[test]
fn all_codes_is_sorted_union_without_duplicates() {
    let registry = registry_with_x();
    registry
        .load_custom_messages_from([
            ("X", title_only("override")),
            ("A_NEW", template(Severity::Info, "New", "new").into()),
        ])
        .unwrap();

    assert_eq!(registry.all_codes(), vec!["A_NEW", "X"]);
}

// =========================================================================
// Override semantics
// =========================================================================

#[test]
fn partial_override_inherits_missing_fields() {
    let registry = registry_with_x();
    registry
        .load_custom_messages_from([(
            "X",
            PartialTemplate {
                description: Some("B".to_string()),
                ..Default::default()
            },
        )])
        .unwrap();

    let message = registry.get("X").unwrap();
    assert_eq!(message.title(), "A");
    assert_eq!(message.description(), "B");
    assert_eq!(message.status_code(), 401);
}

#[test]
fn partial_entry_for_unknown_code_fails() {
    let registry = registry_with_x();
    let err = registry
        .load_custom_messages_from([("NEW", title_only("New"))])
        .unwrap_err();
    assert!(matches!(
        err,
        LoadError::InvalidEntry { ref code, .. } if code == "NEW"
    ));
}

#[test]
fn composite_last_source_wins_whole_entry() {
    let registry = MessageRegistry::new();
    let first = InMemorySource::new([(
        "X",
        Template::builder()
            .severity(Severity::Info)
            .title("1")
            .description("from first")
            .hint("first hint")
            .build(),
    )]);
    let second = InMemorySource::new([("X", template(Severity::Info, "2", "from second"))]);

    registry
        .configure(&CompositeSource::new(vec![
            Box::new(first),
            Box::new(second),
        ]))
        .unwrap();

    let message = registry.get("X").unwrap();
    assert_eq!(message.title(), "2");
    assert_eq!(message.description(), "from second");
    assert_eq!(message.hint(), None);
}

#[test]
fn configure_all_matches_composite() {
    let registry = MessageRegistry::new();
    let count = registry
        .configure_all(vec![
            Box::new(InMemorySource::new([("X", template(Severity::Info, "1", "d"))])),
            Box::new(InMemorySource::new([
                ("X", template(Severity::Info, "2", "d")),
                ("Y", template(Severity::Info, "y", "d")),
            ])),
        ])
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(registry.get("X").unwrap().title(), "2");
}

#[test]
fn configure_replaces_previous_custom_layer() {
    let registry = MessageRegistry::new();
    registry
        .load_custom_messages_from([("FIRST", template(Severity::Info, "first", "d"))])
        .unwrap();
    registry
        .load_custom_messages_from([("SECOND", template(Severity::Info, "second", "d"))])
        .unwrap();

    assert!(!registry.contains("FIRST"));
    assert!(registry.contains("SECOND"));
    assert!(registry.contains("AUTH_001"));
}

#[test]
fn reset_restores_defaults_only() {
    let registry = MessageRegistry::new();
    registry
        .load_custom_messages_from([
            ("AUTH_001", title_only("Overridden")),
            ("CUSTOM", template(Severity::Info, "custom", "d").into()),
        ])
        .unwrap();
    registry.reset();

    assert!(!registry.contains("CUSTOM"));
    assert_eq!(registry.get("AUTH_001").unwrap().title(), "Unauthorized");
    assert_eq!(registry.snapshot().custom_len(), 0);
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn failed_configure_keeps_previous_snapshot() {
    let registry = MessageRegistry::new();
    registry
        .load_custom_messages_from([("KEEP", template(Severity::Info, "kept", "d"))])
        .unwrap();

    let broken = json_file(r#"{ "BROKEN": { "title": "#);
    let err = registry.load_custom_messages(broken.path()).unwrap_err();

    assert!(matches!(err, LoadError::Parse { .. }));
    assert_eq!(registry.get("KEEP").unwrap().title(), "kept");
}

#[test]
fn one_bad_source_fails_the_whole_configure() {
    let registry = MessageRegistry::new();
    let good = InMemorySource::new([("GOOD", template(Severity::Info, "good", "d"))]);
    let missing = FileSource::new("/definitely/not/here.json");

    let err = registry
        .configure(&CompositeSource::default().with(good).with(missing))
        .unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
    assert!(!registry.contains("GOOD"));
}

#[test]
fn parse_error_names_file_and_position() {
    let file = json_file("{\n  \"X\": { \"type\": \"Eror\", \"title\": \"t\", \"description\": \"d\" }\n}");
    let err = FileSource::new(file.path()).load().unwrap_err();

    match &err {
        LoadError::Parse {
            origin,
            line,
            message,
            ..
        } => {
            assert_eq!(origin, &file.path().display().to_string());
            assert_eq!(*line, 2);
            assert!(message.contains("Eror"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.origin(), file.path().display().to_string());
}

#[test]
fn empty_title_is_rejected() {
    let registry = MessageRegistry::new();
    let err = registry
        .load_custom_messages_from([("X", template(Severity::Info, "  ", "d"))])
        .unwrap_err();
    assert!(matches!(
        err,
        LoadError::InvalidEntry {
            reason: TemplateError::EmptyField { field: "title" },
            ..
        }
    ));
}

#[test]
fn status_outside_http_range_is_rejected() {
    let file = json_file(
        r#"{ "X": { "type": "Error", "title": "t", "description": "d", "httpStatusCode": 42 } }"#,
    );
    let err = MessageRegistry::new()
        .load_custom_messages(file.path())
        .unwrap_err();
    assert!(err.to_string().contains("42"));
}

// =========================================================================
// Sources
// =========================================================================

#[test]
fn file_source_reads_json_catalog() {
    let file = json_file(
        r#"{
            "ORDER_001": {
                "type": "success",
                "title": "Order placed",
                "description": "Order {id} has been placed.",
                "hint": "Track it from your account.",
                "httpStatusCode": 201
            }
        }"#,
    );

    let registry = MessageRegistry::new();
    assert_eq!(registry.load_custom_messages(file.path()).unwrap(), 1);

    let message = registry.get("ORDER_001").unwrap();
    assert_eq!(message.severity(), Severity::Success);
    assert_eq!(message.status_code(), 201);
    assert_eq!(message.hint(), Some("Track it from your account."));
}

#[test]
fn database_source_reads_records_from_store() {
    let store = || -> Result<Vec<TemplateRecord>, StoreError> {
        Ok(vec![
            TemplateRecord::new("DB_001", template(Severity::Warning, "old", "d")),
            TemplateRecord::new("DB_001", template(Severity::Warning, "new", "d")),
        ])
    };
    let registry = MessageRegistry::new();
    registry
        .configure(&DatabaseSource::new("messages-table", store))
        .unwrap();

    assert_eq!(registry.get("DB_001").unwrap().title(), "new");
}

#[test]
fn database_fetch_failure_names_source() {
    let store = || -> Result<Vec<TemplateRecord>, StoreError> { Err("connection refused".into()) };
    let err = MessageRegistry::new()
        .configure(&DatabaseSource::new("messages-table", store))
        .unwrap_err();

    assert_eq!(err.origin(), "messages-table");
    assert!(err.to_string().contains("connection refused"));
}
