//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use rogerian_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_empty_pattern() {
    let err = Error::empty_pattern("sorry", 2);
    assert!(matches!(
        err.kind,
        ErrorKind::EmptyPattern { decomposition: 2, .. }
    ));
    assert!(format!("{err}").contains("sorry"));
}

#[test]
fn error_no_templates() {
    let err = Error::no_templates("desire", "* i want *");
    assert!(matches!(err.kind, ErrorKind::NoTemplates { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("desire"));
    assert!(msg.contains("* i want *"));
}

#[test]
fn error_unknown_synonym() {
    let err = Error::unknown_synonym("mother", "relatives");
    assert!(matches!(err.kind, ErrorKind::UnknownSynonym { .. }));
    assert!(format!("{err}").contains("relatives"));
}

#[test]
fn error_missing_fallback() {
    let err = Error::new(ErrorKind::MissingFallback("xnone".to_string()));
    assert!(format!("{err}").contains("xnone"));
}

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument("unknown option: --loud");
    assert_eq!(format!("{err}"), "invalid argument: unknown option: --loud");
}

#[test]
fn error_io_keeps_source() {
    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = Error::io("/etc/rogerian/doctor.json", source);
    match &err.kind {
        ErrorKind::Io { path, source } => {
            assert!(path.ends_with("doctor.json"));
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display_variants() {
    assert_eq!(format!("{}", ErrorContext::new()), "");
    assert_eq!(
        format!("{}", ErrorContext::new().with_source("doctor.json")),
        "at doctor.json"
    );
    assert_eq!(
        format!("{}", ErrorContext::new().with_key("mother")),
        "in key mother"
    );
}

#[test]
fn context_attaches_to_error() {
    let err = Error::duplicate_key("mother").with_context(ErrorContext::new().with_key("mother"));
    assert_eq!(
        err.context.and_then(|c| c.key),
        Some("mother".to_string())
    );
}
