//! Integration tests for script loading and validation

use std::fs;

use rogerian_foundation::ErrorKind;
use rogerian_script::{Script, ScriptDef};

fn script_with_keys(keys: &str) -> String {
    format!(
        r#"{{
            "synonyms": {{ "family": ["mother", "father"] }},
            "keys": [
                {{ "key": "xnone", "decompositions": [{{ "pattern": "*", "reassembly": ["Go on."] }}] }},
                {keys}
            ]
        }}"#
    )
}

// =============================================================================
// Valid scripts
// =============================================================================

#[test]
fn doctor_script_is_valid() {
    let script = Script::doctor().unwrap();
    assert_eq!(script.fallback_key().name(), "xnone");
    assert!(script.keys().len() > 10);
}

#[test]
fn minimal_script_takes_defaults() {
    let script = Script::from_json(&script_with_keys(
        r#"{ "key": "Mother", "rank": 2, "decompositions": [{ "pattern": "* @family *", "reassembly": ["Family."] }] }"#,
    ))
    .unwrap();
    assert_eq!(script.key("mother").unwrap().rank(), 2);
    assert!(script.is_exit_word("quit"));
    assert_eq!(script.replies().prompt, "Please say something.");
}

#[test]
fn definition_round_trips_through_json() {
    let def: ScriptDef = serde_json::from_str(rogerian_script::stdlib::DOCTOR_SCRIPT).unwrap();
    let again = serde_json::to_string(&def).unwrap();
    let script = Script::from_json(&again).unwrap();
    assert_eq!(script.keys().len(), def.keys.len());
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("rogerian-load-{}.json", std::process::id()));
    fs::write(&path, script_with_keys(
        r#"{ "key": "dream", "decompositions": [{ "pattern": "*", "reassembly": ["Dreams."] }] }"#,
    ))
    .unwrap();
    let script = Script::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert!(script.key("dream").is_some());
}

#[test]
fn redirect_to_unknown_key_is_accepted() {
    let script = Script::from_json(&script_with_keys(
        r#"{ "key": "hello", "decompositions": [{ "pattern": "*", "reassembly": ["goto nowhere"] }] }"#,
    ));
    assert!(script.is_ok());
}

// =============================================================================
// Rejected scripts
// =============================================================================

#[test]
fn rejects_malformed_json() {
    let err = Script::from_json("{ \"keys\": [").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ScriptFormat(_)));
}

#[test]
fn rejects_unknown_fields() {
    let err = Script::from_json(&script_with_keys(
        r#"{ "key": "a", "weight": 3, "decompositions": [] }"#,
    ))
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ScriptFormat(_)));
}

#[test]
fn rejects_duplicate_keys() {
    let err = Script::from_json(&script_with_keys(
        r#"{ "key": "XNONE", "decompositions": [{ "pattern": "*", "reassembly": ["Again."] }] }"#,
    ))
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateKey(ref k) if k == "xnone"));
}

#[test]
fn rejects_empty_pattern() {
    let err = Script::from_json(&script_with_keys(
        r#"{ "key": "a", "decompositions": [{ "pattern": "  ", "reassembly": ["A."] }] }"#,
    ))
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyPattern { .. }));
}

#[test]
fn rejects_decomposition_without_templates() {
    let err = Script::from_json(&script_with_keys(
        r#"{ "key": "a", "decompositions": [{ "pattern": "*", "reassembly": [] }] }"#,
    ))
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoTemplates { .. }));
    assert_eq!(err.context.and_then(|c| c.key), Some("a".to_string()));
}

#[test]
fn rejects_unknown_synonym_class() {
    let err = Script::from_json(&script_with_keys(
        r#"{ "key": "a", "decompositions": [{ "pattern": "* @pets *", "reassembly": ["A."] }] }"#,
    ))
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownSynonym { ref class, .. } if class == "pets"));
}

#[test]
fn rejects_missing_fallback() {
    let err = Script::from_json(
        r#"{ "fallback_key": "none", "keys": [
            { "key": "a", "decompositions": [{ "pattern": "*", "reassembly": ["A."] }] }
        ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingFallback(_)));
}

#[test]
fn rejects_redirect_cycle() {
    let err = Script::from_json(&script_with_keys(
        r#"{ "key": "a", "decompositions": [{ "pattern": "*", "reassembly": ["goto b"] }] },
           { "key": "b", "decompositions": [{ "pattern": "*", "reassembly": ["goto a"] }] }"#,
    ))
    .unwrap_err();
    match err.kind {
        ErrorKind::RedirectCycle(keys) => assert_eq!(keys, vec!["a", "b"]),
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn cycle_with_an_exit_is_accepted() {
    let script = Script::from_json(&script_with_keys(
        r#"{ "key": "a", "decompositions": [{ "pattern": "*", "reassembly": ["goto b"] }] },
           { "key": "b", "decompositions": [{ "pattern": "*", "reassembly": ["goto a", "B."] }] }"#,
    ));
    assert!(script.is_ok());
}

#[test]
fn load_missing_file_names_path() {
    let err = Script::load("/nonexistent/rogerian/doctor.json").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert!(format!("{err}").contains("doctor.json"));
}
