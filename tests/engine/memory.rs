//! Integration tests for memory directives

use std::sync::Arc;

use rogerian_engine::{EngineConfig, ReplyKind, Session};
use rogerian_script::Script;

#[test]
fn memory_without_trailing_continues_to_next_decomposition() {
    let mut session = Session::doctor().unwrap();
    let reply = session.reply("my car is red");
    assert_eq!(reply.kind, ReplyKind::Keyed("my".to_string()));
    assert_eq!(reply.text, "Your car is red?");
    assert_eq!(session.memory(), &["car is red"]);

    session.respond("my job is boring");
    assert_eq!(session.memory(), &["car is red", "job is boring"]);
}

#[test]
fn memory_with_trailing_replies() {
    let script = Script::from_json(
        r#"{ "keys": [
            { "key": "xnone", "decompositions": [{ "pattern": "*", "reassembly": ["Go on."] }] },
            { "key": "my", "decompositions": [
                { "pattern": "* my *", "reassembly": ["memory (2) Let's talk about that."] },
                { "pattern": "* my *", "reassembly": ["Never reached."] }
            ] }
        ] }"#,
    )
    .unwrap();
    let mut session = Session::new(Arc::new(script), EngineConfig::default());

    assert_eq!(session.respond("I lost my keys"), "Let's talk about that.");
    assert_eq!(session.memory(), &["keys"]);
}

#[test]
fn empty_fragment_is_not_stored() {
    let script = Script::from_json(
        r#"{ "keys": [
            { "key": "xnone", "decompositions": [{ "pattern": "*", "reassembly": ["Go on."] }] },
            { "key": "my", "decompositions": [
                { "pattern": "* my *", "reassembly": ["memory (5) Noted."] }
            ] }
        ] }"#,
    )
    .unwrap();
    let mut session = Session::new(Arc::new(script), EngineConfig::default());

    assert_eq!(session.respond("my keys"), "Noted.");
    assert!(session.memory().is_empty());
}

#[test]
fn memory_is_per_session() {
    let script = Arc::new(Script::doctor().unwrap());
    let mut first = Session::new(Arc::clone(&script), EngineConfig::default());
    let second = Session::new(script, EngineConfig::default());
    first.respond("my car is red");
    assert_eq!(first.memory().len(), 1);
    assert!(second.memory().is_empty());
}
