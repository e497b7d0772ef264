//! Integration tests for cross-key redirects

use std::sync::Arc;

use rogerian_engine::{EngineConfig, ReplyKind, Session};
use rogerian_script::Script;

fn session(json: &str) -> Session {
    Session::new(Arc::new(Script::from_json(json).unwrap()), EngineConfig::default())
}

#[test]
fn mother_redirects_to_family() {
    let mut session = Session::doctor().unwrap();
    let replies: Vec<_> = (0..4).map(|_| session.reply("my mother is kind")).collect();

    assert_eq!(replies[0].text, "Tell me more about your family.");
    assert_eq!(replies[1].text, "Who else in your family is kind?");
    assert_eq!(replies[2].text, "How do you feel about your family?");

    // Fourth template is "goto family"
    let redirected = &replies[3];
    assert!(
        redirected.kind == ReplyKind::Keyed("family".to_string())
            || redirected.kind == ReplyKind::Apology
    );
    assert_eq!(
        redirected.text,
        "Family relationships can be complicated. Tell me more."
    );
}

#[test]
fn father_always_redirects() {
    let mut session = Session::doctor().unwrap();
    let first = session.reply("my father works late");
    let second = session.reply("my father works late");
    assert_eq!(first.kind, ReplyKind::Keyed("family".to_string()));
    assert_eq!(second.kind, ReplyKind::Keyed("family".to_string()));
    assert_ne!(first.text, second.text);
}

#[test]
fn redirect_target_that_does_not_match_apologizes() {
    let mut session = session(
        r#"{ "keys": [
            { "key": "xnone", "decompositions": [{ "pattern": "*", "reassembly": ["Go on."] }] },
            { "key": "sky", "decompositions": [{ "pattern": "*", "reassembly": ["goto weather"] }] },
            { "key": "weather", "decompositions": [{ "pattern": "* rain *", "reassembly": ["Rain."] }] }
        ] }"#,
    );
    let reply = session.reply("the sky is blue");
    assert_eq!(reply.kind, ReplyKind::Apology);
    assert_eq!(reply.text, "I don't understand.");

    let reply = session.reply("the sky brings rain");
    assert_eq!(reply.kind, ReplyKind::Keyed("weather".to_string()));
    assert_eq!(reply.text, "Rain.");
}

#[test]
fn redirect_to_unknown_key_apologizes() {
    let mut session = session(
        r#"{ "keys": [
            { "key": "xnone", "decompositions": [{ "pattern": "*", "reassembly": ["Go on."] }] },
            { "key": "sky", "decompositions": [{ "pattern": "*", "reassembly": ["goto nowhere"] }] }
        ] }"#,
    );
    assert_eq!(session.reply("sky").kind, ReplyKind::Apology);
}

#[test]
fn custom_apology_text() {
    let mut session = session(
        r#"{ "replies": { "apology": "Pardon?" }, "keys": [
            { "key": "xnone", "decompositions": [{ "pattern": "*", "reassembly": ["Go on."] }] },
            { "key": "sky", "decompositions": [{ "pattern": "*", "reassembly": ["goto nowhere"] }] }
        ] }"#,
    );
    assert_eq!(session.respond("sky"), "Pardon?");
    assert_eq!(session.respond(""), "Please say something.");
}

#[test]
fn long_redirect_chain_is_cut_off() {
    let script = Arc::new(
        Script::from_json(
            r#"{ "keys": [
                { "key": "xnone", "decompositions": [{ "pattern": "*", "reassembly": ["Go on."] }] },
                { "key": "a", "decompositions": [{ "pattern": "*", "reassembly": ["goto b"] }] },
                { "key": "b", "decompositions": [{ "pattern": "*", "reassembly": ["goto c"] }] },
                { "key": "c", "decompositions": [{ "pattern": "*", "reassembly": ["C.", "goto a"] }] }
            ] }"#,
        )
        .unwrap(),
    );

    // With the default bound (key count) the chain a -> b -> c is followed
    let mut unbounded = Session::new(Arc::clone(&script), EngineConfig::default());
    assert_eq!(unbounded.reply("a").kind, ReplyKind::Keyed("c".to_string()));

    let mut bounded = Session::new(script, EngineConfig::new().with_max_redirects(1));
    let reply = bounded.reply("a");
    assert_eq!(reply.kind, ReplyKind::Fallback);
    assert_eq!(reply.text, "Go on.");
}

#[test]
fn redirect_loop_at_runtime_falls_back() {
    let script = Arc::new(
        Script::from_json(
            r#"{ "keys": [
                { "key": "xnone", "decompositions": [{ "pattern": "*", "reassembly": ["Go on."] }] },
                { "key": "a", "decompositions": [{ "pattern": "*", "reassembly": ["goto b"] }] },
                { "key": "b", "decompositions": [{ "pattern": "*", "reassembly": ["goto a", "B."] }] }
            ] }"#,
        )
        .unwrap(),
    );
    let mut session = Session::new(script, EngineConfig::new().with_max_redirects(3));

    // a -> b ("goto a") -> a -> b ("B.")
    let reply = session.reply("a");
    assert_eq!(reply.kind, ReplyKind::Keyed("b".to_string()));
    assert_eq!(reply.text, "B.");
}
