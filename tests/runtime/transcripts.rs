//! Integration tests for scripted conversations through the REPL

use std::fs;
use std::io::Cursor;

use rogerian_engine::Session;
use rogerian_runtime::{LineReader, Repl};

fn transcript(input: &str) -> Vec<String> {
    let reader = LineReader::new(Cursor::new(input.to_string()), "test");
    let mut repl = Repl::with_editor(reader, Session::doctor().unwrap())
        .with_echo(true)
        .with_output(Vec::new());
    repl.run().unwrap();
    String::from_utf8(repl.into_output())
        .unwrap()
        .lines()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn full_conversation() {
    let lines = transcript("I had a dream\n\nmy mother is kind\nbye\nnever read\n");
    assert_eq!(
        lines,
        vec![
            "BOT: Hello. How do you do. Please tell me your problem.",
            "YOU: I had a dream",
            "BOT: What does that dream suggest to you?",
            "YOU: ",
            "BOT: Please say something.",
            "YOU: my mother is kind",
            "BOT: Tell me more about your family.",
            "YOU: bye",
            "BOT: Goodbye. Thank you for talking to me.",
        ]
    );
}

#[test]
fn end_of_input_says_goodbye() {
    let lines = transcript("I had a dream");
    assert_eq!(lines.last().map(String::as_str), Some("BOT: Goodbye. Take care."));
}

#[test]
fn batch_file_transcript() {
    let path = std::env::temp_dir().join(format!("rogerian-batch-{}.txt", std::process::id()));
    fs::write(&path, "Maybe computers scare me\nquit\n").unwrap();

    let reader = LineReader::open(&path).unwrap();
    let mut repl = Repl::with_editor(reader, Session::doctor().unwrap())
        .without_banner()
        .with_echo(true)
        .with_output(Vec::new());
    repl.run().unwrap();
    fs::remove_file(&path).unwrap();

    let output = String::from_utf8(repl.into_output()).unwrap();
    assert_eq!(
        output,
        "YOU: Maybe computers scare me\nBOT: Do computers worry you?\nYOU: quit\nBOT: Goodbye. Thank you for talking to me.\n"
    );
}
