//! Reassembly templates.
//!
//! A template is plain reply text with `(n)` placeholders, or one of two
//! directives:
//!
//! - `goto <key>` hands the same input to another key
//! - `memory [(n)] [text]` stores a reflected capture and optionally replies
//!   with the trailing text

use crate::lexicon::Lexicon;

const GOTO: &str = "goto";
const MEMORY: &str = "memory";

/// What a template asks the responder to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Reply with this text
    Text(String),
    /// Match the same input against another key
    Redirect(String),
    /// Remember a fragment; reply with `trailing` unless it is empty
    StoreMemory {
        /// Reflected capture to remember (may be empty)
        fragment: String,
        /// Literal text following the directive, trimmed
        trailing: String,
    },
}

/// Instantiates reassembly templates.
pub struct Reassembler;

impl Reassembler {
    /// Turns a template and the captures of a match into an [`Action`].
    #[must_use]
    pub fn assemble(template: &str, captures: &[String], lexicon: &Lexicon) -> Action {
        if let Some(target) = Self::redirect_target(template) {
            return Action::Redirect(target);
        }

        if let Some(rest) = strip_keyword(template, MEMORY, true) {
            let (index, trailing) = parse_memory_index(rest);
            let fragment = capture(captures, index)
                .map(|text| reflect(text, lexicon))
                .unwrap_or_default();
            return Action::StoreMemory {
                fragment,
                trailing: trailing.trim().to_string(),
            };
        }

        Action::Text(Self::render(template, captures, lexicon))
    }

    /// Returns the target key if the template is a `goto` directive.
    #[must_use]
    pub fn redirect_target(template: &str) -> Option<String> {
        let target = strip_keyword(template, GOTO, false)?.trim();
        if target.is_empty() {
            return None;
        }
        Some(target.to_lowercase())
    }

    /// Replaces every `(n)` placeholder with the reflected capture `n`.
    ///
    /// Indices are 1-based; anything out of range renders as empty text.
    #[must_use]
    pub fn render(template: &str, captures: &[String], lexicon: &Lexicon) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('(') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let digits = after.len() - after.trim_start_matches(|c: char| c.is_ascii_digit()).len();

            if digits > 0 && after[digits..].starts_with(')') {
                let index = after[..digits].parse::<usize>().ok();
                if let Some(text) = index.and_then(|n| capture(captures, n)) {
                    out.push_str(&reflect(text, lexicon));
                }
                rest = &after[digits + 1..];
            } else {
                out.push('(');
                rest = after;
            }
        }
        out.push_str(rest);
        out
    }
}

/// Reflects a captured fragment word by word.
///
/// Two-word reflections are tried before single words at each position;
/// words without an entry are kept. The result is single-spaced.
#[must_use]
pub fn reflect(fragment: &str, lexicon: &Lexicon) -> String {
    let words: Vec<&str> = fragment.split_whitespace().collect();
    let mut out: Vec<&str> = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        if let Some(next) = words.get(i + 1) {
            if let Some(phrase) = lexicon.phrase_reflection(words[i], next) {
                out.push(phrase);
                i += 2;
                continue;
            }
        }
        out.push(lexicon.reflection(words[i]).unwrap_or(words[i]));
        i += 1;
    }

    out.join(" ")
}

/// 1-based capture lookup.
fn capture(captures: &[String], index: usize) -> Option<&str> {
    index
        .checked_sub(1)
        .and_then(|i| captures.get(i))
        .map(String::as_str)
}

/// Strips a case-insensitive leading keyword.
///
/// The keyword must be followed by whitespace, or by the end of the template
/// or an opening parenthesis when `allow_tight` is set.
fn strip_keyword<'a>(template: &'a str, keyword: &str, allow_tight: bool) -> Option<&'a str> {
    let trimmed = template.trim_start();
    let head = trimmed.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &trimmed[keyword.len()..];
    match rest.chars().next() {
        Some(c) if c.is_whitespace() => Some(rest),
        None | Some('(') if allow_tight => Some(rest),
        _ => None,
    }
}

/// Parses the optional capture index of a memory directive.
///
/// Accepts `(n)`, `n` or nothing (index 1) and returns the remaining text.
fn parse_memory_index(rest: &str) -> (usize, &str) {
    let body = rest.trim_start();
    let (inner, parenthesized) = match body.strip_prefix('(') {
        Some(inner) => (inner.trim_start(), true),
        None => (body, false),
    };

    let digits = inner.len() - inner.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return (1, rest);
    }

    let index = inner[..digits].parse::<usize>().unwrap_or(0);
    let mut remainder = inner[digits..].trim_start();
    if parenthesized {
        match remainder.strip_prefix(')') {
            Some(after) => remainder = after,
            None => return (1, rest),
        }
    }
    (index, remainder)
}
