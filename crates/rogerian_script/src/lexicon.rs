//! Lexical tables used by a script.
//!
//! Holds the pre-substitution map applied during normalization, the
//! reflection map applied to captured text, and the named synonym classes
//! that patterns can reference with `@class`.

use std::collections::{HashMap, HashSet};

/// Marker that introduces a synonym reference in a pattern (`@family`).
pub const SYNONYM_MARKER: char = '@';

/// Pattern token that matches any span of input tokens.
pub const WILDCARD: &str = "*";

/// Static word tables for one script.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    /// Input word -> replacement text (may contain several words)
    pre_substitutions: HashMap<String, String>,
    /// Single-word reflections ("my" -> "your")
    reflections: HashMap<String, String>,
    /// Two-word reflections ("you are" -> "I am"), first word -> second word -> text
    phrase_reflections: HashMap<String, HashMap<String, String>>,
    /// Synonym class name -> member words
    synonyms: HashMap<String, HashSet<String>>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pre-substitution applied to input tokens.
    pub fn add_pre_substitution(
        &mut self,
        word: impl Into<String>,
        replacement: impl Into<String>,
    ) {
        self.pre_substitutions
            .insert(word.into().to_lowercase(), replacement.into());
    }

    /// Registers a reflection.
    ///
    /// A `from` of two words ("you are") becomes a phrase reflection that
    /// takes precedence over the single-word entries for those words.
    pub fn add_reflection(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let from = from.into().to_lowercase();
        let to = to.into();
        let mut words = from.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(first), Some(second), None) => {
                self.phrase_reflections
                    .entry(first.to_string())
                    .or_default()
                    .insert(second.to_string(), to);
            }
            (Some(word), None, None) => {
                self.reflections.insert(word.to_string(), to);
            }
            _ => {
                tracing::warn!(from = %from, "ignoring reflection that is not one or two words");
            }
        }
    }

    /// Registers a synonym class with its member words.
    pub fn add_synonym_class<I, S>(&mut self, class: impl Into<String>, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members = words.into_iter().map(|w| w.into().to_lowercase()).collect();
        self.synonyms.insert(class.into().to_lowercase(), members);
    }

    /// Looks up the pre-substitution for a normalized token.
    #[must_use]
    pub fn pre_substitution(&self, word: &str) -> Option<&str> {
        self.pre_substitutions.get(word).map(String::as_str)
    }

    /// Looks up the single-word reflection of a token.
    #[must_use]
    pub fn reflection(&self, word: &str) -> Option<&str> {
        self.reflections.get(word).map(String::as_str)
    }

    /// Looks up the reflection of a two-word phrase.
    #[must_use]
    pub fn phrase_reflection(&self, first: &str, second: &str) -> Option<&str> {
        self.phrase_reflections
            .get(first)
            .and_then(|seconds| seconds.get(second))
            .map(String::as_str)
    }

    /// Returns true if a synonym class with this name exists.
    #[must_use]
    pub fn has_synonym_class(&self, class: &str) -> bool {
        self.synonyms.contains_key(class)
    }

    /// Returns true if `word` belongs to synonym class `class`.
    ///
    /// Unknown classes have no members.
    #[must_use]
    pub fn is_synonym(&self, class: &str, word: &str) -> bool {
        self.synonyms
            .get(class)
            .is_some_and(|members| members.contains(word))
    }

    /// Returns the members of a synonym class.
    #[must_use]
    pub fn synonym_class(&self, class: &str) -> Option<&HashSet<String>> {
        self.synonyms.get(class)
    }

    /// Number of pre-substitution entries.
    #[must_use]
    pub fn pre_substitution_count(&self) -> usize {
        self.pre_substitutions.len()
    }

    /// Number of reflection entries, single words and phrases together.
    #[must_use]
    pub fn reflection_count(&self) -> usize {
        self.reflections.len()
            + self
                .phrase_reflections
                .values()
                .map(HashMap::len)
                .sum::<usize>()
    }
}
