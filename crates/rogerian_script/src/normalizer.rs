//! Input normalization.
//!
//! Converts a raw line of user text into a single-spaced, lowercase token
//! stream with pre-substitutions applied.

use crate::lexicon::{Lexicon, SYNONYM_MARKER};

/// Normalizes user input.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes a raw input line.
    ///
    /// - Converts to lowercase
    /// - Replaces punctuation with spaces (apostrophes and `@` survive)
    /// - Collapses whitespace
    /// - Replaces each token found in the pre-substitution map, once
    ///
    /// Returns an empty string when nothing but punctuation or whitespace
    /// was given.
    #[must_use]
    pub fn normalize(input: &str, lexicon: &Lexicon) -> String {
        let cleaned: String = input
            .to_lowercase()
            .chars()
            .map(|ch| if Self::is_kept(ch) { ch } else { ' ' })
            .collect();

        let mut normalized = String::with_capacity(cleaned.len());
        for word in cleaned.split_whitespace() {
            let replacement = lexicon.pre_substitution(word).unwrap_or(word);
            // A substitution may expand to several words ("i'm" -> "i am")
            for part in replacement.split_whitespace() {
                if !normalized.is_empty() {
                    normalized.push(' ');
                }
                normalized.push_str(part);
            }
        }
        normalized
    }

    /// Splits normalized text into tokens.
    #[must_use]
    pub fn tokenize(normalized: &str) -> Vec<&str> {
        normalized.split_whitespace().collect()
    }

    /// Word characters, whitespace, apostrophes and the synonym marker.
    fn is_kept(ch: char) -> bool {
        ch.is_alphanumeric()
            || ch.is_whitespace()
            || ch == '_'
            || ch == '\''
            || ch == SYNONYM_MARKER
    }
}
