//! Compiled decomposition patterns.
//!
//! A pattern is written as whitespace-separated tokens: `*` is a wildcard,
//! `@class` references a synonym class and anything else is a literal word.

use std::fmt;

use crate::lexicon::{SYNONYM_MARKER, WILDCARD};

/// A compiled pattern element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternToken {
    /// A word that must appear exactly
    Literal(String),
    /// Zero or more input tokens
    Wildcard,
    /// Any member of the named synonym class
    Synonym(String),
}

impl PatternToken {
    /// Returns true if this token produces an entry in the capture list.
    #[must_use]
    pub fn captures(&self) -> bool {
        matches!(self, Self::Wildcard | Self::Synonym(_))
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(word) => write!(f, "{word}"),
            Self::Wildcard => write!(f, "{WILDCARD}"),
            Self::Synonym(class) => write!(f, "{SYNONYM_MARKER}{class}"),
        }
    }
}

/// A compiled decomposition pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Source text the pattern was compiled from
    source: String,
    /// Pattern elements in order
    tokens: Vec<PatternToken>,
}

impl Pattern {
    /// Compiles a pattern from its source text.
    ///
    /// Literals and class names are lowercased so they line up with
    /// normalized input.
    #[must_use]
    pub fn compile(source: &str) -> Self {
        let tokens = source
            .split_whitespace()
            .map(|word| {
                if word == WILDCARD {
                    PatternToken::Wildcard
                } else if let Some(class) = word.strip_prefix(SYNONYM_MARKER) {
                    PatternToken::Synonym(class.to_lowercase())
                } else {
                    PatternToken::Literal(word.to_lowercase())
                }
            })
            .collect();

        Self {
            source: source.to_string(),
            tokens,
        }
    }

    /// Builds a pattern directly from tokens.
    #[must_use]
    pub fn from_tokens(tokens: Vec<PatternToken>) -> Self {
        let source = tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Self { source, tokens }
    }

    /// The source text of this pattern.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled tokens.
    #[must_use]
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Returns true if the pattern has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of captures a successful match produces.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.captures()).count()
    }

    /// Synonym classes referenced by this pattern.
    pub fn synonym_classes(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|t| match t {
            PatternToken::Synonym(class) => Some(class.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
