//! Wildcard and synonym pattern matching.
//!
//! Aligns a compiled [`Pattern`] against normalized input tokens by
//! backtracking over (pattern position, input position) pairs. Wildcards
//! take the shortest span that lets the rest of the pattern match, trying
//! split points from left to right.
//!
//! Every recursive step consumes at least one pattern token, so the depth is
//! bounded by the pattern length. Failed positions are remembered, which
//! keeps patterns with several wildcards polynomial on long inputs.

use std::collections::HashSet;

use crate::lexicon::Lexicon;
use crate::pattern::{Pattern, PatternToken};

/// Captured spans, one per wildcard or synonym token of the pattern.
///
/// Synonym tokens contribute an empty string so that placeholder indices
/// line up with pattern positions.
pub type Captures = Vec<String>;

/// Matches input tokens against decomposition patterns.
pub struct PatternMatcher;

impl PatternMatcher {
    /// Matches `input` against `pattern`.
    ///
    /// Returns the captures on success, `None` if the pattern does not fit.
    #[must_use]
    pub fn match_tokens<S: AsRef<str>>(
        pattern: &Pattern,
        input: &[S],
        lexicon: &Lexicon,
    ) -> Option<Captures> {
        let mut state = MatchState {
            pattern: pattern.tokens(),
            input,
            lexicon,
            failed: HashSet::new(),
        };
        // Captures are collected back to front while unwinding
        state.step(0, 0).map(|mut captures| {
            captures.reverse();
            captures
        })
    }

    /// Returns true if a single pattern token accepts a single input word.
    ///
    /// A wildcard never accepts a word here: it only appears as the anchor
    /// after another wildcard, which cannot be aligned.
    #[must_use]
    pub fn token_matches(token: &PatternToken, word: &str, lexicon: &Lexicon) -> bool {
        match token {
            PatternToken::Literal(literal) => literal == word,
            PatternToken::Synonym(class) => lexicon.is_synonym(class, word),
            PatternToken::Wildcard => false,
        }
    }
}

struct MatchState<'a, S> {
    pattern: &'a [PatternToken],
    input: &'a [S],
    lexicon: &'a Lexicon,
    /// (pattern index, input index) pairs known not to match
    failed: HashSet<(usize, usize)>,
}

impl<S: AsRef<str>> MatchState<'_, S> {
    fn step(&mut self, p: usize, i: usize) -> Option<Captures> {
        if self.failed.contains(&(p, i)) {
            return None;
        }
        let result = self.step_uncached(p, i);
        if result.is_none() {
            self.failed.insert((p, i));
        }
        result
    }

    fn step_uncached(&mut self, p: usize, i: usize) -> Option<Captures> {
        let Some(token) = self.pattern.get(p) else {
            return (i == self.input.len()).then(Vec::new);
        };

        match token {
            PatternToken::Literal(_) => {
                let word = self.input.get(i)?;
                if !PatternMatcher::token_matches(token, word.as_ref(), self.lexicon) {
                    return None;
                }
                self.step(p + 1, i + 1)
            }
            PatternToken::Synonym(_) => {
                let word = self.input.get(i)?;
                if !PatternMatcher::token_matches(token, word.as_ref(), self.lexicon) {
                    return None;
                }
                let mut rest = self.step(p + 1, i + 1)?;
                rest.push(String::new());
                Some(rest)
            }
            PatternToken::Wildcard if p + 1 == self.pattern.len() => {
                Some(vec![self.join(i, self.input.len())])
            }
            PatternToken::Wildcard => {
                let anchor = &self.pattern[p + 1];
                for k in i..self.input.len() {
                    if !PatternMatcher::token_matches(anchor, self.input[k].as_ref(), self.lexicon)
                    {
                        continue;
                    }
                    if let Some(mut rest) = self.step(p + 2, k + 1) {
                        if matches!(anchor, PatternToken::Synonym(_)) {
                            rest.push(String::new());
                        }
                        rest.push(self.join(i, k));
                        return Some(rest);
                    }
                }
                None
            }
        }
    }

    fn join(&self, start: usize, end: usize) -> String {
        self.input[start..end]
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
