//! The ranked key table.
//!
//! A [`Script`] owns the lexicon, the ordered list of keys with their
//! decompositions, the exit words and the fixed replies. It is validated
//! once when built and never changes afterwards, apart from the startup
//! edit of the fallback key ([`Script::retire_fallback`]). Rotation cursors
//! live with each conversation so one script can serve many of them.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::SliceRandom;
use rogerian_foundation::{Error, ErrorContext, ErrorKind, Result};
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::pattern::Pattern;
use crate::reassembly::{Action, Reassembler};
use crate::stdlib::DEFAULT_FALLBACK_TEMPLATES;

/// A pattern and the templates it rotates through.
#[derive(Clone, Debug)]
pub struct Decomposition {
    pattern: Pattern,
    templates: Vec<String>,
}

impl Decomposition {
    /// Creates a decomposition from pattern source and templates.
    #[must_use]
    pub fn new(pattern: &str, templates: Vec<String>) -> Self {
        Self {
            pattern: Pattern::compile(pattern),
            templates,
        }
    }

    /// The compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The reassembly templates in rotation order.
    #[must_use]
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Returns the template at a rotation cursor, wrapping around.
    #[must_use]
    pub fn template(&self, cursor: usize) -> Option<&str> {
        if self.templates.is_empty() {
            return None;
        }
        Some(self.templates[cursor % self.templates.len()].as_str())
    }
}

/// A ranked topic trigger word.
#[derive(Clone, Debug)]
pub struct Key {
    name: String,
    rank: i32,
    decompositions: Vec<Decomposition>,
}

impl Key {
    /// Creates a key. The identifier is lowercased to match normalized input.
    #[must_use]
    pub fn new(name: &str, rank: i32, decompositions: Vec<Decomposition>) -> Self {
        Self {
            name: name.to_lowercase(),
            rank,
            decompositions,
        }
    }

    /// The key identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key rank (higher wins).
    #[must_use]
    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// Decompositions in the order they are tried.
    #[must_use]
    pub fn decompositions(&self) -> &[Decomposition] {
        &self.decompositions
    }
}

/// Fixed replies that do not come from a key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Replies {
    /// Reply to empty or punctuation-only input
    pub prompt: String,
    /// Reply to input containing an exit word
    pub farewell: String,
    /// Reply when a redirect cannot be resolved
    pub apology: String,
    /// Reply when even the fallback key has nothing to offer
    pub nothing_to_say: String,
    /// Banner printed when a conversation starts
    pub greeting: String,
    /// Farewell used when the terminal session is interrupted
    pub interrupted: String,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            prompt: "Please say something.".to_string(),
            farewell: "Goodbye. Thank you for talking to me.".to_string(),
            apology: "I don't understand.".to_string(),
            nothing_to_say: "I have nothing to say.".to_string(),
            greeting: "Hello. How do you do. Please tell me your problem.".to_string(),
            interrupted: "Goodbye. Take care.".to_string(),
        }
    }
}

/// A validated script.
#[derive(Clone, Debug)]
pub struct Script {
    lexicon: Lexicon,
    keys: Vec<Key>,
    index: HashMap<String, usize>,
    fallback: usize,
    exit_words: HashSet<String>,
    replies: Replies,
}

impl Script {
    /// Builds and validates a script.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for duplicate keys, empty patterns,
    /// decompositions without templates, unknown synonym classes, a missing
    /// fallback key, or keys that can only redirect among themselves.
    pub fn new(
        lexicon: Lexicon,
        keys: Vec<Key>,
        fallback_key: &str,
        exit_words: impl IntoIterator<Item = String>,
        replies: Replies,
    ) -> Result<Self> {
        let mut index = HashMap::with_capacity(keys.len());
        for (i, key) in keys.iter().enumerate() {
            if index.insert(key.name.clone(), i).is_some() {
                return Err(Error::duplicate_key(&key.name));
            }
        }

        let fallback_key = fallback_key.to_lowercase();
        let fallback = *index
            .get(&fallback_key)
            .ok_or_else(|| Error::new(ErrorKind::MissingFallback(fallback_key.clone())))?;

        let script = Self {
            lexicon,
            keys,
            index,
            fallback,
            exit_words: exit_words.into_iter().map(|w| w.to_lowercase()).collect(),
            replies,
        };
        script.validate()?;

        tracing::debug!(
            keys = script.keys.len(),
            fallback = %fallback_key,
            pre_substitutions = script.lexicon.pre_substitution_count(),
            reflections = script.lexicon.reflection_count(),
            "script loaded"
        );
        Ok(script)
    }

    fn validate(&self) -> Result<()> {
        for key in &self.keys {
            for (i, decomposition) in key.decompositions.iter().enumerate() {
                let context = ErrorContext::new().with_key(&key.name);
                if decomposition.pattern.is_empty() {
                    return Err(Error::empty_pattern(&key.name, i).with_context(context));
                }
                if decomposition.templates.is_empty() {
                    return Err(
                        Error::no_templates(&key.name, decomposition.pattern.source())
                            .with_context(context),
                    );
                }
                if let Some(class) = decomposition
                    .pattern
                    .synonym_classes()
                    .find(|class| !self.lexicon.has_synonym_class(class))
                {
                    return Err(Error::unknown_synonym(&key.name, class).with_context(context));
                }
                for template in &decomposition.templates {
                    if let Some(target) = Reassembler::redirect_target(template) {
                        if !self.index.contains_key(&target) {
                            tracing::warn!(
                                key = %key.name,
                                target = %target,
                                "redirect to unknown key"
                            );
                        }
                    }
                }
            }
        }

        let fallback = &self.keys[self.fallback];
        if fallback
            .decompositions
            .first()
            .is_none_or(|d| d.templates.is_empty())
        {
            return Err(Error::new(ErrorKind::MissingFallback(fallback.name.clone())));
        }

        self.check_redirects()
    }

    /// Rejects keys whose every template redirects to keys in the same
    /// situation. A bare `memory` template neither answers nor redirects, so
    /// keys without any redirect end a chain.
    fn check_redirects(&self) -> Result<()> {
        let mut terminal: Vec<bool> = self
            .keys
            .iter()
            .map(|key| {
                let templates = || key.decompositions.iter().flat_map(|d| &d.templates);
                templates().any(|t| self.ends_chain(t))
                    || !templates().any(|t| {
                        Reassembler::redirect_target(t)
                            .is_some_and(|target| self.index.contains_key(&target))
                    })
            })
            .collect();

        // A key that can redirect to a terminal key is terminal itself
        let mut changed = true;
        while changed {
            changed = false;
            for (i, key) in self.keys.iter().enumerate() {
                if terminal[i] {
                    continue;
                }
                let reaches = key.decompositions.iter().any(|d| {
                    d.templates.iter().any(|t| {
                        Reassembler::redirect_target(t)
                            .and_then(|target| self.index.get(&target))
                            .is_some_and(|&j| terminal[j])
                    })
                });
                if reaches {
                    terminal[i] = true;
                    changed = true;
                }
            }
        }

        let stuck: Vec<String> = self
            .keys
            .iter()
            .zip(&terminal)
            .filter(|&(_, &ok)| !ok)
            .map(|(key, _)| key.name.clone())
            .collect();

        if stuck.is_empty() {
            Ok(())
        } else {
            Err(Error::new(ErrorKind::RedirectCycle(stuck)))
        }
    }

    /// Returns true if a template answers without handing off: plain text, a
    /// `memory` directive with trailing text, or a redirect to a missing key.
    fn ends_chain(&self, template: &str) -> bool {
        match Reassembler::assemble(template, &[], &self.lexicon) {
            Action::Text(_) => true,
            Action::Redirect(target) => !self.index.contains_key(&target),
            Action::StoreMemory { trailing, .. } => !trailing.is_empty(),
        }
    }

    /// The lexicon used for normalization, matching and reflection.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// All keys in table order.
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Looks up a key by identifier.
    #[must_use]
    pub fn key(&self, name: &str) -> Option<&Key> {
        self.index.get(name).map(|&i| &self.keys[i])
    }

    /// Looks up the table position of a key.
    #[must_use]
    pub fn key_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Table position of the fallback key.
    #[must_use]
    pub fn fallback_index(&self) -> usize {
        self.fallback
    }

    /// The generic fallback key.
    #[must_use]
    pub fn fallback_key(&self) -> &Key {
        &self.keys[self.fallback]
    }

    /// Selects the key for a token sequence.
    ///
    /// Among non-fallback keys whose identifier appears as a token, the
    /// highest rank wins and ties go to the earlier key in the table. With
    /// no key present the fallback key is returned.
    #[must_use]
    pub fn select_key<S: AsRef<str>>(&self, tokens: &[S]) -> usize {
        let mut best: Option<(i32, usize)> = None;
        for (i, key) in self.keys.iter().enumerate() {
            if i == self.fallback || !tokens.iter().any(|t| t.as_ref() == key.name) {
                continue;
            }
            if best.is_none_or(|(rank, _)| key.rank > rank) {
                best = Some((key.rank, i));
            }
        }
        best.map_or(self.fallback, |(_, i)| i)
    }

    /// Returns true if the word ends the conversation.
    #[must_use]
    pub fn is_exit_word(&self, word: &str) -> bool {
        self.exit_words.contains(word)
    }

    /// The exit words.
    #[must_use]
    pub fn exit_words(&self) -> &HashSet<String> {
        &self.exit_words
    }

    /// The fixed replies.
    #[must_use]
    pub fn replies(&self) -> &Replies {
        &self.replies
    }

    /// Removes a template from the fallback key's first decomposition and
    /// shuffles what remains.
    ///
    /// If nothing remains the default fallback templates are restored
    /// before shuffling. Meant to run once at startup, before any
    /// conversation uses the script.
    pub fn retire_fallback<R: Rng + ?Sized>(&mut self, template: &str, rng: &mut R) {
        let fallback = &mut self.keys[self.fallback];
        let Some(decomposition) = fallback.decompositions.first_mut() else {
            return;
        };

        decomposition.templates.retain(|t| t != template);
        if decomposition.templates.is_empty() {
            decomposition.templates = DEFAULT_FALLBACK_TEMPLATES
                .iter()
                .map(ToString::to_string)
                .collect();
        }
        decomposition.templates.shuffle(rng);

        tracing::debug!(
            key = %fallback.name,
            remaining = decomposition.templates.len(),
            "retired fallback template"
        );
    }
}
