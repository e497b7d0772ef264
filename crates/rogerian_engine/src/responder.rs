//! The responder.
//!
//! Turns one line of user text into a [`Reply`]:
//!
//! ```text
//! raw line -> normalize -> exit word? -> select key
//!                                           |
//!                       +-------------------+
//!                       v
//!        decompositions in order -> first match -> template at cursor
//!                                                       |
//!                         Text | Redirect | StoreMemory <+
//! ```
//!
//! Redirects restart the decomposition loop on another key, bounded by the
//! configured redirect limit. Replying never fails: every path ends in some
//! text.

use std::fmt;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rogerian_script::{Action, Normalizer, PatternMatcher, Reassembler, Script};
use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::conversation::Conversation;

/// Where a reply came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyKind {
    /// The input was empty after normalization
    Prompt,
    /// The input contained an exit word
    Farewell,
    /// A key's decomposition produced the reply (the key after redirects)
    Keyed(String),
    /// The fallback key answered, or no key produced anything
    Fallback,
    /// A redirect could not be resolved
    Apology,
}

/// A reply to one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    /// The reply text
    pub text: String,
    /// Where it came from
    pub kind: ReplyKind,
}

impl Reply {
    /// Creates a reply.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: ReplyKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Returns true if the conversation should end after this reply.
    #[must_use]
    pub fn ends_conversation(&self) -> bool {
        self.kind == ReplyKind::Farewell
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Result of trying one key against the input.
enum Outcome {
    Reply(String),
    Redirect(String),
    Exhausted,
}

/// Answers input against a shared script.
///
/// The responder itself is stateless; all mutable state is passed in as a
/// [`Conversation`].
#[derive(Clone, Debug)]
pub struct Responder {
    script: Arc<Script>,
    config: EngineConfig,
}

impl Responder {
    /// Creates a responder for a script.
    #[must_use]
    pub fn new(script: Arc<Script>, config: EngineConfig) -> Self {
        Self { script, config }
    }

    /// The script.
    #[must_use]
    pub fn script(&self) -> &Arc<Script> {
        &self.script
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Creates a conversation seeded from the configuration.
    #[must_use]
    pub fn conversation(&self) -> Conversation {
        Conversation::new(self.config.seed)
    }

    /// Answers one line of input.
    pub fn respond(&self, conversation: &mut Conversation, input: &str) -> Reply {
        conversation.record_turn();
        let script = &*self.script;
        let replies = script.replies();

        let normalized = Normalizer::normalize(input, script.lexicon());
        trace!(input, normalized = %normalized, "normalized input");
        let tokens = Normalizer::tokenize(&normalized);

        if tokens.is_empty() {
            return Reply::new(&replies.prompt, ReplyKind::Prompt);
        }
        if tokens.iter().any(|t| script.is_exit_word(t)) {
            return Reply::new(&replies.farewell, ReplyKind::Farewell);
        }

        let selected = script.select_key(&tokens);
        debug!(key = script.keys()[selected].name(), "selected key");

        let bound = self.config.redirect_bound(script.keys().len());
        let mut current = selected;
        let mut redirects = 0usize;

        loop {
            match self.try_key(conversation, current, &tokens) {
                Outcome::Reply(text) if current == script.fallback_index() => {
                    return Reply::new(text, ReplyKind::Fallback);
                }
                Outcome::Reply(text) => {
                    let key = script.keys()[current].name().to_string();
                    return Reply::new(text, ReplyKind::Keyed(key));
                }
                Outcome::Redirect(target) => {
                    redirects += 1;
                    if redirects > bound {
                        warn!(bound, target = %target, "redirect bound exhausted");
                        return self.fallback(conversation);
                    }
                    let Some(next) = script.key_index(&target) else {
                        debug!(target = %target, "redirect to unknown key");
                        return Reply::new(&replies.apology, ReplyKind::Apology);
                    };
                    debug!(
                        from = script.keys()[current].name(),
                        to = %target,
                        "redirect"
                    );
                    current = next;
                }
                Outcome::Exhausted if redirects == 0 => return self.fallback(conversation),
                Outcome::Exhausted => {
                    return Reply::new(&replies.apology, ReplyKind::Apology);
                }
            }
        }
    }

    /// Tries a key's decompositions in order.
    fn try_key(
        &self,
        conversation: &mut Conversation,
        key_index: usize,
        tokens: &[&str],
    ) -> Outcome {
        let lexicon = self.script.lexicon();
        let key = &self.script.keys()[key_index];

        for (index, decomposition) in key.decompositions().iter().enumerate() {
            let pattern = decomposition.pattern();
            let Some(captures) = PatternMatcher::match_tokens(pattern, tokens, lexicon) else {
                continue;
            };

            let cursor = conversation.advance(key_index, index, decomposition.templates().len());
            let Some(template) = decomposition.template(cursor) else {
                continue;
            };
            debug!(
                key = key.name(),
                pattern = pattern.source(),
                template,
                "decomposition matched"
            );

            match Reassembler::assemble(template, &captures, lexicon) {
                Action::Text(text) => return Outcome::Reply(text),
                Action::Redirect(target) => return Outcome::Redirect(target),
                Action::StoreMemory { fragment, trailing } => {
                    if !fragment.is_empty() {
                        debug!(fragment = %fragment, "memory stored");
                        conversation.memory_mut().remember(fragment);
                    }
                    if !trailing.is_empty() {
                        return Outcome::Reply(trailing);
                    }
                }
            }
        }

        Outcome::Exhausted
    }

    /// A random template of the fallback key's first decomposition.
    fn fallback(&self, conversation: &mut Conversation) -> Reply {
        let templates = self
            .script
            .fallback_key()
            .decompositions()
            .first()
            .map(rogerian_script::Decomposition::templates)
            .unwrap_or_default();

        match templates.choose(conversation.rng_mut()) {
            Some(text) => Reply::new(text, ReplyKind::Fallback),
            None => Reply::new(&self.script.replies().nothing_to_say, ReplyKind::Fallback),
        }
    }
}
