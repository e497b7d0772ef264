//! A single conversation with a script.

use std::sync::Arc;

use rogerian_foundation::Result;
use rogerian_script::Script;

use crate::config::EngineConfig;
use crate::conversation::Conversation;
use crate::responder::{Reply, Responder};

/// A responder paired with the state of one conversation.
///
/// # Example
///
/// ```
/// use rogerian_engine::Session;
///
/// let mut session = Session::doctor().unwrap();
/// assert_eq!(session.respond(""), "Please say something.");
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    responder: Responder,
    conversation: Conversation,
}

impl Session {
    /// Starts a conversation with a shared script.
    #[must_use]
    pub fn new(script: Arc<Script>, config: EngineConfig) -> Self {
        let responder = Responder::new(script, config);
        let conversation = responder.conversation();
        Self {
            responder,
            conversation,
        }
    }

    /// Starts a conversation with the embedded doctor script.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded script is invalid.
    pub fn doctor() -> Result<Self> {
        Ok(Self::new(Arc::new(Script::doctor()?), EngineConfig::default()))
    }

    /// Answers one line of input and returns the reply text.
    pub fn respond(&mut self, input: &str) -> String {
        self.reply(input).text
    }

    /// Answers one line of input.
    pub fn reply(&mut self, input: &str) -> Reply {
        self.responder.respond(&mut self.conversation, input)
    }

    /// The greeting to show before the first input.
    #[must_use]
    pub fn greeting(&self) -> &str {
        &self.responder.script().replies().greeting
    }

    /// The script being used.
    #[must_use]
    pub fn script(&self) -> &Arc<Script> {
        self.responder.script()
    }

    /// The conversation state.
    #[must_use]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Remembered fragments, oldest first.
    #[must_use]
    pub fn memory(&self) -> &[String] {
        self.conversation.memory().entries()
    }

    /// Forgets rotation, memory and turn count, reseeding from the config.
    pub fn reset(&mut self) {
        self.conversation = self.responder.conversation();
    }
}
