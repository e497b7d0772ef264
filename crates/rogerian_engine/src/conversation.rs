//! Per-conversation state.
//!
//! Holds everything that changes while talking: one rotation cursor per
//! decomposition, the memory, and the random generator used for fallback
//! replies. Each conversation owns its own copy, so conversations sharing a
//! script never see each other's rotation or memory.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::memory::Memory;

/// Mutable state of one conversation.
#[derive(Clone, Debug)]
pub struct Conversation {
    /// (key index, decomposition index) -> next template index
    cursors: HashMap<(usize, usize), usize>,
    memory: Memory,
    rng: ChaCha8Rng,
    turns: u64,
}

impl Conversation {
    /// Creates a fresh conversation seeded for reproducible fallbacks.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cursors: HashMap::new(),
            memory: Memory::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            turns: 0,
        }
    }

    /// Returns the template index to use for a decomposition and advances
    /// its cursor, wrapping at `len`.
    ///
    /// `len` must be the decomposition's template count.
    pub fn advance(&mut self, key: usize, decomposition: usize, len: usize) -> usize {
        let cursor = self.cursors.entry((key, decomposition)).or_insert(0);
        let current = if len == 0 { 0 } else { *cursor % len };
        *cursor = if len == 0 { 0 } else { (current + 1) % len };
        current
    }

    /// The next template index for a decomposition, without advancing.
    #[must_use]
    pub fn cursor(&self, key: usize, decomposition: usize) -> usize {
        self.cursors
            .get(&(key, decomposition))
            .copied()
            .unwrap_or(0)
    }

    /// The remembered fragments.
    #[must_use]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable access to the memory.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// The random generator for fallback choices.
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Number of inputs answered so far.
    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Counts one answered input.
    pub fn record_turn(&mut self) {
        self.turns += 1;
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(0)
    }
}
