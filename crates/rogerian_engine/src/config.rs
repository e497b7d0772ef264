//! Configuration for the responder.

/// Configuration for a responder and the conversations it creates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for the conversation's random generator (fallback choice).
    pub seed: u64,

    /// Maximum redirects followed for one input. `None` uses the number of
    /// keys in the script.
    pub max_redirects: Option<usize>,
}

impl EngineConfig {
    /// Creates the default configuration (seed 0, bound by key count).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set an explicit redirect bound.
    #[must_use]
    pub fn with_max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = Some(max);
        self
    }

    /// The redirect bound for a script with `key_count` keys.
    #[must_use]
    pub fn redirect_bound(&self, key_count: usize) -> usize {
        self.max_redirects.unwrap_or(key_count)
    }
}
