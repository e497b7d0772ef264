//! Rogerian - Rule-based conversational responder
//!
//! This crate re-exports all layers of the Rogerian system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: rogerian_runtime    - REPL, CLI, logging
//! Layer 2: rogerian_engine     - Responder, conversation state, memory
//! Layer 1: rogerian_script     - Lexicon, normalizer, patterns, matcher, scripts
//! Layer 0: rogerian_foundation - Errors
//! ```

pub use rogerian_engine as engine;
pub use rogerian_foundation as foundation;
pub use rogerian_runtime as runtime;
pub use rogerian_script as script;
