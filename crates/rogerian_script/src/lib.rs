//! Scripts for the Rogerian responder.
//!
//! This crate turns a line of user text into tokens and matches those tokens
//! against the decomposition patterns of a script. The engine crate drives
//! the pieces; everything here is stateless apart from the [`Script`] table
//! itself.
//!
//! # Architecture
//!
//! ```text
//! "Well, I guess I want a pony!"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   NORMALIZER    │  → "well i guess i want a pony"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ KEY SELECTION   │  → highest-ranked key present in the input
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERN         │  → "* i want *" captures ["well i guess", "a pony"]
//! │ MATCHING        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ REASSEMBLY      │  → Text("Why do you want a pony?") | Redirect | StoreMemory
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`lexicon`] - Pre-substitution, reflection and synonym tables
//! - [`normalizer`] - Convert raw input to a normalized token stream
//! - [`pattern`] - Compiled decomposition patterns
//! - [`matcher`] - Wildcard and synonym pattern matching
//! - [`reassembly`] - Template instantiation and directives
//! - [`script`] - The ranked key table
//! - [`loader`] - Declarative script files
//! - [`stdlib`] - The embedded doctor script

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexicon;
pub mod loader;
pub mod matcher;
pub mod normalizer;
pub mod pattern;
pub mod reassembly;
pub mod script;
pub mod stdlib;

// Re-export main types for convenience
pub use lexicon::Lexicon;
pub use loader::{DecompositionDef, KeyDef, ScriptDef};
pub use matcher::{Captures, PatternMatcher};
pub use normalizer::Normalizer;
pub use pattern::{Pattern, PatternToken};
pub use reassembly::{Action, Reassembler};
pub use script::{Decomposition, Key, Replies, Script};
