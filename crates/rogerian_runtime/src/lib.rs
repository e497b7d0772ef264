//! REPL, CLI and logging for Rogerian.
//!
//! This crate provides:
//! - [`Repl`] - The interactive `YOU:` / `BOT:` loop
//! - [`RuntimeConfig`] - Command-line options and session construction
//! - [`LineEditor`] - Line input abstraction (rustyline or any `BufRead`)
//! - [`logging`] - `tracing` subscriber installation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod logging;
pub mod repl;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, LineReader, ReadResult, RustylineEditor};
pub use repl::Repl;
