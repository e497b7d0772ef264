//! Responder, conversation state and memory for Rogerian.
//!
//! This crate provides:
//! - [`Responder`] - Key selection, decomposition matching and action resolution
//! - [`Conversation`] - Per-conversation rotation cursors, memory and randomness
//! - [`Memory`] - Append-only store of remembered fragments
//! - [`Session`] - A responder paired with one conversation
//! - [`EngineConfig`] - Seed and redirect bound
//!
//! A [`rogerian_script::Script`] is immutable and can be shared between any
//! number of conversations; everything that changes while talking lives in
//! a [`Conversation`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod conversation;
pub mod memory;
pub mod responder;
pub mod session;

pub use config::EngineConfig;
pub use conversation::Conversation;
pub use memory::Memory;
pub use responder::{Reply, ReplyKind, Responder};
pub use session::Session;
