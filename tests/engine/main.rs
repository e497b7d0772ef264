//! Integration tests for Layer 2: Engine
//!
//! Tests replies, redirects, memory and rotation against whole scripts.

mod memory;
mod redirects;
