//! Integration tests for Layer 0: Foundation
//!
//! Tests error construction, display and context.

mod errors;
