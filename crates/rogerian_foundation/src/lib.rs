//! Core error types for Rogerian.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with optional context
//! - [`ErrorKind`] - Categorized failures (script loading, validation, CLI)
//! - [`Result`] - Crate-wide result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind, Result};
