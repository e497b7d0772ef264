//! Error types for the Rogerian system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Replies themselves never fail; errors come from loading and validating
//! scripts, parsing command-line arguments, and terminal I/O.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Rogerian operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }

    /// Creates a duplicate key error.
    #[must_use]
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateKey(key.into()))
    }

    /// Creates an error for a decomposition with an empty pattern.
    #[must_use]
    pub fn empty_pattern(key: impl Into<String>, decomposition: usize) -> Self {
        Self::new(ErrorKind::EmptyPattern {
            key: key.into(),
            decomposition,
        })
    }

    /// Creates an error for a decomposition without reassembly templates.
    #[must_use]
    pub fn no_templates(key: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoTemplates {
            key: key.into(),
            pattern: pattern.into(),
        })
    }

    /// Creates an error for a reference to an undefined synonym class.
    #[must_use]
    pub fn unknown_synonym(key: impl Into<String>, class: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownSynonym {
            key: key.into(),
            class: class.into(),
        })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::ScriptFormat(err))
    }
}

/// Categorized error kinds.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading a file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The script file is not well-formed.
    #[error("malformed script: {0}")]
    ScriptFormat(serde_json::Error),

    /// Two keys share the same identifier.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A decomposition pattern has no tokens.
    #[error("empty pattern in decomposition {decomposition} of key {key}")]
    EmptyPattern {
        /// The key owning the decomposition.
        key: String,
        /// Index of the decomposition within the key.
        decomposition: usize,
    },

    /// A decomposition has no reassembly templates.
    #[error("decomposition '{pattern}' of key {key} has no reassembly templates")]
    NoTemplates {
        /// The key owning the decomposition.
        key: String,
        /// The pattern source of the decomposition.
        pattern: String,
    },

    /// A pattern references a synonym class that is not defined.
    #[error("key {key} references unknown synonym class @{class}")]
    UnknownSynonym {
        /// The key whose pattern holds the reference.
        key: String,
        /// The missing class name.
        class: String,
    },

    /// The fallback key is missing or cannot produce a reply.
    #[error("fallback key {0} is missing or has no reassembly templates")]
    MissingFallback(String),

    /// A group of keys only redirects among itself.
    #[error("redirect cycle without a terminal key: {}", .0.join(" -> "))]
    RedirectCycle(Vec<String>),

    /// A command-line argument or configuration value is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Script file or other named source.
    pub source: Option<String>,
    /// Key being processed when the error occurred.
    pub key: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the key being processed.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if let Some(key) = &self.key {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "in key {key}")?;
        }
        Ok(())
    }
}
