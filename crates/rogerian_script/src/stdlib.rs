//! The embedded doctor script.
//!
//! A compact rendition of the classic psychotherapist script: a fallback
//! key, a handful of ranked topic keys, pronoun reflections and synonym
//! classes. Used when no script file is given.

use rogerian_foundation::Result;

use crate::script::Script;

/// Source of the default script.
pub const DOCTOR_SCRIPT: &str = include_str!("../scripts/doctor.json");

/// Fallback template retired at startup so the others come up more often.
pub const RETIRED_FALLBACK: &str = "I'm not sure I understand you fully.";

/// Fallback templates restored when retiring leaves none.
pub const DEFAULT_FALLBACK_TEMPLATES: &[&str] = &[
    "Please go on.",
    "What does that suggest to you?",
    "Do you feel strongly about discussing such things?",
];

impl Script {
    /// Loads the embedded doctor script.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded script is itself invalid.
    pub fn doctor() -> Result<Self> {
        Self::from_json(DOCTOR_SCRIPT)
    }
}
