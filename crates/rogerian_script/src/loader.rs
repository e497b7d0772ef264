//! Declarative script files.
//!
//! Scripts are plain data: a JSON document describing the lexicon, the exit
//! words, the fixed replies and the ordered key table. Loading compiles the
//! patterns and validates the result, so a malformed script is rejected
//! before any conversation starts.
//!
//! ```json
//! {
//!   "fallback_key": "xnone",
//!   "exit_words": ["bye", "quit"],
//!   "synonyms": { "family": ["mother", "father"] },
//!   "keys": [
//!     { "key": "xnone", "rank": 0,
//!       "decompositions": [{ "pattern": "*", "reassembly": ["Please go on."] }] },
//!     { "key": "mother", "rank": 5,
//!       "decompositions": [{ "pattern": "* @family *", "reassembly": ["goto family"] }] }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rogerian_foundation::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::script::{Decomposition, Key, Replies, Script};

/// Serialized form of a whole script.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptDef {
    /// Identifier of the generic fallback key
    #[serde(default = "default_fallback_key")]
    pub fallback_key: String,
    /// Words that end the conversation
    #[serde(default = "default_exit_words")]
    pub exit_words: Vec<String>,
    /// Fixed replies; missing entries take their defaults
    #[serde(default)]
    pub replies: Replies,
    /// Token replacements applied during normalization
    #[serde(default)]
    pub pre_substitutions: BTreeMap<String, String>,
    /// Perspective swaps applied to captured text
    #[serde(default)]
    pub reflections: BTreeMap<String, String>,
    /// Synonym classes usable as `@class` in patterns
    #[serde(default)]
    pub synonyms: BTreeMap<String, Vec<String>>,
    /// The key table, in tie-breaking order
    pub keys: Vec<KeyDef>,
}

/// Serialized form of a key.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyDef {
    /// Key identifier, matched against input tokens
    pub key: String,
    /// Rank; higher wins
    #[serde(default)]
    pub rank: i32,
    /// Decompositions in the order they are tried
    pub decompositions: Vec<DecompositionDef>,
}

/// Serialized form of a decomposition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecompositionDef {
    /// Pattern source (`*`, `@class` and literal words)
    pub pattern: String,
    /// Reassembly templates in rotation order
    pub reassembly: Vec<String>,
}

fn default_fallback_key() -> String {
    "xnone".to_string()
}

fn default_exit_words() -> Vec<String> {
    ["bye", "goodbye", "quit", "exit"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl ScriptDef {
    /// Builds the lexicon described by this definition.
    #[must_use]
    pub fn lexicon(&self) -> Lexicon {
        let mut lexicon = Lexicon::new();
        for (word, replacement) in &self.pre_substitutions {
            lexicon.add_pre_substitution(word.as_str(), replacement.as_str());
        }
        for (from, to) in &self.reflections {
            lexicon.add_reflection(from.as_str(), to.as_str());
        }
        for (class, words) in &self.synonyms {
            lexicon.add_synonym_class(class.as_str(), words.iter().map(String::as_str));
        }
        lexicon
    }
}

impl Script {
    /// Compiles and validates a script definition.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if validation fails (see [`Script::new`]).
    pub fn from_def(def: ScriptDef) -> Result<Self> {
        let lexicon = def.lexicon();
        let keys = def
            .keys
            .into_iter()
            .map(|key| {
                let decompositions = key
                    .decompositions
                    .into_iter()
                    .map(|d| Decomposition::new(&d.pattern, d.reassembly))
                    .collect();
                Key::new(&key.key, key.rank, decompositions)
            })
            .collect();

        Self::new(lexicon, keys, &def.fallback_key, def.exit_words, def.replies)
    }

    /// Parses a script from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the script is invalid.
    pub fn from_json(source: &str) -> Result<Self> {
        let def: ScriptDef = serde_json::from_str(source)?;
        Self::from_def(def)
    }

    /// Loads a script from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or
    /// describes an invalid script. The error context names the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::info!(path = %path.display(), "loading script");

        Self::from_json(&source).map_err(|err| {
            let context = err
                .context
                .clone()
                .unwrap_or_default()
                .with_source(path.display().to_string());
            err.with_context(context)
        })
    }
}
