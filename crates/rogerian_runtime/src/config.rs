//! Command-line configuration.

use std::path::PathBuf;
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rogerian_engine::{EngineConfig, Session};
use rogerian_foundation::{Error, Result};
use rogerian_script::Script;
use rogerian_script::stdlib::RETIRED_FALLBACK;
use tracing::{debug, info};

/// Options for the `rogerian` binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// JSON script to load instead of the embedded doctor script.
    pub script: Option<PathBuf>,
    /// Seed for fallback choice and the startup shuffle. Random if unset.
    pub seed: Option<u64>,
    /// Whether to retire and shuffle fallback templates at startup.
    pub shuffle: bool,
    /// File of input lines to answer instead of reading the terminal.
    pub batch: Option<PathBuf>,
    /// Log filter directives, overriding `RUST_LOG`.
    pub log_filter: Option<String>,
    /// Print help and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            script: None,
            seed: None,
            shuffle: true,
            batch: None,
            log_filter: None,
            show_help: false,
            show_version: false,
        }
    }
}

impl RuntimeConfig {
    /// Parses arguments, not including the program name.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown options, missing values and
    /// unparseable seeds.
    pub fn parse_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "--no-shuffle" => config.shuffle = false,
                "-s" | "--script" => {
                    config.script = Some(PathBuf::from(value(&arg, args.next())?));
                }
                "-b" | "--batch" => {
                    config.batch = Some(PathBuf::from(value(&arg, args.next())?));
                }
                "--log" => config.log_filter = Some(value(&arg, args.next())?),
                "--seed" => {
                    let raw = value(&arg, args.next())?;
                    let seed = raw.parse().map_err(|_| {
                        Error::invalid_argument(format!("invalid --seed value: {raw}"))
                    })?;
                    config.seed = Some(seed);
                }
                other if other.starts_with('-') => {
                    return Err(Error::invalid_argument(format!("unknown option: {other}")));
                }
                other => {
                    return Err(Error::invalid_argument(format!("unexpected argument: {other}")));
                }
            }
        }

        Ok(config)
    }

    /// Loads the script and starts a session.
    ///
    /// An unset seed is drawn once here and used for both the startup
    /// shuffle and the conversation.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read or is invalid.
    pub fn session(&self) -> Result<Session> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut script = match &self.script {
            Some(path) => Script::load(path)?,
            None => Script::doctor()?,
        };
        let source = self
            .script
            .as_ref()
            .map_or_else(|| "<doctor>".to_string(), |p| p.display().to_string());
        info!(
            script = %source,
            keys = script.keys().len(),
            seed,
            "script loaded"
        );

        if self.shuffle {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            script.retire_fallback(RETIRED_FALLBACK, &mut rng);
        } else {
            debug!("fallback shuffle disabled");
        }

        Ok(Session::new(
            Arc::new(script),
            EngineConfig::new().with_seed(seed),
        ))
    }
}

fn value(option: &str, next: Option<String>) -> Result<String> {
    next.ok_or_else(|| Error::invalid_argument(format!("{option} requires a value")))
}
