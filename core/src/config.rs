//! Configuration for the argument view.
//!
//! Controls which environment variables count as request signals, which
//! named arguments are treated as casks, and which suffixes keep a name from
//! being lowercased. Every field has a default, so an empty YAML document is
//! a valid configuration.
//!
//! # Example YAML
//!
//! ```yaml
//! env_signals:
//!   debug: HOMEBREW_DEBUG
//!   developer: HOMEBREW_DEVELOPER
//!   skip_or_later_bottles: HOMEBREW_SKIP_OR_LATER_BOTTLES
//!   no_sandbox: HOMEBREW_NO_SANDBOX
//! cask_pattern: '(?i)^(homebrew)/(cask|cask-[\w-]+)/([\w-]+)$'
//! preserved_suffixes:
//!   - .tar.gz
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cask::{CaskPattern, DEFAULT_CASK_PATTERN};
use crate::error::Result;

/// Environment variables whose presence turns a request on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvSignals {
    /// Enables [`debug_requested`](crate::ArgumentView::debug_requested).
    pub debug: String,
    /// Enables developer mode.
    pub developer: String,
    /// Enables skip-or-later bottles (only together with `developer`).
    pub skip_or_later_bottles: String,
    /// Disables the build sandbox.
    pub no_sandbox: String,
}

impl Default for EnvSignals {
    fn default() -> Self {
        Self {
            debug: "HOMEBREW_DEBUG".to_string(),
            developer: "HOMEBREW_DEVELOPER".to_string(),
            skip_or_later_bottles: "HOMEBREW_SKIP_OR_LATER_BOTTLES".to_string(),
            no_sandbox: "HOMEBREW_NO_SANDBOX".to_string(),
        }
    }
}

/// Top-level view configuration.
///
/// # Examples
///
/// ```
/// use brew_argv_core::ViewConfig;
///
/// let config: ViewConfig = serde_yaml::from_str("env_signals: { debug: MY_DEBUG }").unwrap();
/// assert_eq!(config.env_signals.debug, "MY_DEBUG");
/// assert_eq!(config.env_signals.developer, "HOMEBREW_DEVELOPER");
/// assert_eq!(config.preserved_suffixes, vec![".tar.gz"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Environment signal names.
    pub env_signals: EnvSignals,
    /// Regex source for cask references.
    pub cask_pattern: String,
    /// Suffixes that keep a named argument from being lowercased.
    pub preserved_suffixes: Vec<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            env_signals: EnvSignals::default(),
            cask_pattern: DEFAULT_CASK_PATTERN.to_string(),
            preserved_suffixes: vec![".tar.gz".to_string()],
        }
    }
}

impl ViewConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot be
    /// read, or [`YamlError`](crate::ConfigError::YamlError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Compiles [`cask_pattern`](Self::cask_pattern).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPattern`](crate::ConfigError::InvalidPattern) if the
    /// pattern does not compile.
    pub fn cask_matcher(&self) -> Result<CaskPattern> {
        if self.cask_pattern == DEFAULT_CASK_PATTERN {
            return Ok(CaskPattern::default());
        }
        Ok(CaskPattern::new(&self.cask_pattern)?)
    }

    /// Returns `true` if `name` ends with one of the preserved suffixes.
    pub fn has_preserved_suffix(&self, name: &str) -> bool {
        self.preserved_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }
}
