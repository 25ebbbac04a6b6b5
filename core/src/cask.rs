//! Cask identifier matching.

use std::sync::LazyLock;

use regex::Regex;

/// Default pattern for fully qualified cask references
/// (`homebrew/cask/firefox`, `homebrew/cask-versions/firefox-beta`).
pub const DEFAULT_CASK_PATTERN: &str = r"(?i)^(homebrew)/(cask|cask-[\w-]+)/([\w-]+)$";

static DEFAULT_CASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_CASK_PATTERN).expect("static regex must compile"));

/// Classifies named arguments as cask references.
///
/// # Examples
///
/// ```
/// use brew_argv_core::CaskPattern;
///
/// let pattern = CaskPattern::default();
/// assert!(pattern.is_match("homebrew/cask/firefox"));
/// assert!(pattern.is_match("homebrew/cask-versions/firefox-beta"));
/// assert!(!pattern.is_match("firefox"));
/// assert!(!pattern.is_match("homebrew/core/wget"));
/// ```
#[derive(Debug, Clone)]
pub struct CaskPattern {
    regex: Regex,
}

impl CaskPattern {
    /// Compiles a custom pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Returns `true` if `name` is a cask reference.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Returns the pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for CaskPattern {
    fn default() -> Self {
        Self {
            regex: DEFAULT_CASK_RE.clone(),
        }
    }
}

impl From<Regex> for CaskPattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}
