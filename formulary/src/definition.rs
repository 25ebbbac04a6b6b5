//! Formula definitions and resolved formulae.

use brew_argv_core::{Formula, Spec};
use serde::{Deserialize, Serialize};

use crate::error::{FormularyError, Result};

/// Tap that owns unqualified formula names.
pub const CORE_TAP: &str = "homebrew/core";

fn default_tap() -> String {
    CORE_TAP.to_string()
}

/// A formula as stored on disk.
///
/// # Examples
///
/// ```
/// use brew_argv_formulary::FormulaDefinition;
///
/// let def: FormulaDefinition = serde_yaml::from_str(
///     "name: jq\ntap: user/tools\nstable: '1.7'\nhead: HEAD\n",
/// ).unwrap();
/// assert_eq!(def.full_name(), "user/tools/jq");
/// assert!(!def.is_core());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaDefinition {
    /// Short name (`wget`).
    pub name: String,
    /// Owning tap as `user/repo`.
    #[serde(default = "default_tap")]
    pub tap: String,
    /// One-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Stable version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stable: Option<String>,
    /// HEAD version label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    /// Development version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devel: Option<String>,
}

impl FormulaDefinition {
    /// Creates a core-tap definition with a stable version.
    pub fn new(name: impl Into<String>, stable: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tap: default_tap(),
            desc: None,
            stable: Some(stable.into()),
            head: None,
            devel: None,
        }
    }

    /// Moves the definition to another tap.
    pub fn in_tap(mut self, tap: impl Into<String>) -> Self {
        self.tap = tap.into();
        self
    }

    /// Adds a HEAD version.
    pub fn with_head(mut self, head: impl Into<String>) -> Self {
        self.head = Some(head.into());
        self
    }

    /// Adds a development version.
    pub fn with_devel(mut self, devel: impl Into<String>) -> Self {
        self.devel = Some(devel.into());
        self
    }

    /// Returns `true` if the formula lives in [`CORE_TAP`].
    pub fn is_core(&self) -> bool {
        self.tap == CORE_TAP
    }

    /// Bare name for core formulae, `user/repo/name` otherwise.
    pub fn full_name(&self) -> String {
        if self.is_core() {
            self.name.clone()
        } else {
            format!("{}/{}", self.tap, self.name)
        }
    }

    /// `user/repo/name`, including for core formulae.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.tap, self.name)
    }

    /// Returns the version string for `spec`, if defined.
    pub fn version(&self, spec: Spec) -> Option<&str> {
        match spec {
            Spec::Stable => self.stable.as_deref(),
            Spec::Head => self.head.as_deref(),
            Spec::Devel => self.devel.as_deref(),
        }
    }

    /// Resolves this definition for `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`FormularyError::SpecUnavailable`] if the definition has no
    /// version for `spec`.
    pub fn resolve(&self, spec: Spec) -> Result<ResolvedFormula> {
        let version = self
            .version(spec)
            .ok_or_else(|| FormularyError::SpecUnavailable {
                name: self.full_name(),
                spec,
            })?;
        Ok(ResolvedFormula {
            name: self.name.clone(),
            full_name: self.full_name(),
            tap: self.tap.clone(),
            spec,
            version: version.to_string(),
        })
    }
}

/// A bundle of formula definitions in one JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaBundle {
    /// Bundle format version.
    pub version: String,
    /// Definitions in the bundle.
    pub formulae: Vec<FormulaDefinition>,
}

/// A formula resolved for a particular [`Spec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFormula {
    pub name: String,
    pub full_name: String,
    pub tap: String,
    pub spec: Spec,
    pub version: String,
}

impl Formula for ResolvedFormula {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }
}
