//! File-backed formulary with builder pattern and fallback chains.
//!
//! Provides [`LocalFormulary`] for in-memory formula lookup and
//! [`FormularyBuilder`] for constructing one from multiple sources with
//! automatic fallback.
//!
//! # Loading patterns
//!
//! ```no_run
//! use brew_argv_formulary::LocalFormulary;
//!
//! // Load from a directory of JSON/YAML formula definitions
//! let formulary = LocalFormulary::from_dir("formulae/").unwrap();
//!
//! // Load from a single JSON bundle
//! let formulary = LocalFormulary::from_bundle("formulae.json").unwrap();
//!
//! // Use the builder for a fallback chain
//! let formulary = LocalFormulary::builder()
//!     .from_dir("formulae/")
//!     .from_bundle("formulae.json")
//!     .build()
//!     .unwrap();
//! ```
//!
//! Definitions are keyed by their lowercase `user/repo/name`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use brew_argv_core::{Formulary, Spec};
use tracing::debug;

use crate::definition::{FormulaBundle, FormulaDefinition, ResolvedFormula};
use crate::error::{FormularyError, Result};

/// Describes where a [`LocalFormulary`] was loaded from.
#[derive(Debug, Clone)]
pub enum FormularySource {
    /// Loaded from a directory of individual definition files.
    Directory(PathBuf),
    /// Loaded from a single [`FormulaBundle`] JSON file.
    Bundle(PathBuf),
    /// Built in memory.
    Memory,
    /// Loaded via a fallback chain of multiple sources.
    Multiple(Vec<FormularySource>),
}

/// Reads one definition file, choosing the parser by extension.
///
/// # Errors
///
/// Returns [`FormularyError::InvalidReference`] for extensions other than
/// `json`, `yaml` and `yml`, plus any I/O or parse error.
pub fn load_definition(path: impl AsRef<Path>) -> Result<FormulaDefinition> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(serde_json::from_reader(reader)?),
        Some("yaml" | "yml") => Ok(serde_yaml::from_reader(reader)?),
        _ => Err(FormularyError::InvalidReference(path.display().to_string())),
    }
}

fn is_definition_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json" | "yaml" | "yml")
    )
}

/// In-memory formula collection implementing [`Formulary`].
///
/// # Examples
///
/// ```
/// use brew_argv_core::{Formula, Formulary, Spec};
/// use brew_argv_formulary::{FormulaDefinition, LocalFormulary};
///
/// let mut formulary = LocalFormulary::new();
/// formulary.insert(FormulaDefinition::new("wget", "1.21"));
/// formulary.insert(FormulaDefinition::new("jq", "1.7").in_tap("user/tools"));
///
/// let wget = formulary.find_with_priority("wget", Spec::Stable).unwrap();
/// assert_eq!(wget.full_name(), "wget");
///
/// let jq = formulary.factory("user/tools/jq", Spec::Stable).unwrap();
/// assert_eq!(jq.full_name(), "user/tools/jq");
/// ```
#[derive(Debug)]
pub struct LocalFormulary {
    definitions: HashMap<String, FormulaDefinition>,
    source: FormularySource,
}

impl LocalFormulary {
    /// Creates an empty formulary.
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
            source: FormularySource::Memory,
        }
    }

    /// Returns a new [`FormularyBuilder`] for configuring a fallback chain.
    pub fn builder() -> FormularyBuilder {
        FormularyBuilder::new()
    }

    /// Loads definitions from a directory of `*.json`, `*.yaml` and `*.yml`
    /// files.
    ///
    /// # Errors
    ///
    /// Returns [`FormularyError::IoError`] if the directory cannot be read,
    /// or a parse error if any definition file is malformed.
    pub fn from_dir(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut formulary = Self::new();

        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let file_path = entry.path();
            if is_definition_file(&file_path) {
                formulary.insert(load_definition(&file_path)?);
            }
        }

        debug!(path = %path.display(), count = formulary.len(), "Loaded formula directory");
        formulary.source = FormularySource::Directory(path.to_path_buf());
        Ok(formulary)
    }

    /// Loads definitions from a single [`FormulaBundle`] JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`FormularyError::IoError`] if the file cannot be read, or
    /// [`FormularyError::JsonError`] if parsing fails.
    pub fn from_bundle(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let bundle: FormulaBundle = serde_json::from_reader(reader)?;

        let mut formulary = Self::new();
        for definition in bundle.formulae {
            formulary.insert(definition);
        }

        debug!(path = %path.display(), count = formulary.len(), "Loaded formula bundle");
        formulary.source = FormularySource::Bundle(path.to_path_buf());
        Ok(formulary)
    }

    /// Inserts a definition, replacing any with the same qualified name.
    pub fn insert(&mut self, definition: FormulaDefinition) {
        self.definitions
            .insert(definition.qualified_name().to_lowercase(), definition);
    }

    /// Looks up a definition by `user/repo/name` (case-insensitive).
    pub fn get(&self, qualified_name: &str) -> Option<&FormulaDefinition> {
        self.definitions.get(&qualified_name.to_lowercase())
    }

    /// Returns `true` if a definition with this qualified name exists.
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.get(qualified_name).is_some()
    }

    /// Returns the number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if the formulary holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns an iterator over the stored definitions.
    pub fn definitions(&self) -> impl Iterator<Item = &FormulaDefinition> {
        self.definitions.values()
    }

    /// Returns a reference to the source metadata.
    pub fn source(&self) -> &FormularySource {
        &self.source
    }
}

impl Default for LocalFormulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Formulary for LocalFormulary {
    type Formula = ResolvedFormula;
    type Error = FormularyError;

    /// Resolves an existing definition file or a `user/repo/name` reference.
    fn factory(&self, reference: &str, spec: Spec) -> Result<ResolvedFormula> {
        let path = Path::new(reference);
        if path.is_file() {
            debug!(reference, "Loading formula from file");
            return load_definition(path)?.resolve(spec);
        }

        let parts: Vec<&str> = reference.split('/').collect();
        if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
            return Err(FormularyError::InvalidReference(reference.to_string()));
        }

        self.get(reference)
            .ok_or_else(|| FormularyError::FormulaUnavailable(reference.to_string()))?
            .resolve(spec)
    }

    /// Resolves a bare name, preferring the core tap.
    ///
    /// Outside the core tap the name must be unique across taps.
    fn find_with_priority(&self, name: &str, spec: Spec) -> Result<ResolvedFormula> {
        let mut candidates: Vec<&FormulaDefinition> = self
            .definitions
            .values()
            .filter(|definition| definition.name.eq_ignore_ascii_case(name))
            .collect();

        if let Some(core) = candidates.iter().find(|definition| definition.is_core()) {
            return core.resolve(spec);
        }

        match candidates.len() {
            0 => Err(FormularyError::FormulaUnavailable(name.to_string())),
            1 => candidates[0].resolve(spec),
            _ => {
                candidates.sort_by_key(|definition| definition.full_name());
                debug!(name, count = candidates.len(), "Ambiguous formula name");
                Err(FormularyError::AmbiguousFormula {
                    name: name.to_string(),
                    candidates: candidates
                        .iter()
                        .map(|definition| definition.full_name())
                        .collect(),
                })
            }
        }
    }
}

/// Builder for constructing a [`LocalFormulary`] with a fallback chain.
///
/// Sources are tried in the order they are added. The first successful load
/// wins; if all fail, [`FormularyError::NoSourcesAvailable`] is returned.
pub struct FormularyBuilder {
    sources: Vec<FormularySource>,
}

impl FormularyBuilder {
    /// Creates a new builder with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a directory of definition files as a source.
    pub fn from_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(FormularySource::Directory(path.into()));
        self
    }

    /// Adds a [`FormulaBundle`] file as a source.
    pub fn from_bundle(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(FormularySource::Bundle(path.into()));
        self
    }

    /// Attempts to load definitions from configured sources in order.
    pub fn build(self) -> Result<LocalFormulary> {
        if self.sources.is_empty() {
            return Err(FormularyError::NoSourcesAvailable);
        }

        let all_sources = self.sources.clone();

        for source in &self.sources {
            let result = match source {
                FormularySource::Directory(path) => LocalFormulary::from_dir(path),
                FormularySource::Bundle(path) => LocalFormulary::from_bundle(path),
                FormularySource::Memory | FormularySource::Multiple(_) => continue,
            };

            match result {
                Ok(mut formulary) => {
                    formulary.source = FormularySource::Multiple(all_sources);
                    return Ok(formulary);
                }
                Err(err) => debug!(source = ?source, error = %err, "Formula source failed"),
            }
        }

        Err(FormularyError::NoSourcesAvailable)
    }
}

impl Default for FormularyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
