//! Read-only access to the process environment and filesystem.
//!
//! The view never touches `std::env` or the filesystem directly; it asks an
//! [`Environment`]. [`SystemEnvironment`] answers from the running process
//! and [`StaticEnvironment`] answers from fixed sets, which keeps tests
//! deterministic.

use std::collections::HashSet;
use std::path::Path;

/// Presence checks the argument view depends on.
pub trait Environment {
    /// Returns `true` if the variable is set, whatever its value.
    ///
    /// A variable set to the empty string counts as set.
    fn var_is_set(&self, name: &str) -> bool;

    /// Returns `true` if `path` names an existing filesystem entry.
    fn path_exists(&self, path: &str) -> bool;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var_is_set(&self, name: &str) -> bool {
        (**self).var_is_set(name)
    }

    fn path_exists(&self, path: &str) -> bool {
        (**self).path_exists(path)
    }
}

/// Environment backed by the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var_is_set(&self, name: &str) -> bool {
        std::env::var_os(name).is_some()
    }

    fn path_exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }
}

/// Environment with a fixed set of variables and paths.
///
/// # Examples
///
/// ```
/// use brew_argv_core::{Environment, StaticEnvironment};
///
/// let env = StaticEnvironment::new()
///     .with_var("HOMEBREW_DEBUG")
///     .with_path("./Formula/foo.rb");
/// assert!(env.var_is_set("HOMEBREW_DEBUG"));
/// assert!(!env.var_is_set("HOMEBREW_DEVELOPER"));
/// assert!(env.path_exists("./Formula/foo.rb"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: HashSet<String>,
    paths: HashSet<String>,
}

impl StaticEnvironment {
    /// Creates an environment with no variables and no paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a variable as set.
    pub fn with_var(mut self, name: impl Into<String>) -> Self {
        self.vars.insert(name.into());
        self
    }

    /// Marks a path as existing.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.paths.insert(path.into());
        self
    }
}

impl Environment for StaticEnvironment {
    fn var_is_set(&self, name: &str) -> bool {
        self.vars.contains(name)
    }

    fn path_exists(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}
