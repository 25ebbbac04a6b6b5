//! Formula lookup seam.
//!
//! The view does not know how formulae are built. It hands each named
//! argument to a [`Formulary`], choosing the lookup with
//! [`ResolutionStrategy`], and compares what comes back through the
//! [`Formula`] trait.

use crate::env::Environment;
use crate::types::Spec;

/// A resolved formula, as far as the argument view cares.
pub trait Formula {
    /// Canonical short name (`wget`).
    fn name(&self) -> &str;

    /// Fully qualified name (`wget` for core formulae, `user/repo/wget`
    /// otherwise).
    fn full_name(&self) -> &str;
}

/// Source of formulae keyed by name and [`Spec`].
///
/// Errors are opaque to the view and are returned to the caller unchanged.
pub trait Formulary {
    /// Formula type produced by this formulary.
    type Formula: Formula;
    /// Lookup failure.
    type Error;

    /// Builds a formula from a path or qualified `user/repo/name` reference.
    fn factory(&self, reference: &str, spec: Spec) -> Result<Self::Formula, Self::Error>;

    /// Finds a formula by bare name, preferring higher-priority taps.
    fn find_with_priority(&self, name: &str, spec: Spec) -> Result<Self::Formula, Self::Error>;
}

impl<F: Formulary + ?Sized> Formulary for &F {
    type Formula = F::Formula;
    type Error = F::Error;

    fn factory(&self, reference: &str, spec: Spec) -> Result<Self::Formula, Self::Error> {
        (**self).factory(reference, spec)
    }

    fn find_with_priority(&self, name: &str, spec: Spec) -> Result<Self::Formula, Self::Error> {
        (**self).find_with_priority(name, spec)
    }
}

/// Which [`Formulary`] lookup a named argument goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// Contains `/` or exists on disk: [`Formulary::factory`].
    Path,
    /// Bare name: [`Formulary::find_with_priority`].
    Priority,
}

impl ResolutionStrategy {
    /// Picks the strategy for `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use brew_argv_core::{ResolutionStrategy, StaticEnvironment};
    ///
    /// let env = StaticEnvironment::new().with_path("foo.rb");
    /// assert_eq!(ResolutionStrategy::for_name("user/repo/foo", &env), ResolutionStrategy::Path);
    /// assert_eq!(ResolutionStrategy::for_name("foo.rb", &env), ResolutionStrategy::Path);
    /// assert_eq!(ResolutionStrategy::for_name("foo", &env), ResolutionStrategy::Priority);
    /// ```
    pub fn for_name(name: &str, env: &impl Environment) -> Self {
        if name.contains('/') || env.path_exists(name) {
            Self::Path
        } else {
            Self::Priority
        }
    }

    /// Runs the matching lookup on `formulary`.
    pub fn resolve<F: Formulary>(
        self,
        formulary: &F,
        name: &str,
        spec: Spec,
    ) -> Result<F::Formula, F::Error> {
        match self {
            Self::Path => formulary.factory(name, spec),
            Self::Priority => formulary.find_with_priority(name, spec),
        }
    }
}
