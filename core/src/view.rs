//! The argument view.
//!
//! [`ArgumentView`] wraps the raw token list and answers questions about it.
//! It never mutates the list; build a new view if the arguments change.

use std::collections::HashSet;

use tracing::debug;

use crate::cask::CaskPattern;
use crate::config::ViewConfig;
use crate::env::{Environment, SystemEnvironment};
use crate::error::Result;
use crate::formula::{Formula, Formulary, ResolutionStrategy};
use crate::token::{self, TokenKind};
use crate::types::{BottleArch, Spec};

/// Read-only queries over a command-line argument list.
///
/// # Examples
///
/// ```
/// use brew_argv_core::{ArgumentView, Spec, StaticEnvironment};
///
/// let view = ArgumentView::new(
///     ["install", "-vs", "--HEAD", "--cc=clang", "Wget"],
///     StaticEnvironment::new(),
/// );
/// assert_eq!(view.flags_only(), vec!["--HEAD", "--cc=clang"]);
/// assert_eq!(view.named_arguments(), vec!["install", "Wget"]);
/// assert_eq!(view.downcased_unique_named(), vec!["install", "wget"]);
/// assert!(view.switch_present("v"));
/// assert!(view.build_from_source_requested());
/// assert_eq!(view.cc_override(), Some("clang"));
/// assert_eq!(view.spec(), Spec::Head);
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentView<E = SystemEnvironment> {
    args: Vec<String>,
    env: E,
    config: ViewConfig,
    cask_pattern: CaskPattern,
}

impl ArgumentView<SystemEnvironment> {
    /// Builds a view over the current process arguments (without `argv[0]`),
    /// reading the process environment.
    pub fn from_process() -> Self {
        Self::new(std::env::args().skip(1), SystemEnvironment)
    }
}

impl<E: Environment> ArgumentView<E> {
    /// Builds a view with the default [`ViewConfig`].
    pub fn new<I, S>(args: I, env: E) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            env,
            config: ViewConfig::default(),
            cask_pattern: CaskPattern::default(),
        }
    }

    /// Builds a view with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPattern`](crate::ConfigError::InvalidPattern) if the
    /// configured cask pattern does not compile.
    pub fn with_config<I, S>(args: I, env: E, config: ViewConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cask_pattern = config.cask_matcher()?;
        Ok(Self {
            args: args.into_iter().map(Into::into).collect(),
            env,
            config,
            cask_pattern,
        })
    }

    /// Returns the raw tokens.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the environment the view reads from.
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Returns `true` if `token` appears verbatim.
    pub fn contains(&self, token: &str) -> bool {
        self.args.iter().any(|arg| arg == token)
    }

    /// Tokens starting with `--`, in order.
    pub fn flags_only(&self) -> Vec<&str> {
        self.args
            .iter()
            .map(String::as_str)
            .filter(|arg| token::is_long_flag(arg))
            .collect()
    }

    /// Tokens starting with `-` or `--`, in order.
    pub(crate) fn options_only(&self) -> impl Iterator<Item = &str> {
        self.args
            .iter()
            .map(String::as_str)
            .filter(|arg| token::is_option(arg))
    }

    /// Returns `true` if `switch` occurs in a single-dash option token.
    ///
    /// Always `false` when `switch` has more than one character. The test is
    /// a substring check on the whole token, so bundled switches match:
    /// `-ns` satisfies both `"n"` and `"s"`.
    pub fn switch_present(&self, switch: &str) -> bool {
        if switch.chars().count() > 1 {
            return false;
        }
        self.options_only()
            .any(|arg| token::dash_count(arg) == 1 && arg.contains(switch))
    }

    /// Returns `true` if `flag` is present verbatim, or if the switch derived
    /// from its third character is present.
    ///
    /// `flag_present("--debug")` therefore also matches `-d` and any bundle
    /// containing `d`, such as `-vd`.
    pub fn flag_present(&self, flag: &str) -> bool {
        if self.options_only().any(|arg| arg == flag) {
            return true;
        }
        token::derived_switch(flag).is_some_and(|switch| self.switch_present(switch))
    }

    /// Tokens that are not options, in order.
    pub fn named_arguments(&self) -> Vec<&str> {
        self.args
            .iter()
            .map(String::as_str)
            .filter(|arg| token::classify(arg) == TokenKind::Named)
            .collect()
    }

    /// Named arguments, lowercased and deduplicated.
    ///
    /// Paths, bottle archives and anything that exists on disk keep their
    /// case. The first occurrence of each resulting string wins.
    pub fn downcased_unique_named(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.named_arguments()
            .into_iter()
            .map(|arg| {
                if self.preserves_case(arg) {
                    arg.to_string()
                } else {
                    arg.to_lowercase()
                }
            })
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    fn preserves_case(&self, arg: &str) -> bool {
        arg.contains('/') || self.config.has_preserved_suffix(arg) || self.env.path_exists(arg)
    }

    /// Named arguments that match the cask pattern.
    pub fn casks(&self) -> Vec<String> {
        self.downcased_unique_named()
            .into_iter()
            .filter(|name| self.cask_pattern.is_match(name))
            .collect()
    }

    /// Resolves every non-cask named argument through `formulary`.
    ///
    /// Names containing `/` or existing on disk go through
    /// [`Formulary::factory`]; bare names go through
    /// [`Formulary::find_with_priority`]. Results are deduplicated by
    /// [`Formula::name`], keeping the first.
    ///
    /// # Errors
    ///
    /// Returns the first lookup error unchanged.
    pub fn formulae<F: Formulary>(
        &self,
        formulary: &F,
    ) -> std::result::Result<Vec<F::Formula>, F::Error> {
        let spec = self.spec();
        let mut seen = HashSet::new();
        let mut formulae = Vec::new();

        for name in self.downcased_unique_named() {
            if self.cask_pattern.is_match(&name) {
                continue;
            }
            let strategy = ResolutionStrategy::for_name(&name, &self.env);
            debug!(name = %name, strategy = ?strategy, spec = %spec, "Resolving formula");
            let formula = strategy.resolve(formulary, &name, spec)?;
            if seen.insert(formula.name().to_string()) {
                formulae.push(formula);
            } else {
                debug!(name = %name, canonical = formula.name(), "Dropping duplicate formula");
            }
        }

        Ok(formulae)
    }

    /// Returns the value of the first `--{name}=value` token.
    ///
    /// # Examples
    ///
    /// ```
    /// use brew_argv_core::{ArgumentView, StaticEnvironment};
    ///
    /// let view = ArgumentView::new(["--env=std", "--env=super"], StaticEnvironment::new());
    /// assert_eq!(view.value("env"), Some("std"));
    /// assert_eq!(view.value("cc"), None);
    /// ```
    pub fn value(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find_map(|arg| token::inline_value(arg, name))
    }

    /// `--debug` (or a `d` switch), or the debug environment signal.
    pub fn debug_requested(&self) -> bool {
        self.flag_present("--debug") || self.env.var_is_set(&self.config.env_signals.debug)
    }

    /// The developer environment signal.
    pub fn developer_mode_requested(&self) -> bool {
        self.env.var_is_set(&self.config.env_signals.developer)
    }

    /// Developer mode together with the skip-or-later-bottles signal.
    pub fn skip_or_later_bottles_requested(&self) -> bool {
        self.developer_mode_requested()
            && self
                .env
                .var_is_set(&self.config.env_signals.skip_or_later_bottles)
    }

    /// `--no-sandbox`, or the no-sandbox environment signal.
    pub fn no_sandbox_requested(&self) -> bool {
        self.contains("--no-sandbox") || self.env.var_is_set(&self.config.env_signals.no_sandbox)
    }

    /// `--build-bottle`.
    pub fn build_bottle_requested(&self) -> bool {
        self.contains("--build-bottle")
    }

    /// The `s` switch or `--build-from-source`.
    pub fn build_from_source_requested(&self) -> bool {
        self.switch_present("s") || self.contains("--build-from-source")
    }

    /// `--force-bottle`.
    pub fn force_bottle_requested(&self) -> bool {
        self.contains("--force-bottle")
    }

    /// Symbolic form of `--bottle-arch=`.
    pub fn bottle_architecture(&self) -> Option<BottleArch> {
        self.value("bottle-arch").map(BottleArch::from)
    }

    /// Value of `--cc=`.
    pub fn cc_override(&self) -> Option<&str> {
        self.value("cc")
    }

    /// Value of `--env=`.
    pub fn env_override(&self) -> Option<&str> {
        self.value("env")
    }

    /// Whether `target` should be built from source in this run.
    ///
    /// `false` without consulting `formulary` unless a source build or a
    /// bottle build was requested. Otherwise `true` iff one of
    /// [`formulae`](Self::formulae) has the same [`Formula::full_name`].
    ///
    /// # Errors
    ///
    /// Returns the first lookup error from [`formulae`](Self::formulae).
    pub fn build_formula_from_source<F, T>(
        &self,
        formulary: &F,
        target: &T,
    ) -> std::result::Result<bool, F::Error>
    where
        F: Formulary,
        T: Formula + ?Sized,
    {
        if !self.build_from_source_requested() && !self.build_bottle_requested() {
            return Ok(false);
        }
        let formulae = self.formulae(formulary)?;
        Ok(formulae
            .iter()
            .any(|formula| formula.full_name() == target.full_name()))
    }

    /// `Head` for `--HEAD`, else `Devel` for `--devel`, else `default`.
    pub fn spec_selector(&self, default: Spec) -> Spec {
        if self.contains("--HEAD") {
            Spec::Head
        } else if self.contains("--devel") {
            Spec::Devel
        } else {
            default
        }
    }

    /// [`spec_selector`](Self::spec_selector) with [`Spec::Stable`] as default.
    pub fn spec(&self) -> Spec {
        self.spec_selector(Spec::Stable)
    }
}
