//! Read-only queries over a package manager's command-line arguments.
//!
//! This crate wraps the raw argument list of a `brew`-style command in an
//! [`ArgumentView`] and answers the questions install-like commands ask:
//!
//! - which long flags and short switches are present
//!   ([`flags_only`](ArgumentView::flags_only),
//!   [`switch_present`](ArgumentView::switch_present),
//!   [`flag_present`](ArgumentView::flag_present));
//! - which arguments are names, and how they normalize
//!   ([`named_arguments`](ArgumentView::named_arguments),
//!   [`downcased_unique_named`](ArgumentView::downcased_unique_named));
//! - which names are casks and which resolve to formulae
//!   ([`casks`](ArgumentView::casks), [`formulae`](ArgumentView::formulae));
//! - inline values such as `--cc=clang`
//!   ([`value`](ArgumentView::value));
//! - request toggles that combine flags with environment signals
//!   ([`debug_requested`](ArgumentView::debug_requested) and friends).
//!
//! Formula construction lives behind the [`Formulary`] trait and environment
//! access behind the [`Environment`] trait, so callers can plug in real
//! implementations or fixed fakes.
//!
//! # Example
//!
//! ```
//! use brew_argv_core::*;
//!
//! let env = StaticEnvironment::new().with_var("HOMEBREW_DEBUG");
//! let view = ArgumentView::new(
//!     ["install", "--build-bottle", "--bottle-arch=nehalem", "homebrew/cask/firefox", "Wget"],
//!     env,
//! );
//!
//! assert!(view.debug_requested());
//! assert!(view.build_bottle_requested());
//! assert_eq!(view.bottle_architecture(), Some(BottleArch::Nehalem));
//! assert_eq!(view.casks(), vec!["homebrew/cask/firefox"]);
//! assert_eq!(view.spec(), Spec::Stable);
//! ```

mod cask;
mod config;
mod env;
mod error;
mod formula;
pub mod token;
mod types;
mod view;

pub use cask::{CaskPattern, DEFAULT_CASK_PATTERN};
pub use config::{EnvSignals, ViewConfig};
pub use env::{Environment, StaticEnvironment, SystemEnvironment};
pub use error::{ConfigError, Result};
pub use formula::{Formula, Formulary, ResolutionStrategy};
pub use types::{BottleArch, Spec, UnknownSpec};
pub use view::ArgumentView;
