//! File-backed formula lookup for `brew-argv`.
//!
//! This crate provides a concrete [`Formulary`](brew_argv_core::Formulary)
//! that the argument view can resolve named arguments against. Formula
//! definitions are small JSON or YAML documents naming a formula, its tap,
//! and the versions it offers per spec.
//!
//! # Quick start
//!
//! ```no_run
//! use brew_argv_core::{ArgumentView, SystemEnvironment};
//! use brew_argv_formulary::LocalFormulary;
//!
//! let formulary = LocalFormulary::builder()
//!     .from_dir("formulae/")
//!     .from_bundle("formulae.json")
//!     .build()
//!     .unwrap();
//!
//! let view = ArgumentView::new(["install", "wget"], SystemEnvironment);
//! for formula in view.formulae(&formulary).unwrap() {
//!     println!("{} {}", formula.full_name, formula.version);
//! }
//! ```
//!
//! # Lookup rules
//!
//! - [`factory`](brew_argv_core::Formulary::factory) loads an existing
//!   definition file, or looks up an exact `user/repo/name` reference.
//! - [`find_with_priority`](brew_argv_core::Formulary::find_with_priority)
//!   takes a bare name; the `homebrew/core` tap wins, otherwise the name must
//!   be unique across taps.

mod definition;
mod error;
mod loader;

pub use definition::{CORE_TAP, FormulaBundle, FormulaDefinition, ResolvedFormula};
pub use error::{FormularyError, Result};
pub use loader::{FormularyBuilder, FormularySource, LocalFormulary, load_definition};
