//! Snapshot of every query the argument view answers.

use brew_argv_core::{ArgumentView, Environment, Spec};
use brew_argv_formulary::ResolvedFormula;
use serde::Serialize;

/// Boolean request toggles.
#[derive(Debug, Clone, Serialize)]
pub struct Requests {
    pub debug: bool,
    pub developer_mode: bool,
    pub skip_or_later_bottles: bool,
    pub no_sandbox: bool,
    pub build_bottle: bool,
    pub build_from_source: bool,
    pub force_bottle: bool,
}

/// Inline `--name=value` lookups.
#[derive(Debug, Clone, Serialize)]
pub struct Values {
    pub cc: Option<String>,
    pub env: Option<String>,
    pub bottle_arch: Option<String>,
}

/// Everything derived from one argument list.
#[derive(Debug, Clone, Serialize)]
pub struct ArgvReport {
    pub args: Vec<String>,
    pub flags: Vec<String>,
    pub named: Vec<String>,
    pub downcased_unique_named: Vec<String>,
    pub casks: Vec<String>,
    pub spec: Spec,
    pub requests: Requests,
    pub values: Values,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formulae: Option<Vec<ResolvedFormula>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetReport>,
}

/// Result of the build-from-source check for `--target`.
#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub full_name: String,
    pub build_from_source: bool,
}

impl ArgvReport {
    /// Collects the formulary-independent queries from `view`.
    pub fn from_view<E: Environment>(view: &ArgumentView<E>) -> Self {
        let to_owned = |items: Vec<&str>| -> Vec<String> { items.into_iter().map(String::from).collect() };
        Self {
            args: view.args().to_vec(),
            flags: to_owned(view.flags_only()),
            named: to_owned(view.named_arguments()),
            downcased_unique_named: view.downcased_unique_named(),
            casks: view.casks(),
            spec: view.spec(),
            requests: Requests {
                debug: view.debug_requested(),
                developer_mode: view.developer_mode_requested(),
                skip_or_later_bottles: view.skip_or_later_bottles_requested(),
                no_sandbox: view.no_sandbox_requested(),
                build_bottle: view.build_bottle_requested(),
                build_from_source: view.build_from_source_requested(),
                force_bottle: view.force_bottle_requested(),
            },
            values: Values {
                cc: view.cc_override().map(String::from),
                env: view.env_override().map(String::from),
                bottle_arch: view.bottle_architecture().map(|arch| arch.to_string()),
            },
            formulae: None,
            target: None,
        }
    }
}
