use std::cell::Cell;
use std::collections::HashMap;

use brew_argv_core::{
    ArgumentView, Formula, Formulary, Spec, StaticEnvironment, SystemEnvironment, ViewConfig,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
struct FakeFormula {
    name: String,
    full_name: String,
    spec: Spec,
    via: &'static str,
}

impl Formula for FakeFormula {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }
}

#[derive(Debug, PartialEq, Eq)]
struct LookupMiss(String);

/// Maps references to `(name, full_name)` and counts calls.
#[derive(Default)]
struct FakeFormulary {
    known: HashMap<String, (String, String)>,
    calls: Cell<usize>,
}

impl FakeFormulary {
    fn with(mut self, reference: &str, name: &str, full_name: &str) -> Self {
        self.known
            .insert(reference.to_string(), (name.to_string(), full_name.to_string()));
        self
    }

    fn lookup(&self, reference: &str, spec: Spec, via: &'static str) -> Result<FakeFormula, LookupMiss> {
        self.calls.set(self.calls.get() + 1);
        self.known
            .get(reference)
            .map(|(name, full_name)| FakeFormula {
                name: name.clone(),
                full_name: full_name.clone(),
                spec,
                via,
            })
            .ok_or_else(|| LookupMiss(reference.to_string()))
    }
}

impl Formulary for FakeFormulary {
    type Formula = FakeFormula;
    type Error = LookupMiss;

    fn factory(&self, reference: &str, spec: Spec) -> Result<FakeFormula, LookupMiss> {
        self.lookup(reference, spec, "factory")
    }

    fn find_with_priority(&self, name: &str, spec: Spec) -> Result<FakeFormula, LookupMiss> {
        self.lookup(name, spec, "priority")
    }
}

fn view(args: &[&str]) -> ArgumentView<StaticEnvironment> {
    ArgumentView::new(args.iter().copied(), StaticEnvironment::new())
}

fn view_with_env(args: &[&str], env: StaticEnvironment) -> ArgumentView<StaticEnvironment> {
    ArgumentView::new(args.iter().copied(), env)
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn flags_only_keeps_double_dash_tokens_in_order() {
    let v = view(&["--b", "x", "-s", "--a=1", "--"]);
    assert_eq!(v.flags_only(), vec!["--b", "--a=1", "--"]);
    assert!(view(&["x", "-s"]).flags_only().is_empty());
}

#[test]
fn named_arguments_drop_every_option() {
    let v = view(&["install", "-v", "--HEAD", "wget", "-x-y"]);
    assert_eq!(v.named_arguments(), vec!["install", "wget"]);
}

#[test]
fn switch_rules() {
    let v = view(&["foo", "-ns", "-i", "--bar"]);
    assert!(v.switch_present("n"));
    assert!(v.switch_present("s"));
    assert!(v.switch_present("i"));
    assert!(!v.switch_present("a"));
    assert!(!v.switch_present("ns"));
}

#[test]
fn flag_present_matches_derived_switch() {
    assert!(view(&["-d"]).flag_present("--debug"));
    assert!(view(&["-vd"]).flag_present("--debug"));
    assert!(view(&["--debug"]).flag_present("--debug"));
    assert!(!view(&["--verbose"]).flag_present("--debug"));
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

#[test]
fn value_first_match_wins() {
    assert_eq!(view(&["--env=std"]).value("env"), Some("std"));
    assert_eq!(view(&["--env=std", "--env=other"]).value("env"), Some("std"));
    assert_eq!(view(&[]).value("env"), None);
}

#[test]
fn overrides_and_bottle_arch() {
    let v = view(&["--cc=clang", "--env=super", "--bottle-arch=core2"]);
    assert_eq!(v.cc_override(), Some("clang"));
    assert_eq!(v.env_override(), Some("super"));
    assert_eq!(v.bottle_architecture().map(|a| a.to_string()), Some("core2".into()));
    assert!(view(&["--bottle-arch"]).bottle_architecture().is_none());
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn downcased_unique_named_preserves_existing_paths() {
    let env = StaticEnvironment::new().with_path("./Bar");
    let v = view_with_env(&["Foo", "Foo", "./Bar"], env);
    assert_eq!(v.downcased_unique_named(), vec!["foo", "./Bar"]);
}

#[test]
fn downcased_unique_named_preserves_archives_and_slashes() {
    let v = view(&["Wget-1.0.Mojave.bottle.tar.gz", "User/Repo/Foo", "FOO", "foo"]);
    assert_eq!(
        v.downcased_unique_named(),
        vec!["Wget-1.0.Mojave.bottle.tar.gz", "User/Repo/Foo", "foo"]
    );
}

#[test]
fn downcased_unique_named_checks_real_filesystem() {
    // Integration tests run from the package root, where the manifest exists.
    let v = ArgumentView::new(["Cargo.toml", "Wget", "NoSuchFile.rb"], SystemEnvironment);
    assert_eq!(
        v.downcased_unique_named(),
        vec!["Cargo.toml", "wget", "nosuchfile.rb"]
    );
}

#[test]
fn casks_match_default_pattern() {
    let v = view(&["Homebrew/Cask/Firefox", "wget", "homebrew/cask-fonts/font-fira"]);
    // The slash keeps the original case, and the pattern is case-insensitive.
    assert_eq!(
        v.casks(),
        vec!["Homebrew/Cask/Firefox", "homebrew/cask-fonts/font-fira"]
    );
}

#[test]
fn custom_config_changes_cask_pattern_and_suffixes() {
    let config = ViewConfig {
        cask_pattern: r"^cask:".to_string(),
        preserved_suffixes: vec![".ZIP".to_string()],
        ..ViewConfig::default()
    };
    let v = ArgumentView::with_config(
        ["cask:Firefox", "Archive.ZIP", "Foo.tar.gz"],
        StaticEnvironment::new(),
        config,
    )
    .unwrap();
    assert_eq!(
        v.downcased_unique_named(),
        vec!["cask:firefox", "Archive.ZIP", "foo.tar.gz"]
    );
    assert_eq!(v.casks(), vec!["cask:firefox"]);
}

// ---------------------------------------------------------------------------
// Environment signals
// ---------------------------------------------------------------------------

#[test]
fn debug_from_flag_or_env() {
    assert!(view(&["--debug"]).debug_requested());
    let env = StaticEnvironment::new().with_var("HOMEBREW_DEBUG");
    assert!(view_with_env(&[], env).debug_requested());
    assert!(!view(&["install"]).debug_requested());
}

#[test]
fn debug_env_set_to_empty_string_counts() {
    // SAFETY: this is the only test in this binary touching this variable.
    unsafe { std::env::set_var("BREW_ARGV_TEST_EMPTY_DEBUG", "") };
    let mut config = ViewConfig::default();
    config.env_signals.debug = "BREW_ARGV_TEST_EMPTY_DEBUG".to_string();
    let v = ArgumentView::with_config(Vec::<String>::new(), SystemEnvironment, config).unwrap();
    assert!(v.debug_requested());
}

#[test]
fn skip_or_later_bottles_needs_developer() {
    let only_skip = StaticEnvironment::new().with_var("HOMEBREW_SKIP_OR_LATER_BOTTLES");
    assert!(!view_with_env(&[], only_skip).skip_or_later_bottles_requested());

    let both = StaticEnvironment::new()
        .with_var("HOMEBREW_SKIP_OR_LATER_BOTTLES")
        .with_var("HOMEBREW_DEVELOPER");
    let v = view_with_env(&[], both);
    assert!(v.developer_mode_requested());
    assert!(v.skip_or_later_bottles_requested());
}

#[test]
fn no_sandbox_from_token_or_env() {
    assert!(view(&["--no-sandbox"]).no_sandbox_requested());
    let env = StaticEnvironment::new().with_var("HOMEBREW_NO_SANDBOX");
    assert!(view_with_env(&[], env).no_sandbox_requested());
    assert!(!view(&["-n"]).no_sandbox_requested());
}

#[test]
fn bottle_and_source_toggles() {
    assert!(view(&["-s"]).build_from_source_requested());
    assert!(view(&["-vs"]).build_from_source_requested());
    assert!(view(&["--build-from-source"]).build_from_source_requested());
    assert!(!view(&["--source"]).build_from_source_requested());
    assert!(view(&["--build-bottle"]).build_bottle_requested());
    assert!(view(&["--force-bottle"]).force_bottle_requested());
    assert!(!view(&["--force"]).force_bottle_requested());
}

#[test]
fn spec_head_beats_devel() {
    assert_eq!(view(&["--HEAD", "--devel"]).spec(), Spec::Head);
    assert_eq!(view(&["--devel"]).spec(), Spec::Devel);
    assert_eq!(view(&[]).spec(), Spec::Stable);
}

// ---------------------------------------------------------------------------
// Formula resolution
// ---------------------------------------------------------------------------

#[test]
fn formulae_choose_strategy_and_dedupe_by_canonical_name() {
    let formulary = FakeFormulary::default()
        .with("install", "install", "install")
        .with("wget", "wget", "wget")
        .with("homebrew/core/wget", "wget", "wget")
        .with("user/tools/jq", "jq", "user/tools/jq");
    let v = view(&["install", "Wget", "homebrew/core/wget", "user/tools/jq", "homebrew/cask/firefox"]);

    let formulae = v.formulae(&formulary).unwrap();
    let names: Vec<_> = formulae.iter().map(|f| (f.name.as_str(), f.via)).collect();
    assert_eq!(
        names,
        vec![("install", "priority"), ("wget", "priority"), ("jq", "factory")]
    );
    // The cask is never handed to the formulary.
    assert_eq!(formulary.calls.get(), 4);
}

#[test]
fn formulae_pass_selected_spec() {
    let formulary = FakeFormulary::default().with("wget", "wget", "wget");
    let formulae = view(&["wget", "--HEAD"]).formulae(&formulary).unwrap();
    assert_eq!(formulae[0].spec, Spec::Head);
}

#[test]
fn formulae_use_factory_for_paths_on_disk() {
    let formulary = FakeFormulary::default().with("foo.rb", "foo", "foo");
    let env = StaticEnvironment::new().with_path("foo.rb");
    let formulae = view_with_env(&["foo.rb"], env).formulae(&formulary).unwrap();
    assert_eq!(formulae[0].via, "factory");
}

#[test]
fn formulae_propagate_lookup_errors() {
    let formulary = FakeFormulary::default().with("wget", "wget", "wget");
    let err = view(&["wget", "nope"]).formulae(&formulary).unwrap_err();
    assert_eq!(err, LookupMiss("nope".to_string()));
}

#[test]
fn build_formula_from_source_requires_a_request() {
    let formulary = FakeFormulary::default().with("wget", "wget", "wget");
    let target = FakeFormula {
        name: "wget".into(),
        full_name: "wget".into(),
        spec: Spec::Stable,
        via: "test",
    };

    assert!(!view(&["wget"]).build_formula_from_source(&formulary, &target).unwrap());
    assert_eq!(formulary.calls.get(), 0);

    assert!(view(&["-s", "wget"]).build_formula_from_source(&formulary, &target).unwrap());
    assert!(view(&["--build-bottle", "wget"])
        .build_formula_from_source(&formulary, &target)
        .unwrap());
}

#[test]
fn build_formula_from_source_compares_full_names() {
    let formulary = FakeFormulary::default()
        .with("jq", "jq", "jq")
        .with("user/tools/jq", "jq", "user/tools/jq");
    let tap_jq = FakeFormula {
        name: "jq".into(),
        full_name: "user/tools/jq".into(),
        spec: Spec::Stable,
        via: "test",
    };

    let v = view(&["--build-from-source", "jq"]);
    assert!(!v.build_formula_from_source(&formulary, &tap_jq).unwrap());

    let v = view(&["--build-from-source", "user/tools/jq"]);
    assert!(v.build_formula_from_source(&formulary, &tap_jq).unwrap());
}

#[test]
fn build_formula_from_source_propagates_errors() {
    let formulary = FakeFormulary::default();
    let target = FakeFormula {
        name: "wget".into(),
        full_name: "wget".into(),
        spec: Spec::Stable,
        via: "test",
    };
    let result = view(&["-s", "missing"]).build_formula_from_source(&formulary, &target);
    assert_eq!(result, Err(LookupMiss("missing".to_string())));
}
