use std::path::PathBuf;

use brew_argv_core::{
    ArgumentView, Environment, ResolutionStrategy, SystemEnvironment, ViewConfig,
};
use brew_argv_formulary::LocalFormulary;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

mod output;
mod report;

use output::{OutputFormat, format_report};
use report::{ArgvReport, TargetReport};

/// Environment variable holding the log filter (`debug`, `brew_argv_core=debug`, ...).
const LOG_ENV: &str = "BREW_ARGV_LOG";

#[derive(Debug, Parser)]
#[command(name = "brew-argv")]
#[command(about = "Show how a brew-style argument list is interpreted")]
struct Cli {
    /// Directory of formula definition files. Repeatable; the first source
    /// that loads wins, directories before bundles.
    #[arg(long = "formulary")]
    formulary_dirs: Vec<PathBuf>,
    /// JSON formula bundle. Repeatable.
    #[arg(long = "bundle")]
    bundles: Vec<PathBuf>,
    /// YAML view configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Formula to test for a build from source (name or user/repo/name).
    #[arg(long)]
    target: Option<String>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Arguments to inspect, after `--`.
    #[arg(last = true)]
    args: Vec<String>,
}

impl Cli {
    fn has_formulary(&self) -> bool {
        !self.formulary_dirs.is_empty() || !self.bundles.is_empty()
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    if cli.target.is_some() && !cli.has_formulary() {
        return Err("--target needs --formulary or --bundle".to_string());
    }

    let config = match &cli.config {
        Some(path) => ViewConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => ViewConfig::default(),
    };

    let view = ArgumentView::with_config(cli.args.iter().cloned(), SystemEnvironment, config)
        .map_err(|err| err.to_string())?;
    debug!(args = ?view.args(), "Inspecting arguments");

    let mut report = ArgvReport::from_view(&view);

    if cli.has_formulary() {
        let formulary = load_formulary(&cli)?;
        let formulae = view.formulae(&formulary).map_err(|err| err.to_string())?;
        report.formulae = Some(formulae);

        if let Some(ref name) = cli.target {
            report.target = Some(check_target(&view, &formulary, name)?);
        }
    }

    let rendered = format_report(&report, cli.format)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn load_formulary(cli: &Cli) -> Result<LocalFormulary, String> {
    let mut builder = LocalFormulary::builder();
    for dir in &cli.formulary_dirs {
        builder = builder.from_dir(dir);
    }
    for bundle in &cli.bundles {
        builder = builder.from_bundle(bundle);
    }
    builder
        .build()
        .map_err(|err| format!("Failed to load formulae: {err}"))
}

fn check_target<E: Environment>(
    view: &ArgumentView<E>,
    formulary: &LocalFormulary,
    name: &str,
) -> Result<TargetReport, String> {
    let strategy = ResolutionStrategy::for_name(name, view.environment());
    let target = strategy
        .resolve(formulary, name, view.spec())
        .map_err(|err| format!("Failed to resolve target '{name}': {err}"))?;
    let build_from_source = view
        .build_formula_from_source(formulary, &target)
        .map_err(|err| err.to_string())?;
    Ok(TargetReport {
        full_name: target.full_name,
        build_from_source,
    })
}
