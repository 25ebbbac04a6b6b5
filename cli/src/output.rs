//! Output formatting for argument reports.

use crate::report::ArgvReport;

/// Supported output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Formats a report in the requested output format.
pub fn format_report(report: &ArgvReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(report_to_table(report)),
    }
}

fn yes_no(on: bool) -> &'static str {
    if on { "yes" } else { "no" }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(" ")
    }
}

fn report_to_table(report: &ArgvReport) -> String {
    let mut rows: Vec<(&str, String)> = vec![
        ("Flags", join_or_dash(&report.flags)),
        ("Named", join_or_dash(&report.named)),
        ("Normalized", join_or_dash(&report.downcased_unique_named)),
        ("Casks", join_or_dash(&report.casks)),
        ("Spec", report.spec.to_string()),
    ];

    let requests = &report.requests;
    for (label, on) in [
        ("Debug", requests.debug),
        ("Developer", requests.developer_mode),
        ("Skip/later bottles", requests.skip_or_later_bottles),
        ("No sandbox", requests.no_sandbox),
        ("Build bottle", requests.build_bottle),
        ("Build from source", requests.build_from_source),
        ("Force bottle", requests.force_bottle),
    ] {
        rows.push((label, yes_no(on).to_string()));
    }

    let values = &report.values;
    for (label, value) in [
        ("cc", &values.cc),
        ("env", &values.env),
        ("bottle-arch", &values.bottle_arch),
    ] {
        rows.push((label, value.clone().unwrap_or_else(|| "-".to_string())));
    }

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(4);
    let mut out = String::new();
    for (label, value) in &rows {
        out.push_str(&format!("{label:<width$}  {value}\n"));
    }

    if let Some(ref formulae) = report.formulae {
        out.push_str("\nFormulae:\n");
        let max_name = formulae
            .iter()
            .map(|f| f.full_name.len())
            .max()
            .unwrap_or(4);
        for formula in formulae {
            out.push_str(&format!(
                "  {:<width$}  {} ({})\n",
                formula.full_name,
                formula.version,
                formula.spec,
                width = max_name
            ));
        }
    }

    if let Some(ref target) = report.target {
        out.push_str(&format!(
            "\nBuild {} from source: {}\n",
            target.full_name,
            yes_no(target.build_from_source)
        ));
    }

    out
}
