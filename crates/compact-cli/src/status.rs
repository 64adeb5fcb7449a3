//! # Status Subcommand
//!
//! Renders a licensee status report from a provider payload file: identity
//! display strings, best-record summaries, and the derived purchase and
//! adverse-event flags.
//!
//! The reference date defaults to the current UTC date; `--as-of` pins it
//! for reproducible output.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::Args;

use compact_provider::{parse_provider_document, CompactConfig, Licensee, LicenseRecord};

/// Arguments for the status subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Path to the provider payload JSON document.
    #[arg(long)]
    pub input: PathBuf,

    /// Optional purchase-rule configuration YAML.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) for time-dependent checks.
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,
}

/// Load the payload and print the report.
pub fn run(args: StatusArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let licensee = parse_provider_document(&json)?;

    let config = match &args.config {
        Some(path) => {
            let yaml = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            CompactConfig::from_yaml_str(&yaml)?
        }
        None => CompactConfig::default(),
    };

    let now = args.as_of.unwrap_or_else(|| Utc::now().date_naive());
    tracing::debug!(%now, input = %args.input.display(), "rendering status report");

    print!("{}", render_report(&licensee, now, &config));
    Ok(())
}

/// Render the report as plain text.
fn render_report(licensee: &Licensee, now: NaiveDate, config: &CompactConfig) -> String {
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    line(format!("Licensee:          {}", or_dash(licensee.name_display())));
    line(format!("Home jurisdiction: {}", or_dash(licensee.home_jurisdiction_display())));
    line(format!("Status:            {}", or_dash(licensee.status_display())));
    line(format!("License states:    {}", or_dash(licensee.license_states_display())));
    line(format!("Privilege states:  {}", or_dash(licensee.privilege_states_all_display())));
    line(format!("Last updated:      {}", or_dash(licensee.last_updated_display())));
    line(String::new());

    line(format!("Best license:      {}", record_summary(&licensee.best_license())));
    line(format!("Best privilege:    {}", record_summary(&licensee.best_privilege())));
    line(String::new());

    line(format!("Encumbered:          {}", yes_no(licensee.is_encumbered(now))));
    line(format!(
        "Under investigation: {}",
        yes_no(licensee.is_under_investigation(now))
    ));
    let states = licensee.under_investigation_states(now);
    if !states.is_empty() {
        let joined = states
            .iter()
            .map(|j| j.display_abbrev())
            .collect::<Vec<_>>()
            .join(", ");
        line(format!("Investigating:       {joined}"));
    }
    line(format!(
        "Lift within wait:    {}",
        yes_no(licensee.has_encumbrance_lifted_within_wait_period(
            now,
            config.encumbrance_wait_period_days
        ))
    ));
    line(format!(
        "Can purchase:        {}",
        yes_no(licensee.can_purchase_privileges(now))
    ));

    out
}

fn record_summary(record: &LicenseRecord) -> String {
    match (&record.license_number, &record.issue_jurisdiction) {
        (Some(number), Some(jurisdiction)) => {
            let status = record
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            format!("{number} ({jurisdiction}, {status})")
        }
        _ => "-".to_string(),
    }
}

fn or_dash(s: String) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
