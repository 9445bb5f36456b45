//! Validate command handler reporting dataset problems found while building
//! the graph.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::commands::load_graph;
use crate::output::{render_json, OutputFormat};

/// Arguments for the validate command.
#[derive(Debug, Clone, Default, Args)]
pub struct ValidateCommandArgs {
    /// Exit with an error when any issue is found.
    #[arg(long)]
    pub strict: bool,
}

/// Result of validating a dataset.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub airports: usize,
    pub routes: usize,
    pub accepted_routes: usize,
    pub issues: Vec<String>,
}

/// Handle the validate subcommand.
pub fn handle_validate_command(
    data_dir: Option<&Path>,
    format: OutputFormat,
    args: &ValidateCommandArgs,
) -> Result<()> {
    let (graph, routes) = load_graph(data_dir)?;
    let report = ValidationReport {
        airports: graph.airport_count(),
        routes,
        accepted_routes: graph.edge_count() / 2,
        issues: graph.issues().iter().map(ToString::to_string).collect(),
    };

    match format {
        OutputFormat::Json => render_json(&report).context("failed to write report")?,
        OutputFormat::Text | OutputFormat::Basic => print_report(&report),
    }

    if args.strict && !report.issues.is_empty() {
        anyhow::bail!("dataset has {} issue(s)", report.issues.len());
    }
    Ok(())
}

fn print_report(report: &ValidationReport) {
    println!("Airports: {}", report.airports);
    println!("Routes: {} ({} accepted)", report.routes, report.accepted_routes);
    if report.issues.is_empty() {
        println!("No issues found.");
        return;
    }
    println!("Issues ({}):", report.issues.len());
    for issue in &report.issues {
        println!(" - {}", issue);
    }
}
