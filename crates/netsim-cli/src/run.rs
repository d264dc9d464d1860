//! # Run Subcommand
//!
//! Builds the scenario once and answers every listed query. A failing
//! query is reported and the rest still run.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use netsim_core::{TopologyConfig, TopologyError};
use netsim_topology::{PathReport, TopologyService};

use crate::output::{render_queries, CommandOutput, OutputFormat};
use crate::scenario::{PathQuery, Scenario};

/// Arguments for the `netsim run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Scenario file (YAML, or JSON with a `.json` extension).
    #[arg(long)]
    pub scenario: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Outcome of each scenario query, in scenario order.
pub fn answer_queries(
    service: &TopologyService,
    queries: &[PathQuery],
) -> Vec<(PathQuery, Result<PathReport, TopologyError>)> {
    queries
        .iter()
        .map(|&q| (q, service.find_path(q.from, q.to)))
        .collect()
}

/// Build the scenario and render every query outcome. Failed queries are
/// rendered in place and also collected as warnings.
pub fn execute_run(args: &RunArgs, config: &TopologyConfig) -> Result<CommandOutput> {
    let scenario = Scenario::load(&args.scenario)?;
    let mut service = scenario.populate(config)?;

    if let Err(e) = service.connect() {
        return Ok(CommandOutput::warning(e));
    }

    let outcomes = answer_queries(&service, &scenario.queries);
    let warnings: Vec<String> = outcomes
        .iter()
        .filter_map(|(_, outcome)| outcome.as_ref().err().map(ToString::to_string))
        .collect();

    tracing::info!(
        queries = outcomes.len(),
        failed = warnings.len(),
        "scenario complete"
    );
    Ok(CommandOutput {
        stdout: render_queries(&service, &outcomes, args.format)?,
        warnings,
    })
}

/// Execute the run subcommand.
pub fn run_scenario(args: &RunArgs, config: &TopologyConfig) -> Result<u8> {
    Ok(execute_run(args, config)?.emit())
}
