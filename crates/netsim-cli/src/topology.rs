//! # Topology Subcommand
//!
//! Builds the scenario's topology and prints its entities and connections.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use netsim_core::TopologyConfig;

use crate::output::{render_topology, CommandOutput, OutputFormat};
use crate::scenario::Scenario;

/// Arguments for the `netsim topology` subcommand.
#[derive(Args, Debug)]
pub struct TopologyArgs {
    /// Scenario file (YAML, or JSON with a `.json` extension).
    #[arg(long)]
    pub scenario: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Build the scenario and render its entities and connections.
pub fn execute_topology(args: &TopologyArgs, config: &TopologyConfig) -> Result<CommandOutput> {
    let scenario = Scenario::load(&args.scenario)?;
    let mut service = scenario.populate(config)?;

    match service.connect() {
        Ok(topology) => Ok(CommandOutput::rendered(render_topology(
            &service,
            &topology,
            args.format,
        )?)),
        Err(e) => Ok(CommandOutput::warning(e)),
    }
}

/// Execute the topology subcommand.
pub fn run_topology(args: &TopologyArgs, config: &TopologyConfig) -> Result<u8> {
    Ok(execute_topology(args, config)?.emit())
}
