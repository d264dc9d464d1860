//! # Path Subcommand
//!
//! Shortest path between two node numbers, with the connections to
//! highlight.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use netsim_core::TopologyConfig;

use crate::output::{render_path, CommandOutput, OutputFormat};
use crate::scenario::Scenario;

/// Arguments for the `netsim path` subcommand.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Scenario file (YAML, or JSON with a `.json` extension).
    #[arg(long)]
    pub scenario: PathBuf,

    /// Start node number (1-based).
    #[arg(long)]
    pub from: usize,

    /// End node number (1-based).
    #[arg(long)]
    pub to: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Build the scenario and render the requested path.
pub fn execute_path(args: &PathArgs, config: &TopologyConfig) -> Result<CommandOutput> {
    let scenario = Scenario::load(&args.scenario)?;
    let mut service = scenario.populate(config)?;

    let outcome = service
        .connect()
        .and_then(|_| service.find_path(args.from, args.to));

    match outcome {
        Ok(report) => Ok(CommandOutput::rendered(render_path(
            &service,
            &report,
            args.format,
        )?)),
        Err(e) => Ok(CommandOutput::warning(e)),
    }
}

/// Execute the path subcommand.
pub fn run_path(args: &PathArgs, config: &TopologyConfig) -> Result<u8> {
    Ok(execute_path(args, config)?.emit())
}
