//! # netsim CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use netsim_cli::config::load_config;
use netsim_cli::path::{run_path, PathArgs};
use netsim_cli::run::{run_scenario, RunArgs};
use netsim_cli::topology::{run_topology, TopologyArgs};

/// Network simulator.
///
/// Chains switches in creation order, attaches each node to its nearest
/// switch, and finds minimum-cost paths between nodes.
#[derive(Parser, Debug)]
#[command(name = "netsim", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML topology configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the topology and print entities and connections.
    Topology(TopologyArgs),

    /// Shortest path between two node numbers.
    Path(PathArgs),

    /// Build once and answer every query in the scenario.
    Run(RunArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = load_config(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Topology(args) => run_topology(args, &config),
        Commands::Path(args) => run_path(args, &config),
        Commands::Run(args) => run_scenario(args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
