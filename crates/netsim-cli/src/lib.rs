//! # netsim-cli - Network Simulator Command-Line Interface
//!
//! Stands in for the interactive canvas: a scenario file supplies the
//! switches, node placements, and path queries; the topology engine does
//! the rest.
//!
//! ## Subcommands
//!
//! - `topology` - Build and print entities and connections
//! - `path` - Shortest path between two node numbers
//! - `run` - Every query listed in the scenario
//!
//! ## Crate Policy
//!
//! - Argument parsing and rendering live here; graph logic lives in
//!   `netsim-topology`.
//! - Reported topology outcomes print a warning and exit with code 2.

pub mod config;
pub mod output;
pub mod path;
pub mod run;
pub mod scenario;
pub mod topology;

/// Exit code for a reported, recoverable topology outcome.
pub const EXIT_WARNING: u8 = 2;
