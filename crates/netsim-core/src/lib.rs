//! # netsim-core - Foundational Types for the Network Simulator
//!
//! Leaf crate of the workspace. Defines the identifiers, geometry, and
//! configuration shared by the topology engine and the CLI, plus the
//! error hierarchy every reported outcome flows through.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** `EntityId` and `ConnectionId` are distinct
//!    types; graph keys are never rendering handles or bare integers.
//!
//! 2. **Explicit outcomes.** Insufficient components, invalid ordinals,
//!    unreachable targets, and inconsistent topologies are variants of
//!    [`TopologyError`], returned to the caller and never swallowed.
//!
//! 3. **Validated configuration.** [`TopologyConfig::validate`] guarantees a
//!    finite, non-negative conversion factor so built edge weights are
//!    never negative.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `netsim-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod geometry;
pub mod identity;

pub use config::{SwitchLayout, TopologyConfig, DEFAULT_CONVERSION_FACTOR};
pub use error::{ConfigError, NetsimError, TopologyError};
pub use geometry::Position;
pub use identity::{ConnectionId, EntityId, EntityKind};
