//! # Error Types - Structured Error Hierarchy
//!
//! Defines the error types used throughout the simulator. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Topology outcomes (`TopologyError`) are recoverable and reported to the
//!   caller; the boundary adapter turns them into user-facing warnings.
//! - `InconsistentTopology` marks an internal invariant violation and is
//!   logged at error level where it is detected.
//! - Configuration errors name the offending field and value.

use thiserror::Error;

use crate::identity::EntityId;

/// Top-level error type for the simulator.
#[derive(Error, Debug)]
pub enum NetsimError {
    /// A topology operation reported a failure outcome.
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// Configuration was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a topology build, path query, or edge resolution that did
/// not produce a result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    /// A build was requested with no node or no switch present.
    #[error("insufficient components to connect: {nodes} node(s), {switches} switch(es)")]
    InsufficientComponents {
        /// Number of nodes present.
        nodes: usize,
        /// Number of switches present.
        switches: usize,
    },

    /// A node ordinal outside `1..=node_count` was requested.
    #[error("invalid node number {ordinal}: expected 1..={node_count}")]
    InvalidOrdinal {
        /// The requested 1-based ordinal.
        ordinal: usize,
        /// Number of nodes present.
        node_count: usize,
    },

    /// The graph has no path between the two entities.
    #[error("no path exists from {start} to {end}")]
    NoPathExists {
        /// Search origin.
        start: EntityId,
        /// Search target.
        end: EntityId,
    },

    /// A consecutive pair on a computed path has no matching connection
    /// record. Indicates the graph and connection list diverged.
    #[error("inconsistent topology: no connection between {from} and {to}")]
    InconsistentTopology {
        /// First endpoint of the unmatched step.
        from: EntityId,
        /// Second endpoint of the unmatched step.
        to: EntityId,
    },
}

/// Invalid configuration value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The distance-to-cost conversion factor must be finite and non-negative.
    #[error("conversion_factor must be finite and non-negative, got {0}")]
    ConversionFactor(f64),

    /// A switch layout dimension must be finite and positive.
    #[error("switch_layout.{field} must be finite and positive, got {value}")]
    Layout {
        /// Field name within the layout section.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A switch layout origin coordinate must be finite.
    #[error("switch_layout.{field} must be finite, got {value}")]
    Origin {
        /// Field name within the layout section.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}
