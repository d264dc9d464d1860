//! # netsim-topology - Topology Engine
//!
//! Turns the spatial placement of nodes and switches into a weighted
//! undirected graph and answers shortest-path queries over it:
//!
//! - **Registry** (`registry.rs`): assigns entity ids, node ordinals, and
//!   switch layout slots.
//!
//! - **Graph** (`graph.rs`): symmetric adjacency map and connection
//!   records.
//!
//! - **Builder** (`builder.rs`): chains switches in creation order with
//!   unit-cost trunks, then attaches each node to its nearest switch with
//!   cost `distance × conversion_factor`. Every build is a full rebuild.
//!
//! - **Path** (`path.rs`): Dijkstra with a binary heap, stale-entry
//!   skipping, and early exit on the target.
//!
//! - **Resolver** (`resolver.rs`): maps a path back to the connection
//!   records to highlight.
//!
//! - **Service** (`service.rs`): stateful facade built from validated
//!   configuration. Only entity creation and `connect` change its state; a
//!   mutex-guarded shared variant serves multi-threaded hosts.
//!
//! ## Crate Policy
//!
//! - Depends only on `netsim-core` internally.
//! - The search never mutates a graph; queries run against an immutable
//!   `Arc<Topology>` snapshot.

pub mod builder;
pub mod graph;
pub mod path;
pub mod registry;
pub mod resolver;
pub mod service;

pub use builder::TopologyBuilder;
pub use graph::{Connection, ConnectionKind, Graph, Topology};
pub use path::{shortest_path, ShortestPath};
pub use registry::{Entity, EntityRegistry};
pub use resolver::resolve_edges;
pub use service::{PathReport, SharedTopologyService, TopologyService};
