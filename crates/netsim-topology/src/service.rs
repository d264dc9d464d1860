//! # Topology Service
//!
//! Owns the registry, the builder, and the latest built topology. State
//! changes only through entity creation and [`TopologyService::connect`].
//! Queries read an immutable `Arc<Topology>` snapshot.
//!
//! [`SharedTopologyService`] wraps the service in a `parking_lot::Mutex`
//! for multi-threaded hosts. A path query captures the snapshot under the
//! lock and searches outside it, so a concurrent rebuild never changes the
//! graph an in-flight query is reading.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use netsim_core::{ConfigError, EntityId, Position, TopologyConfig, TopologyError};

use crate::builder::TopologyBuilder;
use crate::graph::{Connection, Topology};
use crate::path::shortest_path;
use crate::registry::{Entity, EntityRegistry};
use crate::resolver::resolve_edges;

/// Result of a node-to-node path query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathReport {
    /// Entities from start to end inclusive.
    pub path: Vec<EntityId>,
    /// Total path weight.
    pub distance: f64,
    /// Connections to highlight, in path order. Replaces any earlier
    /// highlight set.
    pub highlighted: Vec<Connection>,
}

#[derive(Debug, Default)]
pub struct TopologyService {
    registry: EntityRegistry,
    builder: TopologyBuilder,
    topology: Arc<Topology>,
    built: bool,
}

impl TopologyService {
    /// Create a service, rejecting configuration that fails
    /// [`TopologyConfig::validate`].
    pub fn new(config: &TopologyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            registry: EntityRegistry::new(config.switch_layout),
            builder: TopologyBuilder::new(config.conversion_factor)?,
            topology: Arc::new(Topology::default()),
            built: false,
        })
    }

    pub fn create_node(&mut self, x: f64, y: f64) -> EntityId {
        self.registry.create_node(Position::new(x, y)).id
    }

    pub fn create_switch(&mut self) -> EntityId {
        self.registry.create_switch().id
    }

    /// Rebuild the topology from every registered entity.
    ///
    /// On failure the previous snapshot is kept.
    pub fn connect(&mut self) -> Result<Arc<Topology>, TopologyError> {
        let topology = self
            .builder
            .build(self.registry.switches(), self.registry.nodes())?;
        self.topology = Arc::new(topology);
        self.built = true;
        Ok(Arc::clone(&self.topology))
    }

    /// Shortest path between the nodes with 1-based ordinals `from` and `to`.
    pub fn find_path(&self, from: usize, to: usize) -> Result<PathReport, TopologyError> {
        let (start, end) = self.resolve_ordinals(from, to)?;
        run_query(&self.topology, start, end)
    }

    /// Latest built topology; empty until the first successful `connect`.
    pub fn snapshot(&self) -> Arc<Topology> {
        Arc::clone(&self.topology)
    }

    /// Whether `connect` has succeeded at least once.
    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.registry.get(id)
    }

    fn resolve_ordinals(&self, from: usize, to: usize) -> Result<(EntityId, EntityId), TopologyError> {
        let lookup = |ordinal: usize| {
            self.registry.node_by_ordinal(ordinal).map(|e| e.id).map_err(|err| {
                tracing::warn!(ordinal, node_count = self.registry.node_count(), "invalid node number");
                err
            })
        };
        Ok((lookup(from)?, lookup(to)?))
    }
}

fn run_query(topology: &Topology, start: EntityId, end: EntityId) -> Result<PathReport, TopologyError> {
    let path = shortest_path(&topology.graph, start, end)?;
    let highlighted = resolve_edges(&path.entities, &topology.connections)?;
    tracing::info!(
        %start,
        %end,
        hops = highlighted.len(),
        distance = path.distance,
        "path query complete"
    );
    Ok(PathReport {
        path: path.entities,
        distance: path.distance,
        highlighted,
    })
}

/// Cloneable, thread-safe handle to a [`TopologyService`].
#[derive(Debug, Clone, Default)]
pub struct SharedTopologyService {
    inner: Arc<Mutex<TopologyService>>,
}

impl SharedTopologyService {
    pub fn new(config: &TopologyConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Arc::new(Mutex::new(TopologyService::new(config)?)),
        })
    }

    pub fn create_node(&self, x: f64, y: f64) -> EntityId {
        self.inner.lock().create_node(x, y)
    }

    pub fn create_switch(&self) -> EntityId {
        self.inner.lock().create_switch()
    }

    pub fn connect(&self) -> Result<Arc<Topology>, TopologyError> {
        self.inner.lock().connect()
    }

    /// Resolve ordinals and capture the snapshot under the lock; search
    /// without holding it.
    pub fn find_path(&self, from: usize, to: usize) -> Result<PathReport, TopologyError> {
        let (snapshot, start, end) = {
            let service = self.inner.lock();
            let (start, end) = service.resolve_ordinals(from, to)?;
            (service.snapshot(), start, end)
        };
        run_query(&snapshot, start, end)
    }

    pub fn snapshot(&self) -> Arc<Topology> {
        self.inner.lock().snapshot()
    }
}
