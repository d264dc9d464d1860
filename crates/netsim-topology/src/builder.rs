//! # Topology Builder
//!
//! Derives the weighted graph from entity placement:
//!
//! 1. Switches are chained in creation order with unit-cost trunks.
//! 2. Each node attaches to the switch at minimal Euclidean distance with
//!    cost `distance × conversion_factor`. Ties go to the earliest switch.
//!
//! The builder holds no graph state. Each call produces a fresh
//! [`Topology`], so repeated builds over the same entities are equal and
//! never accumulate connection records.

use netsim_core::{ConfigError, ConnectionId, EntityId, TopologyError, DEFAULT_CONVERSION_FACTOR};

use crate::graph::{Connection, ConnectionKind, Graph, Topology};
use crate::registry::Entity;

/// Cost of every switch-to-switch trunk.
pub const TRUNK_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopologyBuilder {
    conversion_factor: f64,
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self {
            conversion_factor: DEFAULT_CONVERSION_FACTOR,
        }
    }
}

impl TopologyBuilder {
    /// Rejects a non-finite or negative `conversion_factor`, which would
    /// produce access weights Dijkstra cannot handle.
    pub fn new(conversion_factor: f64) -> Result<Self, ConfigError> {
        if !conversion_factor.is_finite() || conversion_factor < 0.0 {
            return Err(ConfigError::ConversionFactor(conversion_factor));
        }
        Ok(Self { conversion_factor })
    }

    /// Build the full topology over `switches` (in creation order) and
    /// `nodes`.
    pub fn build(&self, switches: &[Entity], nodes: &[Entity]) -> Result<Topology, TopologyError> {
        if switches.is_empty() || nodes.is_empty() {
            tracing::warn!(
                nodes = nodes.len(),
                switches = switches.len(),
                "insufficient components to connect"
            );
            return Err(TopologyError::InsufficientComponents {
                nodes: nodes.len(),
                switches: switches.len(),
            });
        }

        let mut state = BuildState::default();

        for pair in switches.windows(2) {
            if let [left, right] = pair {
                state.connect(left.id, right.id, TRUNK_WEIGHT, ConnectionKind::Trunk);
            }
        }

        for node in nodes {
            if !node.position.is_finite() {
                tracing::warn!(node = %node.id, position = %node.position, "node position is not finite; left unattached");
                continue;
            }
            let Some((switch, distance)) = nearest_switch(node, switches) else {
                tracing::warn!(node = %node.id, position = %node.position, "no switch at a measurable distance; left unattached");
                continue;
            };
            let weight = distance * self.conversion_factor;
            tracing::debug!(
                node = %node.id,
                switch = %switch.id,
                distance,
                weight,
                "attached node to nearest switch"
            );
            state.connect(node.id, switch.id, weight, ConnectionKind::Access);
        }

        let topology = state.finish();
        tracing::info!(
            nodes = nodes.len(),
            switches = switches.len(),
            connections = topology.connections.len(),
            "topology built"
        );
        Ok(topology)
    }
}

/// The switch at strictly minimal distance from `node`, first wins ties.
///
/// Returns `None` when no distance compares below infinity, which happens
/// for an empty slice or non-finite coordinates.
pub fn nearest_switch<'a>(node: &Entity, switches: &'a [Entity]) -> Option<(&'a Entity, f64)> {
    let mut best: Option<(&Entity, f64)> = None;
    let mut min_distance = f64::INFINITY;
    for switch in switches {
        let distance = node.position.distance_to(&switch.position);
        if distance < min_distance {
            min_distance = distance;
            best = Some((switch, distance));
        }
    }
    best
}

#[derive(Default)]
struct BuildState {
    graph: Graph,
    connections: Vec<Connection>,
}

impl BuildState {
    fn connect(&mut self, a: EntityId, b: EntityId, weight: f64, kind: ConnectionKind) {
        // One record per unordered pair.
        if a == b || self.graph.weight(a, b).is_some() {
            tracing::debug!(%a, %b, "skipping duplicate connection");
            return;
        }
        self.graph.insert_edge(a, b, weight);
        self.connections.push(Connection {
            id: ConnectionId(self.connections.len()),
            a,
            b,
            weight,
            kind,
        });
    }

    fn finish(self) -> Topology {
        Topology {
            graph: self.graph,
            connections: self.connections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsim_core::{EntityKind, Position};

    fn entity(id: usize, kind: EntityKind, x: f64, y: f64, label: usize) -> Entity {
        Entity {
            id: EntityId(id),
            kind,
            position: Position::new(x, y),
            label,
        }
    }

    fn switch(id: usize, x: f64, y: f64, label: usize) -> Entity {
        entity(id, EntityKind::Switch, x, y, label)
    }

    fn node(id: usize, x: f64, y: f64, label: usize) -> Entity {
        entity(id, EntityKind::Node, x, y, label)
    }

    #[test]
    fn empty_switches_is_insufficient() {
        let nodes = [node(0, 0.0, 0.0, 1)];
        let result = TopologyBuilder::default().build(&[], &nodes);
        assert_eq!(
            result,
            Err(TopologyError::InsufficientComponents {
                nodes: 1,
                switches: 0
            })
        );
    }

    #[test]
    fn empty_nodes_is_insufficient() {
        let switches = [switch(0, 0.0, 0.0, 1)];
        let result = TopologyBuilder::default().build(&switches, &[]);
        assert!(matches!(
            result,
            Err(TopologyError::InsufficientComponents { nodes: 0, switches: 1 })
        ));
    }

    #[test]
    fn two_switch_scenario_weights() {
        let switches = [switch(0, 0.0, 0.0, 1), switch(1, 45.0, 0.0, 2)];
        let nodes = [node(2, -5.0, 0.0, 1), node(3, 45.0, 3.0, 2)];
        let topology = TopologyBuilder::default().build(&switches, &nodes).unwrap();

        let g = &topology.graph;
        assert_eq!(g.weight(EntityId(0), EntityId(1)), Some(1.0));
        assert_eq!(g.weight(EntityId(2), EntityId(0)), Some(50.0));
        assert_eq!(g.weight(EntityId(3), EntityId(1)), Some(30.0));
        assert_eq!(g.weight(EntityId(2), EntityId(1)), None);
        assert_eq!(topology.connections.len(), 3);
    }

    #[test]
    fn connections_are_in_creation_order() {
        let switches = [switch(0, 0.0, 0.0, 1), switch(1, 10.0, 0.0, 2), switch(2, 20.0, 0.0, 3)];
        let nodes = [node(3, 21.0, 0.0, 1)];
        let topology = TopologyBuilder::default().build(&switches, &nodes).unwrap();

        let kinds: Vec<_> = topology.connections.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ConnectionKind::Trunk, ConnectionKind::Trunk, ConnectionKind::Access]
        );
        let ids: Vec<_> = topology.connections.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(topology.connections[0].connects(EntityId(0), EntityId(1)));
        assert!(topology.connections[1].connects(EntityId(1), EntityId(2)));
        assert!(topology.connections[2].connects(EntityId(3), EntityId(2)));
    }

    #[test]
    fn single_switch_has_no_trunks() {
        let switches = [switch(0, 0.0, 0.0, 1)];
        let nodes = [node(1, 3.0, 4.0, 1)];
        let topology = TopologyBuilder::default().build(&switches, &nodes).unwrap();
        assert_eq!(topology.connections.len(), 1);
        assert_eq!(topology.connections[0].weight, 50.0);
    }

    #[test]
    fn tie_goes_to_earliest_switch() {
        let switches = [switch(0, -10.0, 0.0, 1), switch(1, 10.0, 0.0, 2)];
        let nodes = [node(2, 0.0, 0.0, 1)];
        let topology = TopologyBuilder::default().build(&switches, &nodes).unwrap();
        assert_eq!(topology.graph.weight(EntityId(2), EntityId(0)), Some(100.0));
        assert_eq!(topology.graph.weight(EntityId(2), EntityId(1)), None);
    }

    #[test]
    fn conversion_factor_scales_access_weights() {
        let switches = [switch(0, 0.0, 0.0, 1)];
        let nodes = [node(1, 3.0, 4.0, 1)];
        let topology = TopologyBuilder::new(2.0).unwrap().build(&switches, &nodes).unwrap();
        assert_eq!(topology.graph.weight(EntityId(1), EntityId(0)), Some(10.0));
    }

    #[test]
    fn zero_conversion_factor_is_allowed() {
        let switches = [switch(0, 0.0, 0.0, 1)];
        let nodes = [node(1, 3.0, 4.0, 1)];
        let topology = TopologyBuilder::new(0.0).unwrap().build(&switches, &nodes).unwrap();
        assert_eq!(topology.graph.weight(EntityId(1), EntityId(0)), Some(0.0));
    }

    #[test]
    fn negative_or_non_finite_conversion_factor_is_rejected() {
        assert_eq!(
            TopologyBuilder::new(-1.0),
            Err(ConfigError::ConversionFactor(-1.0))
        );
        assert!(matches!(
            TopologyBuilder::new(f64::NAN),
            Err(ConfigError::ConversionFactor(f)) if f.is_nan()
        ));
        assert!(TopologyBuilder::new(f64::INFINITY).is_err());
    }

    #[test]
    fn rebuild_is_identical() {
        let switches = [switch(0, 0.0, 0.0, 1), switch(1, 100.0, 0.0, 2)];
        let nodes = [node(2, 10.0, 10.0, 1), node(3, 90.0, -20.0, 2)];
        let builder = TopologyBuilder::default();
        let first = builder.build(&switches, &nodes).unwrap();
        let second = builder.build(&switches, &nodes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn node_with_nan_position_is_left_unattached() {
        let switches = [switch(0, 0.0, 0.0, 1)];
        let nodes = [node(1, f64::NAN, 0.0, 1), node(2, 1.0, 0.0, 2)];
        let topology = TopologyBuilder::default().build(&switches, &nodes).unwrap();
        assert!(!topology.graph.contains(EntityId(1)));
        assert_eq!(topology.connections.len(), 1);
    }

    #[test]
    fn node_with_infinite_position_is_left_unattached() {
        let switches = [switch(0, 0.0, 0.0, 1)];
        let nodes = [node(1, f64::INFINITY, 0.0, 1)];
        let topology = TopologyBuilder::default().build(&switches, &nodes).unwrap();
        assert!(topology.connections.is_empty());
        assert!(!topology.graph.contains(EntityId(1)));
    }

    #[test]
    fn nearest_switch_of_empty_slice_is_none() {
        assert!(nearest_switch(&node(0, 0.0, 0.0, 1), &[]).is_none());
    }

    #[test]
    fn nearest_switch_reports_distance() {
        let switches = [switch(0, 0.0, 0.0, 1), switch(1, 6.0, 8.0, 2)];
        let n = node(2, 6.0, 9.0, 1);
        let (s, d) = nearest_switch(&n, &switches).unwrap();
        assert_eq!(s.id, EntityId(1));
        assert_eq!(d, 1.0);
    }
}
