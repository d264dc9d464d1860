//! # Weighted Undirected Graph
//!
//! Adjacency is a `BTreeMap` of `BTreeMap`s so iteration order (and thus
//! every derived output) is deterministic. Inserting an edge always writes
//! both directions, keeping the map symmetric.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use netsim_core::{ConnectionId, EntityId};

/// Adjacency map: entity → (neighbour → weight).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    adjacency: BTreeMap<EntityId, BTreeMap<EntityId, f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the undirected edge `a`–`b`.
    pub fn insert_edge(&mut self, a: EntityId, b: EntityId, weight: f64) {
        self.adjacency.entry(a).or_default().insert(b, weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
    }

    /// Weight of the edge `a`–`b`, if present.
    pub fn weight(&self, a: EntityId, b: EntityId) -> Option<f64> {
        self.adjacency.get(&a)?.get(&b).copied()
    }

    /// Neighbours of `id` with edge weights, in id order.
    pub fn neighbors(&self, id: EntityId) -> impl Iterator<Item = (EntityId, f64)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|n| n.iter().map(|(&k, &w)| (k, w)))
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Entities with at least one edge.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Each undirected edge once, as `(lower id, higher id, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (EntityId, EntityId, f64)> + '_ {
        self.adjacency.iter().flat_map(|(&a, n)| {
            n.iter()
                .filter(move |&(&b, _)| a < b)
                .map(move |(&b, &w)| (a, b, w))
        })
    }
}

/// Which kind of entities a connection joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    /// Switch to switch, unit cost.
    Trunk,
    /// Node to its nearest switch, cost proportional to distance.
    Access,
}

/// A connection record: the drawable counterpart of one graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub a: EntityId,
    pub b: EntityId,
    pub weight: f64,
    pub kind: ConnectionKind,
}

impl Connection {
    /// Whether this connection joins `x` and `y`, in either order.
    pub fn connects(&self, x: EntityId, y: EntityId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other(&self, id: EntityId) -> Option<EntityId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Output of one build: the graph and its connection records, in creation
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub graph: Graph,
    pub connections: Vec<Connection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_edge_is_symmetric() {
        let mut g = Graph::new();
        g.insert_edge(EntityId(1), EntityId(2), 4.5);
        assert_eq!(g.weight(EntityId(1), EntityId(2)), Some(4.5));
        assert_eq!(g.weight(EntityId(2), EntityId(1)), Some(4.5));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn reinserting_overwrites_weight() {
        let mut g = Graph::new();
        g.insert_edge(EntityId(1), EntityId(2), 4.5);
        g.insert_edge(EntityId(2), EntityId(1), 1.0);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight(EntityId(1), EntityId(2)), Some(1.0));
    }

    #[test]
    fn neighbors_of_unknown_entity_is_empty() {
        let g = Graph::new();
        assert_eq!(g.neighbors(EntityId(0)).count(), 0);
        assert!(!g.contains(EntityId(0)));
    }

    #[test]
    fn edges_lists_each_pair_once() {
        let mut g = Graph::new();
        g.insert_edge(EntityId(0), EntityId(1), 1.0);
        g.insert_edge(EntityId(1), EntityId(2), 2.0);
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(
            edges,
            vec![(EntityId(0), EntityId(1), 1.0), (EntityId(1), EntityId(2), 2.0)]
        );
    }

    #[test]
    fn connection_matching_ignores_order() {
        let c = Connection {
            id: ConnectionId(0),
            a: EntityId(3),
            b: EntityId(5),
            weight: 1.0,
            kind: ConnectionKind::Trunk,
        };
        assert!(c.connects(EntityId(3), EntityId(5)));
        assert!(c.connects(EntityId(5), EntityId(3)));
        assert!(!c.connects(EntityId(3), EntityId(4)));
        assert_eq!(c.other(EntityId(5)), Some(EntityId(3)));
        assert_eq!(c.other(EntityId(9)), None);
    }
}
