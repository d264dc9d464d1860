//! # Shortest-Path Engine
//!
//! Single-source Dijkstra over a [`Graph`], stopping as soon as the target
//! is popped from the queue. Edge weights are non-negative by construction
//! (unit trunks, scaled Euclidean distances), which is the algorithm's
//! correctness precondition.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use serde::{Deserialize, Serialize};

use netsim_core::{EntityId, TopologyError};

use crate::graph::Graph;

/// A path from start to end inclusive, with its total weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    pub entities: Vec<EntityId>,
    pub distance: f64,
}

impl ShortestPath {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.entities.len().saturating_sub(1)
    }
}

// ---------------------------------------------------------------------------
// Internal: Dijkstra state
// ---------------------------------------------------------------------------

/// Entry in the Dijkstra priority queue.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: f64,
    entity: EntityId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default).
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.entity.cmp(&self.entity))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the minimum-weight path from `start` to `end`.
///
/// `start == end` yields `[start]` at distance zero even when `start` has
/// no edges. An exhausted queue yields [`TopologyError::NoPathExists`].
pub fn shortest_path(
    graph: &Graph,
    start: EntityId,
    end: EntityId,
) -> Result<ShortestPath, TopologyError> {
    let mut distances: BTreeMap<EntityId, f64> = BTreeMap::new();
    let mut previous: BTreeMap<EntityId, EntityId> = BTreeMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry {
        distance: 0.0,
        entity: start,
    });

    while let Some(QueueEntry { distance, entity }) = queue.pop() {
        if entity == end {
            let entities = reconstruct(&previous, start, end);
            tracing::debug!(%start, %end, hops = entities.len() - 1, distance, "shortest path found");
            return Ok(ShortestPath { entities, distance });
        }

        // Stale entry: a shorter route to `entity` was already settled.
        if distance > best(&distances, entity) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(entity) {
            let candidate = distance + weight;
            if candidate < best(&distances, neighbor) {
                distances.insert(neighbor, candidate);
                previous.insert(neighbor, entity);
                queue.push(QueueEntry {
                    distance: candidate,
                    entity: neighbor,
                });
            }
        }
    }

    tracing::warn!(%start, %end, "no path exists");
    Err(TopologyError::NoPathExists { start, end })
}

fn best(distances: &BTreeMap<EntityId, f64>, entity: EntityId) -> f64 {
    distances.get(&entity).copied().unwrap_or(f64::INFINITY)
}

/// Walk the predecessor chain back from `end`, then reverse.
fn reconstruct(previous: &BTreeMap<EntityId, EntityId>, start: EntityId, end: EntityId) -> Vec<EntityId> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match previous.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: usize) -> EntityId {
        EntityId(n)
    }

    fn scenario_graph() -> Graph {
        // S1=0, S2=1, N1=2, N2=3
        let mut g = Graph::new();
        g.insert_edge(id(0), id(1), 1.0);
        g.insert_edge(id(2), id(0), 50.0);
        g.insert_edge(id(3), id(1), 30.0);
        g
    }

    #[test]
    fn scenario_path_crosses_the_trunk() {
        let path = shortest_path(&scenario_graph(), id(2), id(3)).unwrap();
        assert_eq!(path.entities, vec![id(2), id(0), id(1), id(3)]);
        assert_eq!(path.distance, 81.0);
        assert_eq!(path.hop_count(), 3);
    }

    #[test]
    fn path_is_reversible() {
        let path = shortest_path(&scenario_graph(), id(3), id(2)).unwrap();
        assert_eq!(path.entities, vec![id(3), id(1), id(0), id(2)]);
        assert_eq!(path.distance, 81.0);
    }

    #[test]
    fn reflexive_path_is_single_entity() {
        let path = shortest_path(&scenario_graph(), id(2), id(2)).unwrap();
        assert_eq!(path.entities, vec![id(2)]);
        assert_eq!(path.distance, 0.0);
        assert_eq!(path.hop_count(), 0);
    }

    #[test]
    fn reflexive_path_on_empty_graph() {
        let path = shortest_path(&Graph::new(), id(7), id(7)).unwrap();
        assert_eq!(path.entities, vec![id(7)]);
    }

    #[test]
    fn disconnected_components_report_no_path() {
        let mut g = scenario_graph();
        g.insert_edge(id(10), id(11), 2.0);
        assert_eq!(
            shortest_path(&g, id(2), id(11)),
            Err(TopologyError::NoPathExists {
                start: id(2),
                end: id(11)
            })
        );
    }

    #[test]
    fn unknown_start_reports_no_path() {
        assert!(matches!(
            shortest_path(&scenario_graph(), id(99), id(2)),
            Err(TopologyError::NoPathExists { .. })
        ));
    }

    #[test]
    fn prefers_cheaper_multi_hop_route() {
        let mut g = Graph::new();
        g.insert_edge(id(0), id(1), 10.0);
        g.insert_edge(id(0), id(2), 1.0);
        g.insert_edge(id(2), id(3), 1.0);
        g.insert_edge(id(3), id(1), 1.0);
        let path = shortest_path(&g, id(0), id(1)).unwrap();
        assert_eq!(path.entities, vec![id(0), id(2), id(3), id(1)]);
        assert_eq!(path.distance, 3.0);
    }

    #[test]
    fn zero_weight_edges_are_traversed() {
        let mut g = Graph::new();
        g.insert_edge(id(0), id(1), 0.0);
        g.insert_edge(id(1), id(2), 0.0);
        let path = shortest_path(&g, id(0), id(2)).unwrap();
        assert_eq!(path.entities, vec![id(0), id(1), id(2)]);
        assert_eq!(path.distance, 0.0);
    }

    #[test]
    fn queue_pops_smallest_distance_first() {
        let mut heap = BinaryHeap::new();
        for (d, e) in [(5.0, 1), (1.0, 2), (3.0, 3)] {
            heap.push(QueueEntry {
                distance: d,
                entity: id(e),
            });
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.entity).collect();
        assert_eq!(order, vec![id(2), id(3), id(1)]);
    }
}
