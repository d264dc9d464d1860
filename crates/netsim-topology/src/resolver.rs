//! # Path-to-Edge Resolver
//!
//! Maps consecutive entity pairs on a path to the connection records that
//! must be highlighted.

use netsim_core::{EntityId, TopologyError};

use crate::graph::Connection;

/// Connections along `path`, in path order.
///
/// A consecutive pair without a matching connection means the graph and
/// connection list were not produced by the same build; this is reported
/// as [`TopologyError::InconsistentTopology`] and logged at error level.
pub fn resolve_edges(
    path: &[EntityId],
    connections: &[Connection],
) -> Result<Vec<Connection>, TopologyError> {
    path.windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some((*from, *to)),
            _ => None,
        })
        .map(|(from, to)| {
            connections
                .iter()
                .find(|c| c.connects(from, to))
                .copied()
                .ok_or_else(|| {
                    tracing::error!(%from, %to, "path step has no connection record");
                    TopologyError::InconsistentTopology { from, to }
                })
        })
        .collect()
}
