//! # Identity Newtypes
//!
//! Identifiers for the simulated topology. An `EntityId` can never be
//! passed where a `ConnectionId` is expected, and neither carries any
//! rendering concern.

use serde::{Deserialize, Serialize};

/// Stable identifier for a node or switch.
///
/// Assigned by the entity registry as the number of entities created before
/// it. Ordering follows creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub usize);

/// Identifier for a connection record produced by a topology build.
///
/// Sequential within one build, starting at zero, so two builds over the
/// same entities yield identical connection ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub usize);

/// The category of a network element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// An end host (computer).
    Node,
    /// A switch; switches are chained in creation order.
    Switch,
}

impl EntityId {
    /// Access the inner integer.
    pub fn get(self) -> usize {
        self.0
    }
}

impl ConnectionId {
    /// Access the inner integer.
    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity:{}", self.0)
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "connection:{}", self.0)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node => f.write_str("node"),
            Self::Switch => f.write_str("switch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_display() {
        assert_eq!(EntityId(7).to_string(), "entity:7");
    }

    #[test]
    fn connection_id_display() {
        assert_eq!(ConnectionId(0).to_string(), "connection:0");
    }

    #[test]
    fn entity_ids_order_by_creation() {
        assert!(EntityId(1) < EntityId(2));
    }

    #[test]
    fn entity_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&EntityId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn entity_kind_serializes_snake_case() {
        let json = serde_json::to_string(&EntityKind::Switch).unwrap();
        assert_eq!(json, "\"switch\"");
    }
}
