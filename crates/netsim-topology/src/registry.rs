//! # Entity Registry
//!
//! Sole authority for entity identity. Ids are the creation index across
//! both kinds; display labels and node ordinals are 1-based sequence numbers
//! within a kind.

use serde::{Deserialize, Serialize};

use netsim_core::{EntityId, EntityKind, Position, SwitchLayout, TopologyError};

/// A node or switch placed in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Position,
    /// 1-based sequence number within `kind`.
    pub label: usize,
}

impl Entity {
    /// Label shown to the user: `"3"` for the third node, `"Switch 2"` for
    /// the second switch.
    pub fn display_label(&self) -> String {
        match self.kind {
            EntityKind::Node => self.label.to_string(),
            EntityKind::Switch => format!("Switch {}", self.label),
        }
    }
}

/// Creation-ordered store of every entity in the topology.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    layout: SwitchLayout,
    nodes: Vec<Entity>,
    switches: Vec<Entity>,
}

impl EntityRegistry {
    pub fn new(layout: SwitchLayout) -> Self {
        Self {
            layout,
            nodes: Vec::new(),
            switches: Vec::new(),
        }
    }

    /// Register a node at `position`. Its ordinal is the new node count.
    pub fn create_node(&mut self, position: Position) -> Entity {
        let entity = Entity {
            id: self.allocate_id(),
            kind: EntityKind::Node,
            position,
            label: self.nodes.len() + 1,
        };
        self.nodes.push(entity);
        tracing::debug!(id = %entity.id, ordinal = entity.label, %position, "created node");
        entity
    }

    /// Register a switch in the next free layout slot.
    pub fn create_switch(&mut self) -> Entity {
        let slot = self.switches.len();
        let entity = Entity {
            id: self.allocate_id(),
            kind: EntityKind::Switch,
            position: self.layout.slot_center(slot),
            label: slot + 1,
        };
        self.switches.push(entity);
        tracing::debug!(id = %entity.id, slot, position = %entity.position, "created switch");
        entity
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.nodes
            .iter()
            .chain(self.switches.iter())
            .find(|e| e.id == id)
    }

    /// Resolve a 1-based node ordinal to its entity.
    pub fn node_by_ordinal(&self, ordinal: usize) -> Result<&Entity, TopologyError> {
        ordinal
            .checked_sub(1)
            .and_then(|idx| self.nodes.get(idx))
            .ok_or(TopologyError::InvalidOrdinal {
                ordinal,
                node_count: self.nodes.len(),
            })
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> &[Entity] {
        &self.nodes
    }

    /// Switches in creation order.
    pub fn switches(&self) -> &[Entity] {
        &self.switches
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn switch_count(&self) -> usize {
        self.switches.len()
    }

    /// Entities are never removed, so the count of both kinds is the next
    /// unused id.
    fn allocate_id(&self) -> EntityId {
        EntityId(self.nodes.len() + self.switches.len())
    }
}
