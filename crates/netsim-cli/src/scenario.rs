//! # Scenario Files
//!
//! A scenario replays the events the canvas would produce: switch
//! creations, node clicks, and path requests. YAML by default; files with
//! a `.json` extension are parsed as JSON.
//!
//! ```yaml
//! switches: 2
//! nodes:
//!   - { x: 120, y: 60 }
//!   - { x: 280, y: 240 }
//! queries:
//!   - { from: 1, to: 2 }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use netsim_core::{ConfigError, TopologyConfig};
use netsim_topology::TopologyService;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Number of switches, created in order before any node.
    #[serde(default)]
    pub switches: usize,
    /// Node placements, in creation order.
    #[serde(default)]
    pub nodes: Vec<NodePlacement>,
    /// Path requests by 1-based node number.
    #[serde(default)]
    pub queries: Vec<PathQuery>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePlacement {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    pub from: usize,
    pub to: usize,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let scenario: Self = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("invalid JSON scenario {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("invalid YAML scenario {}", path.display()))?
        };
        tracing::debug!(
            switches = scenario.switches,
            nodes = scenario.nodes.len(),
            queries = scenario.queries.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// Replay the creation events into a fresh service. Does not connect.
    pub fn populate(&self, config: &TopologyConfig) -> Result<TopologyService, ConfigError> {
        let mut service = TopologyService::new(config)?;
        for _ in 0..self.switches {
            service.create_switch();
        }
        for node in &self.nodes {
            service.create_node(node.x, node.y);
        }
        Ok(service)
    }
}
