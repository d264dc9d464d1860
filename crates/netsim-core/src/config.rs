//! # Topology Configuration
//!
//! Tunables for graph construction and switch placement, loadable from
//! YAML. Every field has a default, so a partial file (or none at all)
//! is valid.
//!
//! ```yaml
//! conversion_factor: 10.0
//! switch_layout:
//!   origin_x: 100.0
//!   origin_y: 150.0
//!   spacing: 150.0
//!   size: 50.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, NetsimError};
use crate::geometry::Position;

/// Scale applied to node-to-switch Euclidean distance to obtain edge cost.
pub const DEFAULT_CONVERSION_FACTOR: f64 = 10.0;

/// Configuration for the topology engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    /// Distance units to cost units.
    pub conversion_factor: f64,
    /// Where switches are placed, by creation order.
    pub switch_layout: SwitchLayout,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            conversion_factor: DEFAULT_CONVERSION_FACTOR,
            switch_layout: SwitchLayout::default(),
        }
    }
}

impl TopologyConfig {
    /// Load a configuration from a YAML file and validate it.
    pub fn from_yaml_file(path: &Path) -> Result<Self, NetsimError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a configuration from YAML text and validate it.
    pub fn from_yaml_str(content: &str) -> Result<Self, NetsimError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce negative or non-finite weights, or
    /// a degenerate switch layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.conversion_factor.is_finite() || self.conversion_factor < 0.0 {
            return Err(ConfigError::ConversionFactor(self.conversion_factor));
        }
        self.switch_layout.validate()
    }
}

/// Horizontal row of fixed-size switch slots.
///
/// Slot `k` (0-based) is the square with top-left corner
/// `(origin_x + k * spacing, origin_y)` and side `size`. A switch sits at
/// the centre of its slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub spacing: f64,
    pub size: f64,
}

impl Default for SwitchLayout {
    fn default() -> Self {
        Self {
            origin_x: 100.0,
            origin_y: 150.0,
            spacing: 150.0,
            size: 50.0,
        }
    }
}

impl SwitchLayout {
    /// Centre of the slot at 0-based index `slot`.
    pub fn slot_center(&self, slot: usize) -> Position {
        let half = self.size / 2.0;
        Position::new(
            self.origin_x + slot as f64 * self.spacing + half,
            self.origin_y + half,
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("origin_x", self.origin_x), ("origin_y", self.origin_y)] {
            if !value.is_finite() {
                return Err(ConfigError::Origin { field, value });
            }
        }
        for (field, value) in [("spacing", self.spacing), ("size", self.size)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Layout { field, value });
            }
        }
        Ok(())
    }
}
