//! Configuration loading for the `--config` flag.

use std::path::Path;

use anyhow::{Context, Result};

use netsim_core::TopologyConfig;

/// Load and validate the topology configuration, or use defaults.
pub fn load_config(path: Option<&Path>) -> Result<TopologyConfig> {
    match path {
        Some(path) => {
            let config = TopologyConfig::from_yaml_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            tracing::debug!(path = %path.display(), ?config, "loaded configuration");
            Ok(config)
        }
        None => Ok(TopologyConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_flag_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, TopologyConfig::default());
    }

    #[test]
    fn loads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netsim.yaml");
        std::fs::write(&path, "conversion_factor: 1.0\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.conversion_factor, 1.0);
    }

    #[test]
    fn rejects_invalid_values_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netsim.yaml");
        std::fs::write(&path, "switch_layout:\n  size: -1.0\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("switch_layout.size"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.yaml"))).is_err());
    }
}
