//! CLI utilities for binaries
//!
//! Handles configuration path resolution for the sync binaries.

use std::path::PathBuf;

/// Type of configuration to load
#[derive(Debug, Clone)]
pub enum ConfigType {
    /// Sync configuration (config/sync_config.yaml)
    Sync,
    /// Custom path
    Custom(String),
}

impl ConfigType {
    /// Get the default path for this config type
    pub fn default_path(&self) -> &str {
        match self {
            ConfigType::Sync => "config/sync_config.yaml",
            ConfigType::Custom(path) => path,
        }
    }

    /// Get the environment variable name for this config type
    pub fn env_var_name(&self) -> &str {
        match self {
            ConfigType::Sync => "SYNC_CONFIG_PATH",
            ConfigType::Custom(_) => "SYNC_CONFIG_PATH",
        }
    }
}

/// Load configuration path from environment or use default
pub fn load_config_from_env(config_type: ConfigType) -> PathBuf {
    std::env::var(config_type.env_var_name())
        .unwrap_or_else(|_| config_type.default_path().to_string())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_type_paths() {
        assert_eq!(ConfigType::Sync.default_path(), "config/sync_config.yaml");

        let custom = ConfigType::Custom("custom/path.yaml".to_string());
        assert_eq!(custom.default_path(), "custom/path.yaml");
    }

    #[test]
    fn test_config_type_env_vars() {
        assert_eq!(ConfigType::Sync.env_var_name(), "SYNC_CONFIG_PATH");
    }
}
