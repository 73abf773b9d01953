//! Integration test: Configuration utilities
//!
//! Tests the bin_common configuration path resolution.

use std::env;
use watch_sync_bot::bin_common::{load_config_from_env, ConfigType};

#[test]
fn test_sync_config_default() {
    // Clear env var to test default
    env::remove_var("SYNC_CONFIG_PATH");

    let config_path = load_config_from_env(ConfigType::Sync);
    assert_eq!(config_path.to_str().unwrap(), "config/sync_config.yaml");
}

#[test]
fn test_custom_config() {
    let custom = ConfigType::Custom("custom/path.yaml".to_string());
    assert_eq!(custom.default_path(), "custom/path.yaml");
}

#[test]
fn test_config_type_env_var_names() {
    assert_eq!(ConfigType::Sync.env_var_name(), "SYNC_CONFIG_PATH");
    assert_eq!(
        ConfigType::Custom("x.yaml".to_string()).env_var_name(),
        "SYNC_CONFIG_PATH"
    );
}
