//! CLI command implementations.

pub mod rename;
pub mod scan;

use std::path::Path;

use fapiao_core::models::config::FapiaoConfig;

/// Load the configuration file if given, defaults otherwise.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FapiaoConfig> {
    match config_path {
        Some(path) => Ok(FapiaoConfig::from_file(Path::new(path))?),
        None => Ok(FapiaoConfig::default()),
    }
}
