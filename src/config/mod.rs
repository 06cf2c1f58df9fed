use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::instances::DEFAULT_CAPACITY;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid model configuration: {0}")]
    ValidationError(String),
}

/// Model installation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory holding the axis and table `.dat` files. Empty means the
    /// current directory.
    pub data_dir: PathBuf,
    /// Initial bucket count of the instance registry
    pub registry_capacity: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            registry_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// `<platform data dir>/f16_aero/data`, or `./data` when the platform has none
pub fn default_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("f16_aero").join("data"),
        None => {
            warn!("no platform data directory, using ./data");
            PathBuf::from("data")
        }
    }
}

impl ModelConfig {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&file_contents)?;
        info!("model config loaded from '{}'", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "registry_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_registry_capacity(mut self, capacity: usize) -> Self {
        self.registry_capacity = capacity;
        self
    }
}
