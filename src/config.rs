use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Error, IoError},
    read,
};

/// Runtime settings, read from an optional JSON file. Missing keys take their
/// defaults; CLI flags override whatever the file says.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Shortest indexed substring, in characters.
    pub min_gram: usize,

    /// Throttle interval for searches and rebuilds.
    pub throttle_ms: u64,

    pub overscan: usize,
    pub item_height: f64,
    pub container_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_gram: ngidx::tokenizer::MIN_GRAM,
            throttle_ms: 200,
            overscan: ngidx::window::OVERSCAN,
            item_height: 50.0,
            container_height: 500.0,
        }
    }
}

impl Config {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let buffer = read::read_to_string(path).await.map_err(|error| match error {
            Error::Io(IoError::File(kind)) => ConfigError::File(kind).into(),
            error => error,
        })?;

        Ok(Self::from_json(&buffer)?)
    }

    pub fn from_json(buffer: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(buffer)
            .map_err(|error| ConfigError::Serialization(error.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_gram == 0 {
            return Err(ConfigError::Invalid("min_gram must be positive".to_string()));
        }

        if self.throttle_ms == 0 {
            return Err(ConfigError::Invalid("throttle_ms must be positive".to_string()));
        }

        Ok(())
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}
