//! Application configuration loaded from TOML
//!
//! ```toml
//! [server]
//! addr = "0.0.0.0:3000"
//!
//! [staircase]
//! step = 5.0
//! min = -10.0
//! max = 20.0
//!
//! [logging]
//! verbose = false
//! json = true
//! ```
//!
//! Every section and field is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::types::StaircaseConfig;
use crate::Result;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    pub server: ServerConfig,
    pub staircase: StaircaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: DEFAULT_ADDR.to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl CoachConfig {
    /// Load and validate a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CoachConfig = toml::from_str(content)?;
        config.staircase.validate()?;
        Ok(config)
    }
}
