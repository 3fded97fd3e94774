//! Host configuration
//!
//! Hosts select the text encoding through a small TOML section:
//!
//! ```toml
//! # Encoding used to interpret byte buffers handed to the bridge.
//! encoding = "utf-8"
//! ```
//!
//! Missing or unreadable files fall back to defaults; configuration
//! problems never stop a host from drawing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::encoding::Encoding;

/// Bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Encoding label used to interpret byte buffers.
    pub encoding: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults if
    /// the file is missing or malformed.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Resolve the configured encoding.
    pub fn encoding(&self) -> Encoding {
        Encoding::from_label(&self.encoding)
    }
}
