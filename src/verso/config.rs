use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, VersoError};

pub const CONFIG_FILENAME: &str = "config.json";

fn default_manifest_file() -> String {
    "index.json".to_string()
}

fn default_image_ext() -> String {
    ".png".to_string()
}

fn default_placeholder() -> String {
    "placeholder.png".to_string()
}

/// Persistent settings, stored as JSON in the user config directory.
/// Every field has a default so partial files keep loading as the
/// format grows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersoConfig {
    /// Default collection location: a directory path or an http(s) base URL.
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,
    #[serde(default = "default_image_ext")]
    pub image_ext: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for VersoConfig {
    fn default() -> Self {
        Self {
            collection: None,
            manifest_file: default_manifest_file(),
            image_ext: default_image_ext(),
            placeholder: default_placeholder(),
        }
    }
}

impl VersoConfig {
    /// Sets the image extension, normalizing to a leading dot.
    pub fn set_image_ext(&mut self, ext: &str) {
        self.image_ext = if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{}", ext)
        };
    }

    /// Loads the config from `dir`, falling back to defaults when no file
    /// exists yet.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(VersoError::Io)?;
        serde_json::from_str(&content).map_err(VersoError::Serialization)
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir).map_err(VersoError::Io)?;
        let path = dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(VersoError::Serialization)?;
        std::fs::write(&path, content).map_err(VersoError::Io)
    }
}
