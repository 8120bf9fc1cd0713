//! Editor configuration.
//!
//! Loaded from `<config dir>/zoneboard/config.json`. Every field has a default,
//! so a partial (or missing) file is fine.

use crate::constants::{BUFFER_VIEW_BOX, WORK_VIEW_BOX};
use crate::geometry::ViewBox;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_LOG_FILTER: &str = "zoneboard=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub buffer_view_box: ViewBox,
    pub work_view_box: ViewBox,
    /// Where the file store lives; the platform data dir when unset
    pub storage_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            buffer_view_box: BUFFER_VIEW_BOX,
            work_view_box: WORK_VIEW_BOX,
            storage_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zoneboard").join("config.json"))
}

impl EditorConfig {
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        for (name, vb) in [
            ("buffer_view_box", self.buffer_view_box),
            ("work_view_box", self.work_view_box),
        ] {
            if !(vb.width > 0.0 && vb.height > 0.0) {
                anyhow::bail!("{} must have a positive size", name);
            }
        }
        Ok(())
    }
}
