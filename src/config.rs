//! Table configuration persistence
//!
//! Stores windowing preferences in `~/.config/reel/config.yaml`

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How many edge-check passes a single scroll notification runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollPolicy {
    /// Repeat passes until the window stops moving (handles large jumps)
    #[default]
    Settle,
    /// One pass per call: each edge moves at most one row; the host must
    /// deliver offsets every frame
    PerFrame,
}

/// Table configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Offscreen rows kept materialized, half above and half below the
    /// visible band
    #[serde(default = "default_invisible_cell_budget")]
    pub invisible_cell_budget: usize,

    /// Cap on pooled rows across all reuse keys
    #[serde(default = "default_max_reusable_count")]
    pub max_reusable_count: usize,

    #[serde(default)]
    pub scroll_policy: ScrollPolicy,

    /// Duration hint for the slide that closes a deletion gap
    #[serde(default = "default_slide_duration_ms")]
    pub slide_duration_ms: u64,
}

fn default_invisible_cell_budget() -> usize {
    6
}

fn default_max_reusable_count() -> usize {
    8
}

fn default_slide_duration_ms() -> u64 {
    200
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            invisible_cell_budget: default_invisible_cell_budget(),
            max_reusable_count: default_max_reusable_count(),
            scroll_policy: ScrollPolicy::default(),
            slide_duration_ms: default_slide_duration_ms(),
        }
    }
}

impl TableConfig {
    /// Offscreen rows kept on each side of the visible band
    pub fn half_budget(&self) -> usize {
        self.invisible_cell_budget / 2
    }

    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(self.slide_duration_ms)
    }

    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
