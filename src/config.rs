//! Layout configuration persistence
//!
//! Stores user preferences in `~/.config/strata/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::layout::{DEFAULT_BOTTOM_PANEL_HEIGHT, DEFAULT_HEADER_HEIGHT};
use crate::model::resize::{ResizeAxis, ResizeConfig, ResizeEdge};

/// Size limits for one resizable region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min_size: i32,
    pub max_size: i32,
}

impl SizeBounds {
    pub const fn new(min_size: i32, max_size: i32) -> Self {
        Self { min_size, max_size }
    }
}

/// Layout configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Initial header height in logical pixels
    #[serde(default = "default_header_height")]
    pub header_height: i32,

    /// Initial bottom panel height in logical pixels
    #[serde(default = "default_bottom_panel_height")]
    pub bottom_panel_height: i32,

    /// Header height while collapsed by scrolling
    #[serde(default = "default_collapsed_header_height")]
    pub collapsed_header_height: i32,

    /// Scroll position the page must pass before the header collapses
    #[serde(default = "default_header_collapse_offset")]
    pub header_collapse_offset: u64,

    #[serde(default = "default_header_resize")]
    pub header_resize: SizeBounds,

    #[serde(default = "default_bottom_panel_resize")]
    pub bottom_panel_resize: SizeBounds,
}

fn default_header_height() -> i32 {
    DEFAULT_HEADER_HEIGHT
}

fn default_bottom_panel_height() -> i32 {
    DEFAULT_BOTTOM_PANEL_HEIGHT
}

fn default_collapsed_header_height() -> i32 {
    56
}

fn default_header_collapse_offset() -> u64 {
    100
}

fn default_header_resize() -> SizeBounds {
    SizeBounds::new(48, 160)
}

fn default_bottom_panel_resize() -> SizeBounds {
    SizeBounds::new(100, 600)
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: default_header_height(),
            bottom_panel_height: default_bottom_panel_height(),
            collapsed_header_height: default_collapsed_header_height(),
            header_collapse_offset: default_header_collapse_offset(),
            header_resize: default_header_resize(),
            bottom_panel_resize: default_bottom_panel_resize(),
        }
    }
}

impl LayoutConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
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

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Reject configurations the resize controllers would clamp degenerately.
    ///
    /// The controllers themselves never validate their bounds, so this must
    /// run before regions are registered.
    pub fn validate(&self) -> Result<(), String> {
        for (name, bounds) in [
            ("header_resize", self.header_resize),
            ("bottom_panel_resize", self.bottom_panel_resize),
        ] {
            if bounds.max_size < bounds.min_size {
                return Err(format!(
                    "{}: max_size ({}) is smaller than min_size ({})",
                    name, bounds.max_size, bounds.min_size
                ));
            }
        }

        for (name, value) in [
            ("header_height", self.header_height),
            ("bottom_panel_height", self.bottom_panel_height),
            ("collapsed_header_height", self.collapsed_header_height),
        ] {
            if value <= 0 {
                return Err(format!("{} must be positive, got {}", name, value));
            }
        }

        Ok(())
    }

    /// Header: handle on its bottom edge, dragged downwards to grow
    pub fn header_resize_config(&self) -> ResizeConfig {
        ResizeConfig::new(ResizeAxis::Vertical, ResizeEdge::Bottom, self.header_height)
            .with_bounds(self.header_resize.min_size, self.header_resize.max_size)
    }

    /// Bottom panel: handle on its top edge, dragged upwards to grow
    pub fn bottom_panel_resize_config(&self) -> ResizeConfig {
        ResizeConfig::new(
            ResizeAxis::Vertical,
            ResizeEdge::Top,
            self.bottom_panel_height,
        )
        .with_bounds(
            self.bottom_panel_resize.min_size,
            self.bottom_panel_resize.max_size,
        )
    }
}
