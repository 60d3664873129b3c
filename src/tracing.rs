//! Tracing infrastructure and state snapshots
//!
//! Provides structured logging plus a serializable snapshot of the coordinator
//! state, used for debug diffs and by the replay driver.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=strata::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/strata/logs/strata.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, BreakpointClass, LayoutState, RegionId, ScrollSignal};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/strata/logs/strata.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so replay output on stdout stays machine-readable
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "strata.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Read-only view of the coordinator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub width: u32,
    pub height: u32,
    pub breakpoint: BreakpointClass,
    pub scroll: ScrollSignal,
    pub header_collapsed: bool,
    pub layout: LayoutState,
    /// Visible header size (follows the pointer while dragging)
    pub header_size: i32,
    /// Visible bottom panel size
    pub bottom_panel_size: i32,
    pub dragging: Vec<RegionId>,
}

impl LayoutSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            width: model.viewport.width(),
            height: model.viewport.height(),
            breakpoint: model.breakpoint(),
            scroll: model.scroll.signal(),
            header_collapsed: model.header_collapsed(),
            layout: model.layout,
            header_size: model.regions.header.size(),
            bottom_panel_size: model.regions.bottom_panel.size(),
            dragging: model.regions.dragging(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.breakpoint != other.breakpoint {
            changes.push(format!(
                "breakpoint: {} → {}",
                self.breakpoint.label(),
                other.breakpoint.label()
            ));
        }
        if self.scroll.direction != other.scroll.direction {
            changes.push(format!(
                "scroll: {:?} → {:?}",
                self.scroll.direction, other.scroll.direction
            ));
        }
        if self.header_collapsed != other.header_collapsed {
            changes.push(format!(
                "header collapsed: {} → {}",
                self.header_collapsed, other.header_collapsed
            ));
        }
        if self.layout.show_bottom_panel != other.layout.show_bottom_panel {
            changes.push(format!(
                "bottom panel: {} → {}",
                self.layout.show_bottom_panel, other.layout.show_bottom_panel
            ));
        }
        if self.layout.main_expanded != other.layout.main_expanded {
            changes.push(format!(
                "main expanded: {} → {}",
                self.layout.main_expanded, other.layout.main_expanded
            ));
        }
        if self.header_size != other.header_size {
            changes.push(format!(
                "header size: {} → {}",
                self.header_size, other.header_size
            ));
        }
        if self.bottom_panel_size != other.bottom_panel_size {
            changes.push(format!(
                "panel size: {} → {}",
                self.bottom_panel_size, other.bottom_panel_size
            ));
        }
        if self.dragging != other.dragging {
            changes.push(format!("dragging: {:?} → {:?}", self.dragging, other.dragging));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let model = AppModel::new(LayoutConfig::default(), Some((1280, 800)));
        let snapshot = LayoutSnapshot::from_model(&model);
        assert_eq!(snapshot.diff(&snapshot.clone()), None);
    }

    #[test]
    fn test_diff_lists_changed_fields() {
        let desktop = AppModel::new(LayoutConfig::default(), Some((1280, 800)));
        let mobile = AppModel::new(LayoutConfig::default(), Some((375, 800)));

        let diff = LayoutSnapshot::from_model(&desktop)
            .diff(&LayoutSnapshot::from_model(&mobile))
            .unwrap();
        assert_eq!(diff, "breakpoint: Desktop → Mobile; bottom panel: true → false");
    }
}
