//! Resizable regions of the page and their drag controllers

use serde::{Deserialize, Serialize};

use super::resize::DragResizeController;
use crate::config::LayoutConfig;

/// Identifies a resizable region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionId {
    Header,
    BottomPanel,
}

impl RegionId {
    /// All regions for iteration
    pub const ALL: [RegionId; 2] = [RegionId::Header, RegionId::BottomPanel];

    pub fn display_name(&self) -> &'static str {
        match self {
            RegionId::Header => "header",
            RegionId::BottomPanel => "bottom panel",
        }
    }
}

/// One independent controller per region
#[derive(Debug)]
pub struct ResizeRegions {
    pub header: DragResizeController,
    pub bottom_panel: DragResizeController,
}

impl ResizeRegions {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            header: DragResizeController::new(config.header_resize_config()),
            bottom_panel: DragResizeController::new(config.bottom_panel_resize_config()),
        }
    }

    /// Get controller by region
    pub fn region(&self, id: RegionId) -> &DragResizeController {
        match id {
            RegionId::Header => &self.header,
            RegionId::BottomPanel => &self.bottom_panel,
        }
    }

    /// Get mutable controller by region
    pub fn region_mut(&mut self, id: RegionId) -> &mut DragResizeController {
        match id {
            RegionId::Header => &mut self.header,
            RegionId::BottomPanel => &mut self.bottom_panel,
        }
    }

    /// Regions with a drag in progress
    pub fn dragging(&self) -> Vec<RegionId> {
        RegionId::ALL
            .into_iter()
            .filter(|&id| self.region(id).is_dragging())
            .collect()
    }
}
