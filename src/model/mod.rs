//! Application model - the complete state of the layout coordinator
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod layout;
pub mod regions;
pub mod resize;
pub mod scroll;
pub mod viewport;

pub use layout::LayoutState;
pub use regions::{RegionId, ResizeRegions};
pub use resize::{
    DragResizeController, DragSession, ResizeAxis, ResizeCallback, ResizeConfig, ResizeEdge,
};
pub use scroll::{ScrollDirection, ScrollDirectionDetector, ScrollSignal};
pub use viewport::{classify, BreakpointChange, BreakpointClass, ViewportClassifier};

use std::sync::mpsc::{self, Receiver};

use crate::config::LayoutConfig;
use crate::messages::LayoutMsg;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Window width and breakpoint class
    pub viewport: ViewportClassifier,
    /// Debounced scroll direction
    pub scroll: ScrollDirectionDetector,
    /// Panel visibility, expansion and configured sizes
    pub layout: LayoutState,
    /// Drag controllers, one per resizable region
    pub regions: ResizeRegions,
    /// Configuration the session was started with
    pub config: LayoutConfig,
    /// Size reports sent by the region controllers' `on_resize` sinks
    resize_reports: Receiver<LayoutMsg>,
}

impl AppModel {
    /// Create a new model.
    ///
    /// `window_size` is `None` when there is no observable window.
    pub fn new(config: LayoutConfig, window_size: Option<(u32, u32)>) -> Self {
        let viewport = ViewportClassifier::new(window_size);
        let layout = LayoutState::with_sizes(
            viewport.class(),
            config.header_height,
            config.bottom_panel_height,
        );

        let (tx, resize_reports) = mpsc::channel();
        let mut regions = ResizeRegions::new(&config);

        let header_tx = tx.clone();
        regions.header.set_on_resize(move |size| {
            let _ = header_tx.send(LayoutMsg::SetHeaderHeight(size));
        });
        regions.bottom_panel.set_on_resize(move |size| {
            let _ = tx.send(LayoutMsg::SetBottomPanelHeight(size));
        });

        Self {
            viewport,
            scroll: ScrollDirectionDetector::new(),
            layout,
            regions,
            config,
            resize_reports,
        }
    }

    /// Model for a non-interactive render context (width 0, `Mobile`)
    pub fn headless(config: LayoutConfig) -> Self {
        Self::new(config, None)
    }

    /// Current breakpoint class
    #[inline]
    pub fn breakpoint(&self) -> BreakpointClass {
        self.viewport.class()
    }

    /// Whether the header is collapsed by the current scroll signal
    pub fn header_collapsed(&self) -> bool {
        self.scroll
            .signal()
            .collapses_header(self.config.header_collapse_offset)
    }

    /// Whether the region is currently mounted by the composer
    pub fn is_region_mounted(&self, region: RegionId) -> bool {
        match region {
            RegionId::Header => true,
            RegionId::BottomPanel => self.layout.show_bottom_panel,
        }
    }

    /// Drain size reports queued by the region controllers
    pub fn take_resize_reports(&mut self) -> Vec<LayoutMsg> {
        self.resize_reports.try_iter().collect()
    }
}
