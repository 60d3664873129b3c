//! Layout state - panel visibility, main expansion and configured sizes

use serde::{Deserialize, Serialize};

use super::viewport::BreakpointClass;

pub const DEFAULT_HEADER_HEIGHT: i32 = 80;
pub const DEFAULT_BOTTOM_PANEL_HEIGHT: i32 = 200;

/// Session-lifetime layout state
///
/// Mutated only through the four actions and [`LayoutState::apply_breakpoint`].
/// None of them can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    pub show_bottom_panel: bool,
    /// Only meaningful on `Mobile`
    pub main_expanded: bool,
    pub header_height: i32,
    pub bottom_panel_height: i32,
}

impl LayoutState {
    /// Session defaults for the initial breakpoint class
    pub fn new(class: BreakpointClass) -> Self {
        Self::with_sizes(class, DEFAULT_HEADER_HEIGHT, DEFAULT_BOTTOM_PANEL_HEIGHT)
    }

    pub fn with_sizes(class: BreakpointClass, header_height: i32, bottom_panel_height: i32) -> Self {
        Self {
            show_bottom_panel: !class.is_mobile(),
            main_expanded: false,
            header_height,
            bottom_panel_height,
        }
    }

    pub fn toggle_bottom_panel(&mut self) {
        self.show_bottom_panel = !self.show_bottom_panel;
    }

    pub fn toggle_main_expanded(&mut self) {
        self.main_expanded = !self.main_expanded;
    }

    /// Set the header height (no clamping at this layer)
    pub fn set_header_height(&mut self, height: i32) {
        self.header_height = height;
    }

    /// Set the bottom panel height (no clamping at this layer)
    pub fn set_bottom_panel_height(&mut self, height: i32) {
        self.bottom_panel_height = height;
    }

    /// Re-derive panel visibility after a breakpoint class change.
    ///
    /// Runs on every change, so it overrides any manual toggle made before it.
    pub fn apply_breakpoint(&mut self, class: BreakpointClass) {
        self.show_bottom_panel = !class.is_mobile();
    }

    /// Effective expansion: only honoured on `Mobile`
    pub fn is_main_expanded(&self, class: BreakpointClass) -> bool {
        class.is_mobile() && self.main_expanded
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(BreakpointClass::Mobile)
    }
}
