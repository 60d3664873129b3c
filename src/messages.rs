//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::geometry::Point;
use crate::model::RegionId;

/// Window size observations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMsg {
    /// Window resized (logical pixels)
    Resized { width: u32, height: u32 },
}

/// Scroll observations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMsg {
    /// Raw vertical scroll offset; may be negative during elastic overscroll
    Scrolled(i64),
    /// An animation frame requested via `Cmd::RequestAnimationFrame` fired
    AnimationFrame,
}

/// Layout store actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMsg {
    ToggleBottomPanel,
    ToggleMainExpanded,
    SetHeaderHeight(i32),
    SetBottomPanelHeight(i32),
}

/// Drag-resize interaction on one region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMsg {
    /// Pointer pressed on the region's handle
    Begin { region: RegionId, position: Point },
    /// Pointer moved while captured
    Drag { region: RegionId, position: Point },
    /// Pointer released anywhere
    End { region: RegionId },
    /// Drag aborted (Escape); restores the size from pointer-down
    Cancel { region: RegionId },
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Viewport(ViewportMsg),
    Scroll(ScrollMsg),
    Layout(LayoutMsg),
    Resize(ResizeMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a window resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::Viewport(ViewportMsg::Resized { width, height })
    }

    /// Create a scroll message
    pub fn scroll(offset: i64) -> Self {
        Msg::Scroll(ScrollMsg::Scrolled(offset))
    }

    /// Create an animation frame message
    pub fn frame() -> Self {
        Msg::Scroll(ScrollMsg::AnimationFrame)
    }
}

impl From<LayoutMsg> for Msg {
    fn from(msg: LayoutMsg) -> Self {
        Msg::Layout(msg)
    }
}

impl From<ResizeMsg> for Msg {
    fn from(msg: ResizeMsg) -> Self {
        Msg::Resize(msg)
    }
}
