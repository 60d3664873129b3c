//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

pub mod layout;
mod resize;
mod scroll;
mod viewport;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use layout::update_layout;
pub use resize::update_resize;
pub use scroll::update_scroll;
pub use viewport::update_viewport;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Viewport(m) => viewport::update_viewport(model, m),
        Msg::Scroll(m) => scroll::update_scroll(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Resize(m) => resize::update_resize(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state and logs diffs for debugging.
/// Raw scroll and drag-move messages are too frequent to log individually.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{ResizeMsg, ScrollMsg};

    let is_noisy = matches!(
        &msg,
        Msg::Scroll(ScrollMsg::Scrolled(_)) | Msg::Resize(ResizeMsg::Drag { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Viewport::Resized { width: 1280, height: 800 }`
/// - `Layout::ToggleBottomPanel`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Viewport(m) => format!("Viewport::{:?}", m),
        Msg::Scroll(m) => format!("Scroll::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Resize(m) => format!("Resize::{:?}", m),
    }
}
