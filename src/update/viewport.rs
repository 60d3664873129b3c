//! Viewport handlers - breakpoint classification and the store's reaction

use crate::commands::Cmd;
use crate::messages::ViewportMsg;
use crate::model::AppModel;

use super::layout::sync_bottom_panel_mount;

pub fn update_viewport(model: &mut AppModel, msg: ViewportMsg) -> Option<Cmd> {
    match msg {
        ViewportMsg::Resized { width, height } => {
            let Some(change) = model.viewport.observe(width, height) else {
                return Some(Cmd::Redraw);
            };

            tracing::debug!(
                from = change.from.label(),
                to = change.to.label(),
                width,
                "breakpoint changed"
            );

            // Reaction, not an action: re-derive visibility on every change
            let was_shown = model.layout.show_bottom_panel;
            model.layout.apply_breakpoint(change.to);

            Cmd::merge(Some(Cmd::Redraw), sync_bottom_panel_mount(model, was_shown))
        }
    }
}
