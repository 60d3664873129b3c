//! Layout store handlers (panel visibility, expansion, sizes)

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::{AppModel, LayoutState, RegionId};

/// Handle one of the four layout store actions
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    let was_shown = model.layout.show_bottom_panel;
    apply_layout_action(&mut model.layout, msg);

    match msg {
        LayoutMsg::ToggleBottomPanel => {
            Cmd::merge(Some(Cmd::Redraw), sync_bottom_panel_mount(model, was_shown))
        }

        LayoutMsg::ToggleMainExpanded => Some(Cmd::Redraw),

        LayoutMsg::SetHeaderHeight(height) => {
            // An explicit set while idle moves the visible header too
            if !model.regions.header.is_dragging() {
                model.regions.header.remount(height);
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::SetBottomPanelHeight(height) => {
            if !model.regions.bottom_panel.is_dragging() {
                model.regions.bottom_panel.remount(height);
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Pure store transition for one action
pub(crate) fn apply_layout_action(state: &mut LayoutState, msg: LayoutMsg) {
    match msg {
        LayoutMsg::ToggleBottomPanel => state.toggle_bottom_panel(),
        LayoutMsg::ToggleMainExpanded => state.toggle_main_expanded(),
        LayoutMsg::SetHeaderHeight(height) => state.set_header_height(height),
        LayoutMsg::SetBottomPanelHeight(height) => state.set_bottom_panel_height(height),
    }
}

/// Mount or unmount the bottom panel after its visibility changed
///
/// Showing the panel restarts its controller from the stored height. Hiding it
/// ends any drag on it, which must release the pointer capture.
pub(crate) fn sync_bottom_panel_mount(model: &mut AppModel, was_shown: bool) -> Option<Cmd> {
    match (was_shown, model.layout.show_bottom_panel) {
        (false, true) => {
            let height = model.layout.bottom_panel_height;
            model.regions.bottom_panel.remount(height);
            None
        }
        (true, false) => {
            if model.regions.bottom_panel.pointer_up() {
                tracing::debug!("bottom panel hidden mid-drag, releasing pointer");
                Some(Cmd::ReleasePointer(RegionId::BottomPanel))
            } else {
                None
            }
        }
        _ => None,
    }
}
