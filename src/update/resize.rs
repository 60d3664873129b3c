//! Drag-resize handlers
//!
//! Sizes reach the layout store only through the controllers' `on_resize`
//! reports, which are drained here in the same update that produced them.

use crate::commands::Cmd;
use crate::messages::ResizeMsg;
use crate::model::{AppModel, RegionId};

use super::layout::apply_layout_action;

pub fn update_resize(model: &mut AppModel, msg: ResizeMsg) -> Option<Cmd> {
    match msg {
        ResizeMsg::Begin { region, position } => {
            if !model.is_region_mounted(region) {
                return None;
            }

            let controller = model.regions.region_mut(region);
            controller.pointer_down(position);
            tracing::debug!(
                region = region.display_name(),
                size = controller.size(),
                "drag started"
            );

            Some(Cmd::Batch(vec![Cmd::CapturePointer(region), Cmd::Redraw]))
        }

        ResizeMsg::Drag { region, position } => {
            model.regions.region_mut(region).pointer_move(position)?;
            apply_resize_reports(model);
            Some(Cmd::Redraw)
        }

        ResizeMsg::End { region } => {
            if !model.regions.region_mut(region).pointer_up() {
                return None;
            }
            tracing::debug!(
                region = region.display_name(),
                size = model.regions.region(region).size(),
                "drag ended"
            );
            Some(Cmd::ReleasePointer(region))
        }

        ResizeMsg::Cancel { region } => {
            let restored = model.regions.region_mut(region).cancel()?;

            // The controller stays silent on cancel; write the restored size back
            // so the store matches what is visible.
            match region {
                RegionId::Header => model.layout.set_header_height(restored),
                RegionId::BottomPanel => model.layout.set_bottom_panel_height(restored),
            }
            tracing::debug!(region = region.display_name(), restored, "drag cancelled");

            Some(Cmd::ReleasePointer(region))
        }
    }
}

fn apply_resize_reports(model: &mut AppModel) {
    for msg in model.take_resize_reports() {
        apply_layout_action(&mut model.layout, msg);
    }
}
