//! Scroll handlers - frame-coalesced direction detection

use crate::commands::Cmd;
use crate::messages::ScrollMsg;
use crate::model::AppModel;

pub fn update_scroll(model: &mut AppModel, msg: ScrollMsg) -> Option<Cmd> {
    match msg {
        ScrollMsg::Scrolled(offset) => {
            if model.scroll.on_scroll(offset) {
                Some(Cmd::RequestAnimationFrame)
            } else {
                None
            }
        }

        ScrollMsg::AnimationFrame => {
            let before = model.scroll.signal();
            let collapsed_before = model.header_collapsed();

            let after = model.scroll.on_frame()?;

            if before.direction != after.direction {
                tracing::trace!(
                    direction = ?after.direction,
                    position = after.position,
                    "scroll direction changed"
                );
            }

            if before != after || collapsed_before != model.header_collapsed() {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
