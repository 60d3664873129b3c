//! Coordinator - wires the environment hub to the update loop
//!
//! A [`Coordinator`] owns the [`AppModel`] and the subscriptions that feed it.
//! Window resizes, scroll offsets and pointer presses arrive from the
//! [`Environment`], become [`Msg`]s, run through [`update`], and the returned
//! [`Cmd`]s are executed against the environment: animation frames are
//! requested, pointer captures attached and released.
//!
//! Listeners only hold weak references to the coordinator state. Dropping the
//! coordinator removes every listener it registered, including pointer
//! captures of an in-flight drag, and turns queued frame callbacks into no-ops.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::commands::Cmd;
use crate::composer::{compose, HitTarget, LayoutPlan};
use crate::config::LayoutConfig;
use crate::env::{EnvEvent, EnvEventKind, Environment, Key, Subscription};
use crate::messages::{LayoutMsg, Msg, ResizeMsg};
use crate::model::{AppModel, RegionId};
use crate::tracing::LayoutSnapshot;
use crate::update::update;

/// Document-wide listeners attached for one region's drag
struct PointerCapture {
    _subscriptions: [Subscription; 3],
}

struct Core {
    model: AppModel,
    env: Environment,
    captures: HashMap<RegionId, PointerCapture>,
    redraw_requested: bool,
}

/// Live binding between an [`Environment`] and the layout model
pub struct Coordinator {
    core: Rc<RefCell<Core>>,
    env: Environment,
    _subscriptions: Vec<Subscription>,
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let core = self.core.borrow();
        f.debug_struct("Coordinator")
            .field("model", &core.model)
            .field("captures", &core.captures.keys().collect::<Vec<_>>())
            .field("redraw_requested", &core.redraw_requested)
            .finish()
    }
}

impl Coordinator {
    /// Build the model from the environment's current window and start
    /// listening for resize, scroll and pointer-down events.
    pub fn attach(env: &Environment, config: LayoutConfig) -> Self {
        let model = AppModel::new(config, env.window_size());
        tracing::debug!(
            width = model.viewport.width(),
            breakpoint = model.breakpoint().label(),
            "coordinator attached"
        );

        let core = Rc::new(RefCell::new(Core {
            model,
            env: env.clone(),
            captures: HashMap::new(),
            redraw_requested: true,
        }));

        let subscriptions = vec![
            listen(env, &core, EnvEventKind::Resize, |event| match *event {
                EnvEvent::Resize { width, height } => Some(Msg::resize(width, height)),
                _ => None,
            }),
            listen(env, &core, EnvEventKind::Scroll, |event| match *event {
                EnvEvent::Scroll { offset } => Some(Msg::scroll(offset)),
                _ => None,
            }),
            pointer_down_listener(env, &core),
        ];

        Self {
            core,
            env: env.clone(),
            _subscriptions: subscriptions,
        }
    }

    /// The environment this coordinator listens to
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Run one message through the update loop and execute its commands
    pub fn dispatch(&self, msg: Msg) {
        dispatch(&self.core, msg);
    }

    /// Read access to the model
    pub fn with_model<R>(&self, f: impl FnOnce(&AppModel) -> R) -> R {
        f(&self.core.borrow().model)
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        self.with_model(LayoutSnapshot::from_model)
    }

    pub fn plan(&self) -> LayoutPlan {
        self.with_model(compose)
    }

    /// Whether a redraw was requested since the last call; clears the flag
    pub fn take_redraw(&self) -> bool {
        std::mem::take(&mut self.core.borrow_mut().redraw_requested)
    }

    /// Whether a drag on `region` currently holds the pointer
    pub fn is_capturing(&self, region: RegionId) -> bool {
        self.core.borrow().captures.contains_key(&region)
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        tracing::debug!("coordinator detached");
    }
}

fn dispatch(core: &Rc<RefCell<Core>>, msg: Msg) {
    let cmd = {
        let mut core = core.borrow_mut();
        update(&mut core.model, msg)
    };
    if let Some(cmd) = cmd {
        process_cmd(core, cmd);
    }
}

fn process_cmd(core: &Rc<RefCell<Core>>, cmd: Cmd) {
    if cmd.needs_redraw() {
        core.borrow_mut().redraw_requested = true;
    }

    for cmd in cmd.flatten() {
        match cmd {
            Cmd::None | Cmd::Redraw | Cmd::Batch(_) => {}

            Cmd::RequestAnimationFrame => {
                let env = core.borrow().env.clone();
                let weak = Rc::downgrade(core);
                env.request_animation_frame(move || {
                    if let Some(core) = weak.upgrade() {
                        dispatch(&core, Msg::frame());
                    }
                });
            }

            Cmd::CapturePointer(region) => {
                let capture = capture_pointer(core, region);
                core.borrow_mut().captures.insert(region, capture);
            }

            Cmd::ReleasePointer(region) => {
                // Bind first so the subscriptions drop after the borrow ends
                let released = core.borrow_mut().captures.remove(&region);
                drop(released);
            }
        }
    }
}

fn listen(
    env: &Environment,
    core: &Rc<RefCell<Core>>,
    kind: EnvEventKind,
    to_msg: impl Fn(&EnvEvent) -> Option<Msg> + 'static,
) -> Subscription {
    let weak: Weak<RefCell<Core>> = Rc::downgrade(core);
    env.subscribe(kind, move |event| {
        let Some(core) = weak.upgrade() else {
            return;
        };
        if let Some(msg) = to_msg(event) {
            dispatch(&core, msg);
        }
    })
}

fn pointer_down_listener(env: &Environment, core: &Rc<RefCell<Core>>) -> Subscription {
    let weak = Rc::downgrade(core);
    listen(env, core, EnvEventKind::PointerDown, move |event| {
        let EnvEvent::PointerDown { position } = *event else {
            return None;
        };
        let core = weak.upgrade()?;
        let target = compose(&core.borrow().model).hit_test(position)?;

        let msg: Msg = match target {
            HitTarget::ResizeHandle(region) => ResizeMsg::Begin { region, position }.into(),
            HitTarget::FloatingButton | HitTarget::ClosePanel => {
                LayoutMsg::ToggleBottomPanel.into()
            }
            HitTarget::ToggleExpanded => LayoutMsg::ToggleMainExpanded.into(),
        };
        Some(msg)
    })
}

fn capture_pointer(core: &Rc<RefCell<Core>>, region: RegionId) -> PointerCapture {
    let env = core.borrow().env.clone();

    let on_move = listen(&env, core, EnvEventKind::PointerMove, move |event| {
        match *event {
            EnvEvent::PointerMove { position } => {
                Some(Msg::Resize(ResizeMsg::Drag { region, position }))
            }
            _ => None,
        }
    });
    let on_up = listen(&env, core, EnvEventKind::PointerUp, move |event| {
        matches!(event, EnvEvent::PointerUp { .. })
            .then(|| Msg::Resize(ResizeMsg::End { region }))
    });
    let on_escape = listen(&env, core, EnvEventKind::KeyDown, move |event| {
        matches!(event, EnvEvent::KeyDown(Key::Escape))
            .then(|| Msg::Resize(ResizeMsg::Cancel { region }))
    });

    tracing::trace!(region = region.display_name(), "pointer captured");
    PointerCapture {
        _subscriptions: [on_move, on_up, on_escape],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_attach_registers_base_listeners() {
        let env = Environment::with_window(1280, 800);
        let coordinator = Coordinator::attach(&env, LayoutConfig::default());

        assert_eq!(env.listener_count(EnvEventKind::Resize), 1);
        assert_eq!(env.listener_count(EnvEventKind::Scroll), 1);
        assert_eq!(env.listener_count(EnvEventKind::PointerDown), 1);
        assert_eq!(env.listener_count(EnvEventKind::PointerMove), 0);

        drop(coordinator);
        assert_eq!(env.listener_count(EnvEventKind::Resize), 0);
        assert_eq!(env.listener_count(EnvEventKind::PointerDown), 0);
    }

    #[test]
    fn test_frame_after_drop_is_noop() {
        let env = Environment::with_window(1280, 800);
        let coordinator = Coordinator::attach(&env, LayoutConfig::default());
        env.emit(EnvEvent::Scroll { offset: 300 });
        assert_eq!(env.pending_frames(), 1);

        drop(coordinator);
        assert_eq!(env.run_animation_frame(), 1);
    }

    #[test]
    fn test_pointer_down_outside_targets_does_nothing() {
        let env = Environment::with_window(1280, 800);
        let coordinator = Coordinator::attach(&env, LayoutConfig::default());
        coordinator.take_redraw();

        env.emit(EnvEvent::PointerDown {
            position: Point::new(640, 300),
        });
        assert!(!coordinator.take_redraw());
        assert!(!coordinator.is_capturing(RegionId::Header));
    }
}
