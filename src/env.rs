//! Environment hub - the injected viewport and pointer source
//!
//! The host (a window runtime, the replay driver, or a test) pushes window,
//! scroll, pointer and key signals into an [`Environment`]. Observers register
//! listeners per [`EnvEventKind`] and receive an owned [`Subscription`]; the
//! listener is removed when the subscription is dropped.
//!
//! Everything here is single-threaded. Dispatch snapshots the listener list
//! before invoking it, so listeners may subscribe or unsubscribe (including
//! themselves) while an event is being delivered.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::geometry::Point;

/// Keys the coordinator reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Character(char),
}

/// A signal delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvEvent {
    Resize { width: u32, height: u32 },
    Scroll { offset: i64 },
    PointerDown { position: Point },
    PointerMove { position: Point },
    PointerUp { position: Point },
    KeyDown(Key),
}

impl EnvEvent {
    pub fn kind(&self) -> EnvEventKind {
        match self {
            EnvEvent::Resize { .. } => EnvEventKind::Resize,
            EnvEvent::Scroll { .. } => EnvEventKind::Scroll,
            EnvEvent::PointerDown { .. } => EnvEventKind::PointerDown,
            EnvEvent::PointerMove { .. } => EnvEventKind::PointerMove,
            EnvEvent::PointerUp { .. } => EnvEventKind::PointerUp,
            EnvEvent::KeyDown(_) => EnvEventKind::KeyDown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvEventKind {
    Resize,
    Scroll,
    PointerDown,
    PointerMove,
    PointerUp,
    KeyDown,
}

type Listener = Rc<RefCell<dyn FnMut(&EnvEvent)>>;
type FrameCallback = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(u64);

struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, EnvEventKind, Listener)>,
    frames: Vec<FrameCallback>,
    window_size: Option<(u32, u32)>,
}

/// Cloneable handle to the shared signal hub
#[derive(Clone)]
pub struct Environment {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("Environment")
            .field("window_size", &registry.window_size)
            .field("listeners", &registry.listeners.len())
            .field("pending_frames", &registry.frames.len())
            .finish()
    }
}

impl Environment {
    fn with_size(window_size: Option<(u32, u32)>) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
                frames: Vec::new(),
                window_size,
            })),
        }
    }

    /// An environment without an observable window
    pub fn headless() -> Self {
        Self::with_size(None)
    }

    /// An environment backed by a window of the given logical size
    pub fn with_window(width: u32, height: u32) -> Self {
        Self::with_size(Some((width, height)))
    }

    /// Current window size, `None` when there is no window
    pub fn window_size(&self) -> Option<(u32, u32)> {
        self.registry.borrow().window_size
    }

    /// Register a listener for one kind of event
    pub fn subscribe(
        &self,
        kind: EnvEventKind,
        listener: impl FnMut(&EnvEvent) + 'static,
    ) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry
            .listeners
            .push((id, kind, Rc::new(RefCell::new(listener))));

        Subscription {
            id,
            kind,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Number of live listeners for `kind`
    pub fn listener_count(&self, kind: EnvEventKind) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .count()
    }

    /// Deliver an event to every listener of its kind
    pub fn emit(&self, event: EnvEvent) {
        let kind = event.kind();
        let listeners: Vec<Listener> = {
            let mut registry = self.registry.borrow_mut();
            if let EnvEvent::Resize { width, height } = event {
                registry.window_size = Some((width, height));
            }
            registry
                .listeners
                .iter()
                .filter(|(_, k, _)| *k == kind)
                .map(|(_, _, listener)| Rc::clone(listener))
                .collect()
        };

        for listener in listeners {
            // A listener already on the stack is not re-entered
            if let Ok(mut listener) = listener.try_borrow_mut() {
                listener(&event);
            }
        }
    }

    /// Queue a callback for the next animation frame
    pub fn request_animation_frame(&self, callback: impl FnOnce() + 'static) {
        self.registry.borrow_mut().frames.push(Box::new(callback));
    }

    /// Number of callbacks waiting for the next frame
    pub fn pending_frames(&self) -> usize {
        self.registry.borrow().frames.len()
    }

    /// Run every callback queued before this call.
    ///
    /// Callbacks queued while the frame runs wait for the following frame.
    /// Returns how many callbacks ran.
    pub fn run_animation_frame(&self) -> usize {
        let frames = std::mem::take(&mut self.registry.borrow_mut().frames);
        let count = frames.len();
        for callback in frames {
            callback();
        }
        count
    }
}

/// Owned listener registration; dropping it removes the listener
#[must_use = "dropping a Subscription immediately removes its listener"]
pub struct Subscription {
    id: ListenerId,
    kind: EnvEventKind,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn kind(&self) -> EnvEventKind {
        self.kind
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id.0)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _, _)| *id != self.id);
        }
    }
}
