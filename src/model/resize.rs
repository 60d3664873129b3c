//! Pointer-drag resizing for edge-anchored regions
//!
//! A [`DragResizeController`] owns one resize affordance. It is idle until a
//! pointer-down lands on its handle, then converts every pointer move into a
//! clamped size until the pointer is released anywhere.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

pub const DEFAULT_MIN_SIZE: i32 = 100;
pub const DEFAULT_MAX_SIZE: i32 = 800;

/// Axis a region is resized along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAxis {
    /// Width changes, pointer x is tracked
    Horizontal,
    /// Height changes, pointer y is tracked
    Vertical,
}

/// Edge of the region that carries the drag handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl ResizeEdge {
    /// Sign applied to the pointer delta
    ///
    /// Dragging a bottom/right handle towards larger coordinates grows the
    /// region; dragging a top/left handle the same way shrinks it.
    pub fn direction_multiplier(&self) -> i32 {
        match self {
            ResizeEdge::Bottom | ResizeEdge::Right => 1,
            ResizeEdge::Top | ResizeEdge::Left => -1,
        }
    }
}

/// Per-region configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeConfig {
    pub axis: ResizeAxis,
    pub edge: ResizeEdge,
    pub default_size: i32,
    #[serde(default)]
    pub min_size: Option<i32>,
    #[serde(default)]
    pub max_size: Option<i32>,
}

impl ResizeConfig {
    pub fn new(axis: ResizeAxis, edge: ResizeEdge, default_size: i32) -> Self {
        Self {
            axis,
            edge,
            default_size,
            min_size: None,
            max_size: None,
        }
    }

    pub fn with_bounds(mut self, min_size: i32, max_size: i32) -> Self {
        self.min_size = Some(min_size);
        self.max_size = Some(max_size);
        self
    }

    pub fn min_size(&self) -> i32 {
        self.min_size.unwrap_or(DEFAULT_MIN_SIZE)
    }

    pub fn max_size(&self) -> i32 {
        self.max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Clamp a raw size into `[min, max]`.
    ///
    /// The bounds are not validated: if `max < min`, `min` wins because it is
    /// applied last.
    pub fn clamp(&self, raw: i32) -> i32 {
        raw.min(self.max_size()).max(self.min_size())
    }

    /// Coordinate of `point` along this region's axis
    pub fn coord(&self, point: Point) -> i32 {
        match self.axis {
            ResizeAxis::Vertical => point.y,
            ResizeAxis::Horizontal => point.x,
        }
    }
}

/// Ephemeral state captured between pointer-down and pointer-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub axis: ResizeAxis,
    pub edge: ResizeEdge,
    pub start_coord: i32,
    pub start_size: i32,
}

/// Sink receiving every size produced while dragging
pub type ResizeCallback = Box<dyn FnMut(i32)>;

pub struct DragResizeController {
    config: ResizeConfig,
    size: i32,
    session: Option<DragSession>,
    on_resize: Option<ResizeCallback>,
}

impl fmt::Debug for DragResizeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragResizeController")
            .field("config", &self.config)
            .field("size", &self.size)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl DragResizeController {
    pub fn new(config: ResizeConfig) -> Self {
        Self {
            size: config.default_size,
            config,
            session: None,
            on_resize: None,
        }
    }

    /// Builder form of [`DragResizeController::set_on_resize`]
    pub fn with_on_resize(mut self, on_resize: impl FnMut(i32) + 'static) -> Self {
        self.set_on_resize(on_resize);
        self
    }

    pub fn set_on_resize(&mut self, on_resize: impl FnMut(i32) + 'static) {
        self.on_resize = Some(Box::new(on_resize));
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Currently visible size
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Restart from a new default size, as when the region is mounted again.
    ///
    /// Any drag in progress is dropped without a report.
    pub fn remount(&mut self, default_size: i32) {
        self.config.default_size = default_size;
        self.size = default_size;
        self.session = None;
    }

    /// Pointer pressed on the handle: Idle → Dragging
    pub fn pointer_down(&mut self, position: Point) {
        self.session = Some(DragSession {
            axis: self.config.axis,
            edge: self.config.edge,
            start_coord: self.config.coord(position),
            start_size: self.size,
        });
    }

    /// Pointer moved anywhere in the document.
    ///
    /// Returns the new size (already reported to `on_resize`), or `None` when
    /// idle.
    pub fn pointer_move(&mut self, position: Point) -> Option<i32> {
        let session = self.session?;

        let diff = self.config.coord(position) - session.start_coord;
        let raw = session.start_size + diff * session.edge.direction_multiplier();
        let size = self.config.clamp(raw);

        self.size = size;
        if let Some(on_resize) = self.on_resize.as_mut() {
            on_resize(size);
        }
        Some(size)
    }

    /// Pointer released anywhere: Dragging → Idle.
    ///
    /// Returns whether a drag was in progress.
    pub fn pointer_up(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Abort the drag, restoring the size captured at pointer-down.
    ///
    /// `on_resize` is not invoked. Returns the restored size when a drag was
    /// in progress.
    pub fn cancel(&mut self) -> Option<i32> {
        let session = self.session.take()?;
        self.size = session.start_size;
        Some(session.start_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn vertical(edge: ResizeEdge) -> ResizeConfig {
        ResizeConfig::new(ResizeAxis::Vertical, edge, 200).with_bounds(100, 600)
    }

    #[test]
    fn test_direction_multiplier() {
        assert_eq!(ResizeEdge::Bottom.direction_multiplier(), 1);
        assert_eq!(ResizeEdge::Right.direction_multiplier(), 1);
        assert_eq!(ResizeEdge::Top.direction_multiplier(), -1);
        assert_eq!(ResizeEdge::Left.direction_multiplier(), -1);
    }

    #[test]
    fn test_default_bounds() {
        let config = ResizeConfig::new(ResizeAxis::Horizontal, ResizeEdge::Right, 250);
        assert_eq!(config.min_size(), 100);
        assert_eq!(config.max_size(), 800);
        assert_eq!(config.clamp(50), 100);
        assert_eq!(config.clamp(900), 800);
    }

    #[test]
    fn test_inverted_bounds_min_wins() {
        let config = ResizeConfig::new(ResizeAxis::Vertical, ResizeEdge::Top, 200)
            .with_bounds(300, 150);
        assert_eq!(config.clamp(0), 300);
        assert_eq!(config.clamp(200), 300);
        assert_eq!(config.clamp(1000), 300);
    }

    #[test]
    fn test_horizontal_tracks_x() {
        let config = ResizeConfig::new(ResizeAxis::Horizontal, ResizeEdge::Right, 250);
        let mut controller = DragResizeController::new(config);
        controller.pointer_down(Point::new(250, 40));
        assert_eq!(controller.pointer_move(Point::new(300, 900)), Some(300));
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reports);
        let mut controller = DragResizeController::new(vertical(ResizeEdge::Bottom))
            .with_on_resize(move |size| sink.borrow_mut().push(size));

        assert_eq!(controller.pointer_move(Point::new(0, 500)), None);
        assert!(reports.borrow().is_empty());
        assert_eq!(controller.size(), 200);
    }

    #[test]
    fn test_cancel_restores_without_report() {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reports);
        let mut controller = DragResizeController::new(vertical(ResizeEdge::Bottom))
            .with_on_resize(move |size| sink.borrow_mut().push(size));

        controller.pointer_down(Point::new(0, 300));
        controller.pointer_move(Point::new(0, 350));
        assert_eq!(controller.size(), 250);

        assert_eq!(controller.cancel(), Some(200));
        assert_eq!(controller.size(), 200);
        assert!(!controller.is_dragging());
        assert_eq!(*reports.borrow(), vec![250]);

        assert_eq!(controller.cancel(), None);
    }

    #[test]
    fn test_remount_drops_session() {
        let mut controller = DragResizeController::new(vertical(ResizeEdge::Top));
        controller.pointer_down(Point::new(0, 300));
        controller.remount(320);
        assert!(!controller.is_dragging());
        assert_eq!(controller.size(), 320);
        assert_eq!(controller.config().default_size, 320);
    }
}
