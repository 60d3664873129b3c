//! Scroll-direction detection with a hysteresis band
//!
//! Raw scroll events are coalesced to at most one recomputation per rendered
//! frame. The latest offset recorded before the frame runs is the one used.

use serde::{Deserialize, Serialize};

/// Minimum offset delta (exclusive) before the direction may flip
pub const SCROLL_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

/// Debounced scroll output consumed by the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollSignal {
    pub direction: ScrollDirection,
    /// Last scroll offset, clamped to zero
    pub position: u64,
}

impl ScrollSignal {
    /// Whether the header should collapse for this signal
    ///
    /// The header collapses while the user scrolls down past `offset`.
    pub fn collapses_header(&self, offset: u64) -> bool {
        self.direction == ScrollDirection::Down && self.position > offset
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollDirectionDetector {
    signal: ScrollSignal,
    last_offset: i64,
    latest_offset: i64,
    /// Set while a frame recomputation is queued
    frame_pending: bool,
}

impl ScrollDirectionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> ScrollSignal {
        self.signal
    }

    pub fn direction(&self) -> ScrollDirection {
        self.signal.direction
    }

    pub fn position(&self) -> u64 {
        self.signal.position
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Record a raw scroll offset.
    ///
    /// Returns `true` when the caller must schedule an animation frame. Events
    /// arriving while a frame is already queued only replace the offset.
    pub fn on_scroll(&mut self, offset: i64) -> bool {
        self.latest_offset = offset;
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Run the queued recomputation.
    ///
    /// Returns the new signal, or `None` if no recomputation was queued.
    pub fn on_frame(&mut self) -> Option<ScrollSignal> {
        if !self.frame_pending {
            return None;
        }
        self.frame_pending = false;
        self.apply(self.latest_offset);
        Some(self.signal)
    }

    fn apply(&mut self, current: i64) {
        let delta = current.saturating_sub(self.last_offset);
        if delta.unsigned_abs() > SCROLL_THRESHOLD.unsigned_abs() {
            self.signal.direction = if delta > 0 {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            };
        }

        // Elastic overscroll can report negative offsets
        let position = current.max(0);
        self.signal.position = position as u64;
        self.last_offset = position;
    }
}
