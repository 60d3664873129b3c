//! Integer geometry shared by the resize controller and the composer
//!
//! Coordinates are logical pixels with the origin at the top-left corner of
//! the viewport.

use serde::{Deserialize, Serialize};

/// A pointer position in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a floating point position (as delivered by windowing systems)
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10, 10, 20, 5);
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(29, 14)));
        assert!(!rect.contains(Point::new(30, 10)));
        assert!(!rect.contains(Point::new(10, 15)));
    }

    #[test]
    fn test_point_from_f64_rounds() {
        assert_eq!(Point::from_f64(10.4, 20.6), Point::new(10, 21));
    }
}
