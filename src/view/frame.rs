//! Frame abstraction for drawing primitives
//!
//! Wraps the pixel buffer so rendering code never indexes it directly.
//! Rectangles arrive in logical pixels and are scaled on the way in.

use strata::geometry::Rect;

/// A frame buffer wrapper providing clipped drawing primitives.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    scale: f64,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer actually holds.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize, scale: f64) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };

        Self {
            buffer,
            width,
            height,
            scale,
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Convert a logical rectangle to clipped physical pixel bounds
    fn bounds(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let to_px = |v: i32| (v as f64 * self.scale).round().max(0.0) as usize;
        let x0 = to_px(rect.x).min(self.width);
        let y0 = to_px(rect.y).min(self.height);
        let x1 = to_px(rect.right()).min(self.width);
        let y1 = to_px(rect.bottom()).min(self.height);
        (x0, y0, x1, y1)
    }

    /// Fill a rectangle given in logical pixels
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.bounds(rect);
        if x0 >= x1 {
            return;
        }
        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Draw a one-pixel outline around a logical rectangle
    pub fn stroke_rect(&mut self, rect: Rect, color: u32) {
        if rect.is_empty() {
            return;
        }
        let (x0, y0, x1, y1) = self.bounds(rect);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for x in x0..x1 {
            self.buffer[y0 * self.width + x] = color;
            self.buffer[(y1 - 1) * self.width + x] = color;
        }
        for y in y0..y1 {
            self.buffer[y * self.width + x0] = color;
            self.buffer[y * self.width + x1 - 1] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips_to_buffer() {
        let mut buffer = vec![0u32; 4 * 3];
        let mut frame = Frame::new(&mut buffer, 4, 3, 1.0);
        frame.fill_rect(Rect::new(2, 1, 10, 10), 7);

        assert_eq!(&buffer[0..4], &[0, 0, 0, 0]);
        assert_eq!(&buffer[4..8], &[0, 0, 7, 7]);
        assert_eq!(&buffer[8..12], &[0, 0, 7, 7]);
    }

    #[test]
    fn test_fill_rect_scales_logical_pixels() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut frame = Frame::new(&mut buffer, 4, 4, 2.0);
        frame.fill_rect(Rect::new(0, 0, 1, 1), 1);

        assert_eq!(buffer.iter().filter(|&&px| px == 1).count(), 4);
    }

    #[test]
    fn test_short_buffer_reduces_height() {
        let mut buffer = vec![0u32; 4 * 2];
        let mut frame = Frame::new(&mut buffer, 4, 10, 1.0);
        frame.fill_rect(Rect::new(0, 0, 4, 10), 3);
        assert!(buffer.iter().all(|&px| px == 3));
    }
}
