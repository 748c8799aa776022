//! Points, lines and rectangles in logical panel coordinates

/// Pixel position, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned line segment; direction is chosen by the drawing call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Line {
    pub origin: Point,
    pub length: u16,
}

impl Line {
    pub const fn new(origin: Point, length: u16) -> Self {
        Self { origin, length }
    }

    /// As a one-pixel-high rectangle
    pub const fn horizontal(self) -> Rect {
        Rect::new(self.origin, self.length, 1)
    }

    /// As a one-pixel-wide rectangle
    pub const fn vertical(self) -> Rect {
        Rect::new(self.origin, 1, self.length)
    }
}

/// Rectangle with top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub origin: Point,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(origin: Point, width: u16, height: u16) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Clip against a `width × height` surface
    ///
    /// Returns `None` when the origin lies outside the surface; the result
    /// may be empty when the rectangle itself is.
    pub fn clip(&self, width: u16, height: u16) -> Option<Rect> {
        if self.origin.x >= width || self.origin.y >= height {
            return None;
        }
        Some(Rect {
            origin: self.origin,
            width: self.width.min(width - self.origin.x),
            height: self.height.min(height - self.origin.y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_inside() {
        let r = Rect::new(Point::new(10, 10), 20, 20);
        assert_eq!(r.clip(160, 128), Some(r));
    }

    #[test]
    fn test_clip_right_and_bottom() {
        let r = Rect::new(Point::new(150, 120), 20, 20);
        assert_eq!(r.clip(160, 128), Some(Rect::new(Point::new(150, 120), 10, 8)));
    }

    #[test]
    fn test_clip_origin_outside() {
        assert_eq!(Rect::new(Point::new(160, 0), 1, 1).clip(160, 128), None);
        assert_eq!(Rect::new(Point::new(0, 128), 1, 1).clip(160, 128), None);
    }

    #[test]
    fn test_line_rects() {
        let line = Line::new(Point::new(3, 4), 7);
        assert_eq!(line.horizontal(), Rect::new(Point::new(3, 4), 7, 1));
        assert_eq!(line.vertical(), Rect::new(Point::new(3, 4), 1, 7));
    }
}
