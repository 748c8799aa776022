//! Address-window encoding
//!
//! CASET and RASET each take four bytes: start and end coordinate as
//! big-endian 16-bit values. The window is inclusive on both ends and is
//! filled in raster order by the data that follows RAMWR.

/// Rectangular panel region targeted by the next pixel burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl AddressWindow {
    /// Window covering `width × height` pixels from `(x, y)`
    ///
    /// Returns `None` for an empty region.
    pub fn from_origin(x: u16, y: u16, width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            x0: x,
            y0: y,
            x1: x.checked_add(width - 1)?,
            y1: y.checked_add(height - 1)?,
        })
    }

    /// Shift by the panel's RAM offset
    pub fn offset(self, col: u16, row: u16) -> Self {
        Self {
            x0: self.x0.saturating_add(col),
            y0: self.y0.saturating_add(row),
            x1: self.x1.saturating_add(col),
            y1: self.y1.saturating_add(row),
        }
    }

    /// Number of pixels in the window
    pub fn area(&self) -> u32 {
        (self.x1 - self.x0 + 1) as u32 * (self.y1 - self.y0 + 1) as u32
    }

    /// CASET parameter bytes
    pub fn column_args(&self) -> [u8; 4] {
        encode_span(self.x0, self.x1)
    }

    /// RASET parameter bytes
    pub fn row_args(&self) -> [u8; 4] {
        encode_span(self.y0, self.y1)
    }
}

fn encode_span(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_panel_window() {
        let w = AddressWindow::from_origin(0, 0, 160, 128).unwrap();
        assert_eq!(w.column_args(), [0, 0, 0, 159]);
        assert_eq!(w.row_args(), [0, 0, 0, 127]);
        assert_eq!(w.area(), 160 * 128);
    }

    #[test]
    fn test_single_pixel_window() {
        let w = AddressWindow::from_origin(10, 20, 1, 1).unwrap();
        assert_eq!(w.column_args(), [0, 10, 0, 10]);
        assert_eq!(w.row_args(), [0, 20, 0, 20]);
        assert_eq!(w.area(), 1);
    }

    #[test]
    fn test_empty_window() {
        assert_eq!(AddressWindow::from_origin(0, 0, 0, 5), None);
        assert_eq!(AddressWindow::from_origin(0, 0, 5, 0), None);
    }

    #[test]
    fn test_offset() {
        let w = AddressWindow::from_origin(0, 0, 128, 160)
            .unwrap()
            .offset(2, 1);
        assert_eq!(w.column_args(), [0, 2, 0, 129]);
        assert_eq!(w.row_args(), [0, 1, 0, 160]);
    }
}
