//! Bitmap fonts
//!
//! A font covers a contiguous ASCII range `first..=last`. Each glyph is
//! `width` pixels wide and the font's `height` tall. Glyph rows are stored
//! top to bottom, `ceil(width / 8)` bytes per row, least-significant bit
//! first (bit 0 of the first byte is the leftmost pixel).

/// Per-character metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    /// Advance width in pixels
    pub width: u8,
    /// Start of the glyph's rows in [`Font::bitmap`]
    pub offset: u16,
}

/// Fixed-height proportional bitmap font
#[derive(Debug)]
pub struct Font {
    pub height: u8,
    pub first: u8,
    pub last: u8,
    /// One entry per character in `first..=last`
    pub glyphs: &'static [Glyph],
    pub bitmap: &'static [u8],
}

impl Font {
    /// Look up the glyph for `ch`
    pub fn glyph(&self, ch: char) -> Option<Glyph> {
        if !ch.is_ascii() {
            return None;
        }
        let code = ch as u8;
        if code < self.first || code > self.last {
            return None;
        }
        self.glyphs.get((code - self.first) as usize).copied()
    }

    /// Advance width of `ch`
    pub fn char_width(&self, ch: char) -> Option<u8> {
        self.glyph(ch).map(|g| g.width)
    }

    /// Sum of glyph widths; characters without a glyph contribute nothing
    pub fn line_width(&self, text: &str) -> u32 {
        text.chars()
            .filter_map(|ch| self.char_width(ch))
            .map(u32::from)
            .sum()
    }

    /// Row data for `glyph`, or `None` if the table points past the bitmap
    pub fn rows(&self, glyph: Glyph) -> Option<GlyphRows<'_>> {
        let stride = row_stride(glyph.width);
        let start = glyph.offset as usize;
        let data = self.bitmap.get(start..start + stride * self.height as usize)?;
        Some(GlyphRows { data, stride })
    }
}

/// Bytes per glyph row
pub const fn row_stride(width: u8) -> usize {
    (width as usize + 7) / 8
}

/// Borrowed bitmap of a single glyph
#[derive(Debug, Clone, Copy)]
pub struct GlyphRows<'a> {
    data: &'a [u8],
    stride: usize,
}

impl GlyphRows<'_> {
    /// Whether the pixel at (`col`, `row`) is set (foreground)
    pub fn pixel(&self, col: u8, row: u8) -> bool {
        let index = row as usize * self.stride + (col / 8) as usize;
        self.data
            .get(index)
            .is_some_and(|byte| byte & (1 << (col % 8)) != 0)
    }
}
