//! Display backend trait
//!
//! Defines the drawing surface that the text layer, menus and the console
//! render to.

use panelkit_protocol::ScriptError;

use crate::color::Rgb24;
use crate::font::Font;
use crate::geometry::{Line, Point, Rect};

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Origin lies outside the logical surface
    OutOfBounds,
    /// Streaming call without an open session
    SessionNotOpen,
    /// Operation attempted while a streaming session is open
    SessionOpen,
    /// More pixels pushed than the session region holds
    SessionOverflow,
    /// Buffer length does not match the pixel format or region
    InvalidLength,
    /// Text operation without a selected font
    NoFont,
    /// Character outside the font's range
    GlyphMissing(char),
    /// Malformed init script
    Script(ScriptError),
}

impl From<ScriptError> for DisplayError {
    fn from(e: ScriptError) -> Self {
        DisplayError::Script(e)
    }
}

/// Graphics surface trait
///
/// Provides the pixel-level interface used by [`crate::text`] and
/// [`crate::console`]. Coordinates are logical, after rotation; regions
/// that run past the right or bottom edge are clipped, origins outside the
/// surface fail with [`DisplayError::OutOfBounds`].
pub trait GraphicsBackend {
    /// Logical (width, height) in pixels
    fn size(&self) -> (u16, u16);

    /// Currently selected font
    fn font(&self) -> Option<&'static Font>;

    /// Fill the whole surface with white
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Fill a rectangle with a solid colour
    fn fill_rect(&mut self, rect: Rect, color: Rgb24) -> Result<(), DisplayError>;

    /// Draw a horizontal line
    fn draw_h_line(&mut self, line: Line, color: Rgb24) -> Result<(), DisplayError>;

    /// Draw a vertical line
    fn draw_v_line(&mut self, line: Line, color: Rgb24) -> Result<(), DisplayError>;

    /// Set the text background and foreground colours
    fn set_font_colors(&mut self, background: Rgb24, foreground: Rgb24);

    /// Render one character with its top-left corner at `origin`
    fn put_char(&mut self, origin: Point, ch: char) -> Result<(), DisplayError>;

    /// Render a string on one line, stopping before the first character
    /// that would cross the right edge
    ///
    /// Returns the number of characters printed.
    fn put_string(&mut self, origin: Point, text: &str) -> Result<usize, DisplayError>;
}

impl<B: GraphicsBackend + ?Sized> GraphicsBackend for &mut B {
    fn size(&self) -> (u16, u16) {
        (**self).size()
    }

    fn font(&self) -> Option<&'static Font> {
        (**self).font()
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear()
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb24) -> Result<(), DisplayError> {
        (**self).fill_rect(rect, color)
    }

    fn draw_h_line(&mut self, line: Line, color: Rgb24) -> Result<(), DisplayError> {
        (**self).draw_h_line(line, color)
    }

    fn draw_v_line(&mut self, line: Line, color: Rgb24) -> Result<(), DisplayError> {
        (**self).draw_v_line(line, color)
    }

    fn set_font_colors(&mut self, background: Rgb24, foreground: Rgb24) {
        (**self).set_font_colors(background, foreground)
    }

    fn put_char(&mut self, origin: Point, ch: char) -> Result<(), DisplayError> {
        (**self).put_char(origin, ch)
    }

    fn put_string(&mut self, origin: Point, text: &str) -> Result<usize, DisplayError> {
        (**self).put_string(origin, text)
    }
}
