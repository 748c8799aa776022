//! Framebuffer console
//!
//! Prints a stream of characters at a cursor that advances glyph by glyph,
//! wrapping to the next line at the right edge and back to the top after
//! the last line that fits. Every new line is cleared before use.
//!
//! Control characters: `\r` returns to column 0, `\n` starts a new line,
//! `\f` clears the surface and homes the cursor.

use core::fmt;

use crate::backend::{DisplayError, GraphicsBackend};
use crate::color::Rgb24;
use crate::geometry::{Point, Rect};

/// Console cursor state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Console {
    cursor: Point,
}

impl Console {
    pub const fn new() -> Self {
        Self {
            cursor: Point::new(0, 0),
        }
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Print `text` at the cursor
    pub fn put_str<B: GraphicsBackend>(
        &mut self,
        lcd: &mut B,
        text: &str,
    ) -> Result<(), DisplayError> {
        let font = lcd.font().ok_or(DisplayError::NoFont)?;
        let (width, _) = lcd.size();

        for ch in text.chars() {
            match ch {
                '\r' => self.cursor.x = 0,
                '\n' => self.newline(lcd, font.height as u16)?,
                '\x0C' => {
                    lcd.clear()?;
                    self.cursor = Point::new(0, 0);
                }
                _ => {
                    let advance = font
                        .char_width(ch)
                        .ok_or(DisplayError::GlyphMissing(ch))? as u16;
                    let overflow = self.cursor.x as u32 + advance as u32 > width as u32;
                    if self.cursor.x >= width || overflow {
                        self.newline(lcd, font.height as u16)?;
                    }
                    lcd.put_char(self.cursor, ch)?;
                    self.cursor.x += advance;
                }
            }
        }
        Ok(())
    }

    /// `fmt::Write` adapter bound to `lcd`
    pub fn writer<'a, B: GraphicsBackend>(&'a mut self, lcd: &'a mut B) -> ConsoleWriter<'a, B> {
        ConsoleWriter {
            console: self,
            lcd,
            error: None,
        }
    }

    fn newline<B: GraphicsBackend>(
        &mut self,
        lcd: &mut B,
        line_height: u16,
    ) -> Result<(), DisplayError> {
        let (width, height) = lcd.size();
        self.cursor.x = 0;
        self.cursor.y += line_height;
        if self.cursor.y as u32 + line_height as u32 > height as u32 {
            self.cursor.y = 0;
        }
        lcd.fill_rect(Rect::new(self.cursor, width, line_height), Rgb24::WHITE)
    }
}

/// Writes formatted text through a [`Console`]
pub struct ConsoleWriter<'a, B: GraphicsBackend> {
    console: &'a mut Console,
    lcd: &'a mut B,
    error: Option<DisplayError>,
}

impl<B: GraphicsBackend> ConsoleWriter<'_, B> {
    /// Display error behind the last `fmt::Error`, if any
    pub fn take_error(&mut self) -> Option<DisplayError> {
        self.error.take()
    }
}

impl<B: GraphicsBackend> fmt::Write for ConsoleWriter<'_, B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.console.put_str(&mut *self.lcd, s).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
