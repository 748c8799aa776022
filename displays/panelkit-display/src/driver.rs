//! ST7735 TFT controller driver
//!
//! Talks to the panel exclusively through an [`LcdTransport`]. Every
//! command is sent as one byte with D/C low, followed by its parameters
//! with D/C high, after which chip-select is released. Pixel bursts go to
//! the address window set by CASET/RASET and opened by RAMWR.

use panelkit_hal::LcdTransport;
use panelkit_protocol::cmd;
use panelkit_protocol::{AddressWindow, Orientation, Script, INIT_SEQUENCE};

use crate::backend::{DisplayError, GraphicsBackend};
use crate::color::{Bgr565, Rgb24, Rgb565};
use crate::config::{ConfigError, PanelConfig};
use crate::font::Font;
use crate::geometry::{Line, Point, Rect};

/// Pixel bytes buffered before each transport write
const CHUNK_BYTES: usize = 64;

/// Open streaming region
#[derive(Debug, Clone, Copy)]
struct Session {
    /// Requested region width; stream data is laid out against it
    width: u16,
    /// Visible part after clipping
    visible_width: u16,
    visible_height: u16,
    total: u32,
    pushed: u32,
}

/// Buffers converted pixels into transport-sized bursts
struct PixelSink<'a, T: LcdTransport> {
    transport: &'a mut T,
    buf: [u8; CHUNK_BYTES],
    len: usize,
}

impl<'a, T: LcdTransport> PixelSink<'a, T> {
    fn new(transport: &'a mut T) -> Self {
        Self {
            transport,
            buf: [0; CHUNK_BYTES],
            len: 0,
        }
    }

    fn push(&mut self, color: Bgr565) {
        if self.len == CHUNK_BYTES {
            self.flush();
        }
        self.buf[self.len..self.len + 2].copy_from_slice(&color.to_bytes());
        self.len += 2;
    }

    fn repeat(&mut self, color: Bgr565, count: u32) {
        for _ in 0..count {
            self.push(color);
        }
    }

    fn flush(&mut self) {
        if self.len > 0 {
            self.transport.write(&self.buf[..self.len]);
            self.len = 0;
        }
    }
}

impl<T: LcdTransport> Drop for PixelSink<'_, T> {
    fn drop(&mut self) {
        self.flush();
    }
}

/// ST7735 driver
pub struct St7735<T: LcdTransport> {
    transport: T,
    config: PanelConfig,
    orientation: Orientation,
    width: u16,
    height: u16,
    font: Option<&'static Font>,
    background: Bgr565,
    foreground: Bgr565,
    session: Option<Session>,
}

impl<T: LcdTransport> St7735<T> {
    /// Create a driver; nothing is sent until [`St7735::init`]
    pub fn new(transport: T, config: PanelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height) = config.logical_size(Orientation::Deg0);
        Ok(Self {
            transport,
            config,
            orientation: Orientation::Deg0,
            width,
            height,
            font: None,
            background: Bgr565::from_rgb24(Rgb24::WHITE),
            foreground: Bgr565::from_rgb24(Rgb24::BLACK),
            session: None,
        })
    }

    /// Release the transport
    pub fn release(self) -> T {
        self.transport
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Logical (width, height) at the current orientation
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Whether a streaming session is open
    pub fn is_streaming(&self) -> bool {
        self.session.is_some()
    }

    /// Run the bring-up scripts, then apply the configured orientation
    ///
    /// Every script is checked before the first byte goes out, so a
    /// malformed script leaves the panel untouched.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.ensure_idle()?;
        for script in INIT_SEQUENCE {
            script.validate()?;
        }
        for script in INIT_SEQUENCE {
            self.run_script(script)?;
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "st7735: initialized {}x{}",
            self.config.width,
            self.config.height
        );

        self.set_orientation(self.config.orientation)
    }

    /// Execute one command script
    pub fn run_script(&mut self, script: Script<'_>) -> Result<(), DisplayError> {
        self.ensure_idle()?;
        #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
        let count = script.validate()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("st7735: running script with {} records", count);

        for record in script.records() {
            let record = record?;
            self.send(record.command, record.args);
            if let Some(ms) = record.delay_ms {
                self.transport.delay_ms(ms as u32);
            }
        }
        Ok(())
    }

    /// Rotate the panel; 90° and 270° swap the logical width and height
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), DisplayError> {
        self.ensure_idle()?;
        self.send(cmd::MADCTL, &[orientation.madctl().bits()]);
        self.orientation = orientation;
        (self.width, self.height) = self.config.logical_size(orientation);

        #[cfg(feature = "defmt")]
        defmt::debug!("st7735: {} -> {}x{}", orientation, self.width, self.height);

        Ok(())
    }

    /// Fill the whole surface with white
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.fill_rect(Rect::new(Point::new(0, 0), self.width, self.height), Rgb24::WHITE)
    }

    pub fn draw_pixel(&mut self, at: Point, color: Rgb24) -> Result<(), DisplayError> {
        self.fill_rect(Rect::new(at, 1, 1), color)
    }

    pub fn draw_h_line(&mut self, line: Line, color: Rgb24) -> Result<(), DisplayError> {
        self.fill_rect(line.horizontal(), color)
    }

    pub fn draw_v_line(&mut self, line: Line, color: Rgb24) -> Result<(), DisplayError> {
        self.fill_rect(line.vertical(), color)
    }

    /// Fill a rectangle, clipped to the surface
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb24) -> Result<(), DisplayError> {
        self.ensure_idle()?;
        let clipped = self.clip(rect)?;
        if clipped.is_empty() {
            return Ok(());
        }
        self.open_window(clipped)?;
        self.begin_data();
        PixelSink::new(&mut self.transport).repeat(Bgr565::from_rgb24(color), clipped.area());
        self.end_data();
        Ok(())
    }

    /// Blit a row-major image with 3 bytes per pixel in B, G, R order
    pub fn draw_image_bgr24(&mut self, rect: Rect, pixels: &[u8]) -> Result<(), DisplayError> {
        self.draw_image(rect, pixels, 3, |px| {
            Bgr565::from_rgb24(Rgb24::new(px[2], px[1], px[0]))
        })
    }

    /// Blit a row-major image of little-endian standard RGB565 pixels
    pub fn draw_image_rgb565(&mut self, rect: Rect, pixels: &[u8]) -> Result<(), DisplayError> {
        self.draw_image(rect, pixels, 2, |px| {
            Bgr565::from_rgb565(Rgb565::from_le_bytes([px[0], px[1]]))
        })
    }

    fn draw_image(
        &mut self,
        rect: Rect,
        pixels: &[u8],
        bytes_per_pixel: usize,
        convert: impl Fn(&[u8]) -> Bgr565,
    ) -> Result<(), DisplayError> {
        self.ensure_idle()?;
        if pixels.len() != rect.area() as usize * bytes_per_pixel {
            return Err(DisplayError::InvalidLength);
        }
        let clipped = self.clip(rect)?;
        if clipped.is_empty() {
            return Ok(());
        }

        self.open_window(clipped)?;
        self.begin_data();
        {
            let stride = rect.width as usize * bytes_per_pixel;
            let visible = clipped.width as usize * bytes_per_pixel;
            let mut sink = PixelSink::new(&mut self.transport);
            for row in pixels.chunks_exact(stride).take(clipped.height as usize) {
                for px in row[..visible].chunks_exact(bytes_per_pixel) {
                    sink.push(convert(px));
                }
            }
        }
        self.end_data();
        Ok(())
    }

    /// Open a streaming session over `rect`
    ///
    /// Pixels pushed afterwards fill the requested region in raster order;
    /// those falling outside the surface are consumed and dropped. No
    /// other drawing is accepted until [`St7735::stream_end`].
    pub fn stream_begin(&mut self, rect: Rect) -> Result<(), DisplayError> {
        self.ensure_idle()?;
        if rect.is_empty() {
            return Err(DisplayError::InvalidLength);
        }
        let clipped = self.clip(rect)?;

        self.open_window(clipped)?;
        self.begin_data();
        self.session = Some(Session {
            width: rect.width,
            visible_width: clipped.width,
            visible_height: clipped.height,
            total: rect.area(),
            pushed: 0,
        });
        Ok(())
    }

    /// Append little-endian standard RGB565 pixels to the open session
    pub fn stream_push(&mut self, pixels: &[u8]) -> Result<(), DisplayError> {
        let session = self.session.as_mut().ok_or(DisplayError::SessionNotOpen)?;
        if pixels.len() % 2 != 0 {
            return Err(DisplayError::InvalidLength);
        }
        let count = (pixels.len() / 2) as u32;
        if session.pushed + count > session.total {
            return Err(DisplayError::SessionOverflow);
        }

        let mut sink = PixelSink::new(&mut self.transport);
        for px in pixels.chunks_exact(2) {
            let col = session.pushed % session.width as u32;
            let row = session.pushed / session.width as u32;
            if col < session.visible_width as u32 && row < session.visible_height as u32 {
                sink.push(Bgr565::from_rgb565(Rgb565::from_le_bytes([px[0], px[1]])));
            }
            session.pushed += 1;
        }
        Ok(())
    }

    /// Close the session, returning the number of pixels pushed
    pub fn stream_end(&mut self) -> Result<u32, DisplayError> {
        let session = self.session.take().ok_or(DisplayError::SessionNotOpen)?;
        self.end_data();

        if session.pushed != session.total {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "st7735: stream closed after {} of {} pixels",
                session.pushed,
                session.total
            );
        }
        Ok(session.pushed)
    }

    /// Select a font; colours reset to black on white
    pub fn set_font(&mut self, font: &'static Font) {
        self.font = Some(font);
        self.background = Bgr565::from_rgb24(Rgb24::WHITE);
        self.foreground = Bgr565::from_rgb24(Rgb24::BLACK);
    }

    pub fn font(&self) -> Option<&'static Font> {
        self.font
    }

    pub fn set_font_colors(&mut self, background: Rgb24, foreground: Rgb24) {
        self.background = Bgr565::from_rgb24(background);
        self.foreground = Bgr565::from_rgb24(foreground);
    }

    /// Render one glyph, clipped to the surface
    pub fn put_char(&mut self, origin: Point, ch: char) -> Result<(), DisplayError> {
        self.ensure_idle()?;
        let font = self.font.ok_or(DisplayError::NoFont)?;
        let glyph = font.glyph(ch).ok_or(DisplayError::GlyphMissing(ch))?;
        let rows = font.rows(glyph).ok_or(DisplayError::GlyphMissing(ch))?;
        let cell = self.clip(Rect::new(origin, glyph.width as u16, font.height as u16))?;
        if cell.is_empty() {
            return Ok(());
        }

        self.open_window(cell)?;
        self.begin_data();
        {
            let (fg, bg) = (self.foreground, self.background);
            let mut sink = PixelSink::new(&mut self.transport);
            for row in 0..cell.height as u8 {
                for col in 0..cell.width as u8 {
                    sink.push(if rows.pixel(col, row) { fg } else { bg });
                }
            }
        }
        self.end_data();
        Ok(())
    }

    /// Render `text` left to right from `origin`
    ///
    /// Stops before the first character that would cross the right edge
    /// and returns how many characters were printed.
    pub fn put_string(&mut self, origin: Point, text: &str) -> Result<usize, DisplayError> {
        self.ensure_idle()?;
        let font = self.font.ok_or(DisplayError::NoFont)?;
        let mut x = origin.x as u32;
        let mut printed = 0;
        for ch in text.chars() {
            let width = font.char_width(ch).ok_or(DisplayError::GlyphMissing(ch))? as u32;
            if x >= self.width as u32 || x + width > self.width as u32 {
                break;
            }
            self.put_char(Point::new(x as u16, origin.y), ch)?;
            x += width;
            printed += 1;
        }
        Ok(printed)
    }

    fn ensure_idle(&self) -> Result<(), DisplayError> {
        match self.session {
            Some(_) => Err(DisplayError::SessionOpen),
            None => Ok(()),
        }
    }

    fn clip(&self, rect: Rect) -> Result<Rect, DisplayError> {
        rect.clip(self.width, self.height)
            .ok_or(DisplayError::OutOfBounds)
    }

    fn write_command(&mut self, command: u8) {
        self.transport.set_lines(false, false);
        self.transport.write(&[command]);
    }

    fn begin_data(&mut self) {
        self.transport.set_lines(false, true);
    }

    fn end_data(&mut self) {
        self.transport.set_lines(true, true);
    }

    /// Command plus parameters, chip-select released afterwards
    fn send(&mut self, command: u8, args: &[u8]) {
        self.write_command(command);
        self.begin_data();
        if !args.is_empty() {
            self.transport.write(args);
        }
        self.end_data();
    }

    /// Target `rect` (already clipped, non-empty) and issue RAMWR
    ///
    /// An empty rect has no address window; nothing is sent.
    fn open_window(&mut self, rect: Rect) -> Result<(), DisplayError> {
        let window =
            AddressWindow::from_origin(rect.origin.x, rect.origin.y, rect.width, rect.height)
                .ok_or(DisplayError::InvalidLength)?
                .offset(self.config.col_offset, self.config.row_offset);
        self.send(cmd::CASET, &window.column_args());
        self.send(cmd::RASET, &window.row_args());
        self.write_command(cmd::RAMWR);
        Ok(())
    }
}

impl<T: LcdTransport> GraphicsBackend for St7735<T> {
    fn size(&self) -> (u16, u16) {
        St7735::size(self)
    }

    fn font(&self) -> Option<&'static Font> {
        self.font
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        St7735::clear(self)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb24) -> Result<(), DisplayError> {
        St7735::fill_rect(self, rect, color)
    }

    fn draw_h_line(&mut self, line: Line, color: Rgb24) -> Result<(), DisplayError> {
        St7735::draw_h_line(self, line, color)
    }

    fn draw_v_line(&mut self, line: Line, color: Rgb24) -> Result<(), DisplayError> {
        St7735::draw_v_line(self, line, color)
    }

    fn set_font_colors(&mut self, background: Rgb24, foreground: Rgb24) {
        St7735::set_font_colors(self, background, foreground)
    }

    fn put_char(&mut self, origin: Point, ch: char) -> Result<(), DisplayError> {
        St7735::put_char(self, origin, ch)
    }

    fn put_string(&mut self, origin: Point, text: &str) -> Result<usize, DisplayError> {
        St7735::put_string(self, origin, text)
    }
}
