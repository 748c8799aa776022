//! ST7735 display driver and text layer for panelkit
//!
//! This crate provides:
//! - [`St7735`], the controller driver: scripted bring-up, orientation,
//!   clipped primitives, image blits and the iterative streaming session
//! - [`GraphicsBackend`], the drawing surface the text layer renders to
//! - Colour conversion between 24-bit RGB, RGB565 and the panel's BGR565
//! - Bitmap fonts, aligned line layout and menus
//! - [`Console`], a line-wrapping framebuffer console
//!
//! # Architecture
//!
//! The driver owns a [`panelkit_hal::LcdTransport`] and never touches
//! hardware directly. Every primitive validates its geometry before any
//! byte is sent, establishes one address window for the clipped region and
//! streams the converted colour for each covered pixel.
//!
//! ```ignore
//! let mut lcd = St7735::new(transport, PanelConfig::default())?;
//! lcd.init()?;
//! lcd.set_orientation(Orientation::Deg180)?;
//! lcd.set_font(&MY_FONT);
//! lcd.clear()?;
//! lcd.put_string(Point::new(5, 106), "Booting...")?;
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod color;
pub mod config;
pub mod console;
pub mod driver;
pub mod font;
pub mod geometry;
pub mod text;

// Re-export key types
pub use backend::{DisplayError, GraphicsBackend};
pub use color::{bgr565_to_rgb24, rgb24_to_bgr565, Bgr565, Rgb24, Rgb565};
pub use config::{ConfigError, PanelConfig};
pub use console::Console;
pub use driver::St7735;
pub use font::{Font, Glyph};
pub use geometry::{Line, Point, Rect};
pub use panelkit_protocol::Orientation;
pub use text::{layout_line, line_width, show_menu, Alignment, Menu};
