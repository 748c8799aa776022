//! Shared test fixtures: a recording transport and a fixed-width font
#![allow(dead_code)]

use panelkit_display::{Font, Glyph};
use panelkit_hal::LcdTransport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Lines { cs_high: bool, dc_high: bool },
    Write(Vec<u8>),
    Delay(u32),
}

/// Transport that records every call
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    /// Bytes written with D/C low
    pub fn commands(&self) -> Vec<u8> {
        self.bytes_where(false)
    }

    /// Bytes written with D/C high (parameters and pixels)
    pub fn data(&self) -> Vec<u8> {
        self.bytes_where(true)
    }

    pub fn count_command(&self, command: u8) -> usize {
        self.commands().iter().filter(|&&c| c == command).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn bytes_where(&self, want_dc: bool) -> Vec<u8> {
        let mut dc = true;
        let mut out = Vec::new();
        for event in &self.events {
            match event {
                Event::Lines { dc_high, .. } => dc = *dc_high,
                Event::Write(bytes) if dc == want_dc => out.extend_from_slice(bytes),
                _ => {}
            }
        }
        out
    }
}

impl LcdTransport for Recorder {
    fn write(&mut self, data: &[u8]) -> usize {
        self.events.push(Event::Write(data.to_vec()));
        data.len()
    }

    fn set_lines(&mut self, cs_high: bool, dc_high: bool) {
        self.events.push(Event::Lines { cs_high, dc_high });
    }

    fn delay_ms(&mut self, ms: u32) {
        self.events.push(Event::Delay(ms));
    }
}

pub const GLYPH_WIDTH: u16 = 6;
pub const GLYPH_HEIGHT: u16 = 8;

static GLYPHS: [Glyph; 95] = [Glyph {
    width: GLYPH_WIDTH as u8,
    offset: 0,
}; 95];

// Every printable character renders as a 6x8 box outline
static BITMAP: [u8; 8] = [0x3F, 0x21, 0x21, 0x21, 0x21, 0x21, 0x21, 0x3F];

/// Fixed-width font covering `' '..='~'`
pub static BOX_FONT: Font = Font {
    height: GLYPH_HEIGHT as u8,
    first: b' ',
    last: b'~',
    glyphs: &GLYPHS,
    bitmap: &BITMAP,
};
