//! Colour formats
//!
//! | Type       | Layout                                  | Used by              |
//! |------------|-----------------------------------------|----------------------|
//! | [`Rgb24`]  | 8 bits per channel                      | drawing API          |
//! | [`Rgb565`] | `R<<11 \| G<<5 \| B`, little-endian      | image and stream input |
//! | [`Bgr565`] | `B<<11 \| G<<5 \| R`, sent MSB first     | panel RAM            |

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb24 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb24 {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    pub const GREEN: Self = Self::new(0x00, 0xFF, 0x00);
    pub const BLUE: Self = Self::new(0x00, 0x00, 0xFF);
    pub const ORANGE: Self = Self::new(0xFF, 0x80, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a `0xRRGGBB` value; the top byte is ignored
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Standard 16-bit colour, red in the high bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);

    /// Pack channel values that are already reduced to 5/6/5 bits
    pub const fn from_channels(r5: u8, g6: u8, b5: u8) -> Self {
        Self(((r5 as u16 & 0x1F) << 11) | ((g6 as u16 & 0x3F) << 5) | (b5 as u16 & 0x1F))
    }

    pub const fn from_rgb24(c: Rgb24) -> Self {
        Self::from_channels(c.r >> 3, c.g >> 2, c.b >> 3)
    }

    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub const fn r5(self) -> u8 {
        (self.0 >> 11) as u8
    }

    pub const fn g6(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    pub const fn b5(self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

impl From<Rgb24> for Rgb565 {
    fn from(c: Rgb24) -> Self {
        Self::from_rgb24(c)
    }
}

/// Panel-native 16-bit colour, blue in the high bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bgr565(pub u16);

impl Bgr565 {
    pub const fn from_rgb24(c: Rgb24) -> Self {
        Self(((c.b as u16 & 0xF8) << 8) | ((c.g as u16 & 0xFC) << 3) | (c.r as u16 >> 3))
    }

    /// Reorder a standard RGB565 value for the panel
    pub const fn from_rgb565(c: Rgb565) -> Self {
        Self(((c.b5() as u16) << 11) | ((c.g6() as u16) << 5) | c.r5() as u16)
    }

    /// Pixel bytes in transmission order
    pub const fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Expand back to 24 bits; the low channel bits are zero
    pub const fn to_rgb24(self) -> Rgb24 {
        Rgb24::new(
            ((self.0 & 0x1F) << 3) as u8,
            (((self.0 >> 5) & 0x3F) << 2) as u8,
            ((self.0 >> 11) << 3) as u8,
        )
    }
}

impl From<Rgb24> for Bgr565 {
    fn from(c: Rgb24) -> Self {
        Self::from_rgb24(c)
    }
}

impl From<Rgb565> for Bgr565 {
    fn from(c: Rgb565) -> Self {
        Self::from_rgb565(c)
    }
}

/// Convert 24-bit RGB to the panel format
pub const fn rgb24_to_bgr565(c: Rgb24) -> Bgr565 {
    Bgr565::from_rgb24(c)
}

/// Inverse of [`rgb24_to_bgr565`] up to quantization
pub const fn bgr565_to_rgb24(c: Bgr565) -> Rgb24 {
    c.to_rgb24()
}
