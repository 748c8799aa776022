//! ST7735 command opcodes and memory-access-control bits

use core::ops::BitOr;

pub const NOP: u8 = 0x00;
pub const SWRESET: u8 = 0x01;
pub const RDDID: u8 = 0x04;
pub const RDDST: u8 = 0x09;
pub const SLPIN: u8 = 0x10;
pub const SLPOUT: u8 = 0x11;
pub const PTLON: u8 = 0x12;
pub const NORON: u8 = 0x13;
pub const INVOFF: u8 = 0x20;
pub const INVON: u8 = 0x21;
pub const DISPOFF: u8 = 0x28;
pub const DISPON: u8 = 0x29;
/// Column address set
pub const CASET: u8 = 0x2A;
/// Row address set
pub const RASET: u8 = 0x2B;
/// Memory write; pixel data follows
pub const RAMWR: u8 = 0x2C;
pub const RAMRD: u8 = 0x2E;
pub const PTLAR: u8 = 0x30;
/// Memory data access control
pub const MADCTL: u8 = 0x36;
/// Interface pixel format
pub const COLMOD: u8 = 0x3A;
pub const FRMCTR1: u8 = 0xB1;
pub const FRMCTR2: u8 = 0xB2;
pub const FRMCTR3: u8 = 0xB3;
pub const INVCTR: u8 = 0xB4;
pub const DISSET5: u8 = 0xB6;
pub const PWCTR1: u8 = 0xC0;
pub const PWCTR2: u8 = 0xC1;
pub const PWCTR3: u8 = 0xC2;
pub const PWCTR4: u8 = 0xC3;
pub const PWCTR5: u8 = 0xC4;
pub const VMCTR1: u8 = 0xC5;
pub const RDID1: u8 = 0xDA;
pub const RDID2: u8 = 0xDB;
pub const RDID3: u8 = 0xDC;
pub const RDID4: u8 = 0xDD;
pub const GMCTRP1: u8 = 0xE0;
pub const GMCTRN1: u8 = 0xE1;
pub const PWCTR6: u8 = 0xFC;

/// MADCTL register value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Madctl(pub u8);

impl Madctl {
    /// Column address order
    pub const MX: Self = Self(1 << 7);
    /// Row/column exchange
    pub const MV: Self = Self(1 << 6);
    /// Row address order
    pub const MY: Self = Self(1 << 5);
    /// Vertical refresh order
    pub const ML: Self = Self(1 << 4);
    /// Colour order bit
    pub const RGB: Self = Self(1 << 3);
    /// Horizontal refresh order
    pub const MH: Self = Self(1 << 2);

    /// Raw register byte
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether every bit of `other` is set
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Madctl {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Panel rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    /// MADCTL value selecting this rotation, colour-order bit included
    pub const fn madctl(self) -> Madctl {
        let bits = match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => Madctl::MX.0 | Madctl::MV.0,
            Orientation::Deg180 => Madctl::MX.0 | Madctl::MY.0,
            Orientation::Deg270 => Madctl::MY.0 | Madctl::MV.0,
        };
        Madctl(bits | Madctl::RGB.0)
    }

    /// Whether rows and columns are exchanged (logical width/height swap)
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Orientation::Deg90 | Orientation::Deg270)
    }

    /// Create from a rotation index (0..=3)
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Orientation::Deg0),
            1 => Some(Orientation::Deg90),
            2 => Some(Orientation::Deg180),
            3 => Some(Orientation::Deg270),
            _ => None,
        }
    }
}
