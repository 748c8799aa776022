//! Packed complex-arithmetic unit
//!
//! Some cores carry a custom instruction set extension operating on a
//! complex number packed into one 32-bit register:
//!
//! ```text
//!  31             16 15              0
//! +-----------------+-----------------+
//! |  re (i16, Q12)  |  im (i16, Q12)  |
//! +-----------------+-----------------+
//! ```
//!
//! | Op       | Result                                               |
//! |----------|------------------------------------------------------|
//! | `mul`    | per-half `sat16((products) >> 12)`                   |
//! | `add`    | per-half saturating add                              |
//! | `abs_sq` | `(re² >> 12) + (im² >> 12)`, 32-bit, not saturated    |
//!
//! [`ComplexUnit`] abstracts the hardware so a board crate can plug in the
//! real instructions; [`SoftComplexUnit`] is a bit-accurate software model.

use crate::complex::ComplexBackend;
use crate::fixed::Fixed;

/// Complex number in the unit's register format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedComplex(pub u32);

impl PackedComplex {
    pub const fn new(re: i16, im: i16) -> Self {
        Self(((re as u16 as u32) << 16) | im as u16 as u32)
    }

    pub const fn re(self) -> i16 {
        (self.0 >> 16) as u16 as i16
    }

    pub const fn im(self) -> i16 {
        self.0 as u16 as i16
    }
}

/// Packed complex-arithmetic instructions
pub trait ComplexUnit {
    fn mul(&mut self, a: PackedComplex, b: PackedComplex) -> PackedComplex;

    fn add(&mut self, a: PackedComplex, b: PackedComplex) -> PackedComplex;

    fn abs_sq(&mut self, a: PackedComplex) -> i32;
}

impl<U: ComplexUnit + ?Sized> ComplexUnit for &mut U {
    fn mul(&mut self, a: PackedComplex, b: PackedComplex) -> PackedComplex {
        (**self).mul(a, b)
    }

    fn add(&mut self, a: PackedComplex, b: PackedComplex) -> PackedComplex {
        (**self).add(a, b)
    }

    fn abs_sq(&mut self, a: PackedComplex) -> i32 {
        (**self).abs_sq(a)
    }
}

/// Software model of the packed unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SoftComplexUnit;

fn sat16(x: i64) -> i16 {
    x.clamp(i16::MIN as i64, i16::MAX as i64) as i16
}

impl ComplexUnit for SoftComplexUnit {
    fn mul(&mut self, a: PackedComplex, b: PackedComplex) -> PackedComplex {
        let (ar, ai) = (a.re() as i64, a.im() as i64);
        let (br, bi) = (b.re() as i64, b.im() as i64);
        PackedComplex::new(
            sat16((ar * br - ai * bi) >> Fixed::EXP),
            sat16((ar * bi + ai * br) >> Fixed::EXP),
        )
    }

    fn add(&mut self, a: PackedComplex, b: PackedComplex) -> PackedComplex {
        PackedComplex::new(a.re().saturating_add(b.re()), a.im().saturating_add(b.im()))
    }

    fn abs_sq(&mut self, a: PackedComplex) -> i32 {
        let (re, im) = (a.re() as i32, a.im() as i32);
        ((re * re) >> Fixed::EXP) + ((im * im) >> Fixed::EXP)
    }
}

/// Backend driving a [`ComplexUnit`]
#[derive(Debug, Default)]
pub struct AcceleratedBackend<U: ComplexUnit> {
    unit: U,
}

impl<U: ComplexUnit> AcceleratedBackend<U> {
    pub fn new(unit: U) -> Self {
        Self { unit }
    }

    pub fn into_inner(self) -> U {
        self.unit
    }
}

impl<U: ComplexUnit> ComplexBackend for AcceleratedBackend<U> {
    type Value = PackedComplex;
    type Magnitude = i32;

    const ESCAPE: i32 = Fixed::make(4, 0, 0).raw();

    /// Q12 values always fit a 16-bit half
    fn from_plane(&self, re: Fixed, im: Fixed) -> PackedComplex {
        PackedComplex::new(re.raw() as i16, im.raw() as i16)
    }

    fn mul(&mut self, a: PackedComplex, b: PackedComplex) -> PackedComplex {
        self.unit.mul(a, b)
    }

    fn add(&mut self, a: PackedComplex, b: PackedComplex) -> PackedComplex {
        self.unit.add(a, b)
    }

    fn abs_sq(&mut self, z: PackedComplex) -> i32 {
        self.unit.abs_sq(z)
    }
}
