//! Complex-arithmetic backends
//!
//! The escape-time loop is written once against [`ComplexBackend`]; each
//! backend supplies its own sample representation and the escape threshold
//! (|z|² > 4) in its native units.

use crate::fixed::Fixed;

/// Arithmetic needed by the escape-time loop
pub trait ComplexBackend {
    /// Complex sample
    type Value: Copy;

    /// Result of [`ComplexBackend::abs_sq`]
    type Magnitude: Copy + PartialOrd;

    /// Squared magnitude beyond which an orbit has escaped (4.0)
    const ESCAPE: Self::Magnitude;

    /// Sample at the given point of the complex plane
    fn from_plane(&self, re: Fixed, im: Fixed) -> Self::Value;

    fn mul(&mut self, a: Self::Value, b: Self::Value) -> Self::Value;

    fn add(&mut self, a: Self::Value, b: Self::Value) -> Self::Value;

    fn abs_sq(&mut self, z: Self::Value) -> Self::Magnitude;
}

/// Single-precision floating point
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatBackend;

impl ComplexBackend for FloatBackend {
    type Value = (f32, f32);
    type Magnitude = f32;

    const ESCAPE: f32 = 4.0;

    fn from_plane(&self, re: Fixed, im: Fixed) -> (f32, f32) {
        (re.to_f32(), im.to_f32())
    }

    fn mul(&mut self, (ar, ai): (f32, f32), (br, bi): (f32, f32)) -> (f32, f32) {
        (ar * br - ai * bi, ar * bi + ai * br)
    }

    fn add(&mut self, (ar, ai): (f32, f32), (br, bi): (f32, f32)) -> (f32, f32) {
        (ar + br, ai + bi)
    }

    fn abs_sq(&mut self, (re, im): (f32, f32)) -> f32 {
        re * re + im * im
    }
}

/// Pair of saturating Q12 values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedComplex {
    pub re: Fixed,
    pub im: Fixed,
}

/// Saturating Q12 fixed point
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedBackend;

impl ComplexBackend for FixedBackend {
    type Value = FixedComplex;
    type Magnitude = i32;

    const ESCAPE: i32 = Fixed::make(4, 0, 0).raw();

    fn from_plane(&self, re: Fixed, im: Fixed) -> FixedComplex {
        FixedComplex { re, im }
    }

    fn mul(&mut self, a: FixedComplex, b: FixedComplex) -> FixedComplex {
        FixedComplex {
            re: (a.re * b.re) - (a.im * b.im),
            im: (a.re * b.im) + (a.im * b.re),
        }
    }

    fn add(&mut self, a: FixedComplex, b: FixedComplex) -> FixedComplex {
        FixedComplex {
            re: a.re + b.re,
            im: a.im + b.im,
        }
    }

    /// Sum of the saturated squares, not itself saturated
    fn abs_sq(&mut self, z: FixedComplex) -> i32 {
        (z.re * z.re).raw() + (z.im * z.im).raw()
    }
}
