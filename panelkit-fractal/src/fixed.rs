//! Saturating fixed-point arithmetic
//!
//! Values are signed Q3.12: 12 fractional bits, clamped to 15 bits of
//! magnitude plus sign. Every operation saturates to
//! `[-(1 << 15), (1 << 15) - 1]`; saturation is a normal result, not an
//! error.

use core::ops::{Add, Mul, Neg, Sub};

/// Q3.12 fixed-point number
///
/// Range: -8.0 to +7.99976
/// Resolution: 1/4096
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fixed(i32);

impl Fixed {
    /// Fractional bits
    pub const EXP: u32 = 12;

    /// Magnitude bits
    pub const MANT: u32 = 15;

    pub const MIN: Self = Self(-(1 << Self::MANT));
    pub const MAX: Self = Self((1 << Self::MANT) - 1);
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << Self::EXP);

    /// Clamp a wide intermediate into range
    #[inline]
    pub const fn clamp(x: i64) -> Self {
        if x < Self::MIN.0 as i64 {
            Self::MIN
        } else if x > Self::MAX.0 as i64 {
            Self::MAX
        } else {
            Self(x as i32)
        }
    }

    /// From a raw Q12 value, saturating
    ///
    /// # Example
    /// ```
    /// use panelkit_fractal::Fixed;
    /// assert_eq!(Fixed::from_raw(4096), Fixed::ONE);
    /// assert_eq!(Fixed::from_raw(1 << 20), Fixed::MAX);
    /// ```
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self::clamp(raw as i64)
    }

    /// Raw Q12 value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// From a whole number, saturating
    #[inline]
    pub const fn from_int(n: i32) -> Self {
        Self::clamp((n as i64) << Self::EXP)
    }

    /// Build `int + frac / 2^frac_bits` for non-negative parts
    ///
    /// # Example
    /// ```
    /// use panelkit_fractal::Fixed;
    /// // 1.75
    /// assert_eq!(Fixed::make(1, 0b11, 2).raw(), 7168);
    /// ```
    #[inline]
    pub const fn make(int: i32, frac: i32, frac_bits: u32) -> Self {
        Self::from_raw((int << Self::EXP) | (frac << (Self::EXP - frac_bits)))
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn add(self, other: Self) -> Self {
        Self::clamp(self.0 as i64 + other.0 as i64)
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn sub(self, other: Self) -> Self {
        Self::clamp(self.0 as i64 - other.0 as i64)
    }

    /// Product, truncated toward negative infinity and saturated
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn mul(self, other: Self) -> Self {
        Self::clamp((self.0 as i64 * other.0 as i64) >> Self::EXP)
    }

    /// Negation; `MIN` saturates to `MAX`
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn neg(self) -> Self {
        Self::clamp(-(self.0 as i64))
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::ONE.0 as f32
    }

    /// Nearest representable value, saturating; NaN maps to zero
    pub fn from_f32(x: f32) -> Self {
        let scaled = x * Self::ONE.0 as f32;
        let rounded = if scaled >= 0.0 {
            scaled + 0.5
        } else {
            scaled - 0.5
        };
        // `as` saturates and maps NaN to 0
        Self::clamp(rounded as i64)
    }
}

impl Add for Fixed {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fixed::add(self, rhs)
    }
}

impl Sub for Fixed {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fixed::sub(self, rhs)
    }
}

impl Mul for Fixed {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Fixed::mul(self, rhs)
    }
}

impl Neg for Fixed {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fixed::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_int() {
        assert_eq!(Fixed::from_int(1), Fixed::ONE);
        assert_eq!(Fixed::from_int(-8), Fixed::MIN);
        assert_eq!(Fixed::from_int(8), Fixed::MAX);
        assert_eq!(Fixed::from_int(i32::MIN), Fixed::MIN);
    }

    #[test]
    fn test_make() {
        assert_eq!(Fixed::make(4, 0, 0).raw(), 16384);
        assert_eq!(Fixed::make(0, 0x40, 12).raw(), 64);
        assert_eq!(Fixed::make(1, 0, 0), Fixed::ONE);
    }

    #[test]
    fn test_mul() {
        let half = Fixed::from_raw(2048);
        assert_eq!(half * half, Fixed::from_raw(1024));
        assert_eq!(Fixed::from_int(2) * Fixed::from_int(3), Fixed::from_int(6));
        // -0.5 * 1/4096 truncates toward -inf
        assert_eq!(Fixed::from_raw(-2048) * Fixed::from_raw(1), Fixed::from_raw(-1));
    }

    #[test]
    fn test_mul_saturates() {
        assert_eq!(Fixed::from_int(4) * Fixed::from_int(4), Fixed::MAX);
        assert_eq!(Fixed::from_int(-4) * Fixed::from_int(4), Fixed::MIN);
        assert_eq!(Fixed::MIN * Fixed::MIN, Fixed::MAX);
    }

    #[test]
    fn test_add_saturates_at_boundary() {
        assert_eq!(Fixed::MAX + Fixed::from_raw(1), Fixed::MAX);
        assert_eq!(Fixed::MAX + Fixed::ZERO, Fixed::MAX);
        assert_eq!(Fixed::MIN + Fixed::from_raw(-1), Fixed::MIN);
        assert_eq!(Fixed::from_raw(32766) + Fixed::from_raw(1), Fixed::MAX);
    }

    #[test]
    fn test_neg_and_sub() {
        assert_eq!(-Fixed::MIN, Fixed::MAX);
        assert_eq!(-Fixed::ONE, Fixed::from_int(-1));
        // Subtracting MIN is not the same as adding -MIN
        assert_eq!(Fixed::from_raw(-5) - Fixed::MIN, Fixed::from_raw(32763));
    }

    #[test]
    fn test_f32_conversions() {
        assert_eq!(Fixed::from_f32(-1.75).raw(), -7168);
        assert_eq!(Fixed::from_f32(1.0 / 64.0).raw(), 64);
        assert_eq!(Fixed::from_f32(0.00018).raw(), 1);
        assert_eq!(Fixed::from_f32(100.0), Fixed::MAX);
        assert_eq!(Fixed::from_f32(f32::NAN), Fixed::ZERO);
        assert_eq!(Fixed::from_raw(-7168).to_f32(), -1.75);
    }
}
