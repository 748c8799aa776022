//! Escape-time Mandelbrot engine

use serde::{Deserialize, Serialize};

use crate::complex::ComplexBackend;
use crate::error::FractalError;
use crate::fixed::Fixed;

/// Iteration cap; also the value returned for points in the set
pub const MAX_ITERATIONS: u8 = 50;

/// Initial orbit value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Start {
    /// `z = c`, one step ahead of the textbook orbit
    #[default]
    Sample,
    /// `z = 0`
    Origin,
}

/// Iterations before `|z|² > 4`, or [`MAX_ITERATIONS`]
///
/// Starts from `z = c` and applies `z ← z² + c`; the first iteration has
/// index 0.
pub fn escape_iterations<B: ComplexBackend>(backend: &mut B, c: B::Value) -> u8 {
    escape_iterations_from(backend, c, Start::Sample)
}

/// [`escape_iterations`] with an explicit starting value
///
/// From [`Start::Origin`] the first iteration yields `z = c`, so an
/// escaping orbit takes one more iteration than from [`Start::Sample`].
pub fn escape_iterations_from<B: ComplexBackend>(
    backend: &mut B,
    c: B::Value,
    start: Start,
) -> u8 {
    let mut z = match start {
        Start::Sample => c,
        Start::Origin => backend.from_plane(Fixed::ZERO, Fixed::ZERO),
    };
    for i in 0..MAX_ITERATIONS {
        let sq = backend.mul(z, z);
        z = backend.add(sq, c);
        if backend.abs_sq(z) > B::ESCAPE {
            return i;
        }
    }
    MAX_ITERATIONS
}

/// Sampling grid over the complex plane
///
/// Column `x`, row `y` maps to `re_min + x·step`, `im_max − y·step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub re_min: Fixed,
    pub im_max: Fixed,
    pub step: Fixed,
    pub start: Start,
}

impl Viewport {
    /// 160×128 grid over re ∈ [-1.75, 0.75), im ∈ (-1, 1]
    pub const BENCHMARK: Self = Self {
        width: 160,
        height: 128,
        re_min: Fixed::make(1, 0b11, 2).neg(),
        im_max: Fixed::ONE,
        step: Fixed::make(0, 0x40, 12),
        start: Start::Sample,
    };

    pub fn validate(&self) -> Result<(), FractalError> {
        if self.width == 0 || self.height == 0 || self.step <= Fixed::ZERO {
            return Err(FractalError::InvalidViewport);
        }
        Ok(())
    }

    pub const fn pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Plane coordinates of pixel (`col`, `row`), saturating
    pub fn point(&self, col: u16, row: u16) -> (Fixed, Fixed) {
        let step = self.step.raw() as i64;
        let re = Fixed::clamp(self.re_min.raw() as i64 + col as i64 * step);
        let im = Fixed::clamp(self.im_max.raw() as i64 - row as i64 * step);
        (re, im)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::BENCHMARK
    }
}

/// Iteration counts for every pixel, row-major, without drawing
///
/// `out` must hold exactly `viewport.pixels()` entries.
pub fn escape_grid<B: ComplexBackend>(
    backend: &mut B,
    viewport: &Viewport,
    out: &mut [u8],
) -> Result<(), FractalError> {
    viewport.validate()?;
    if out.len() != viewport.pixels() {
        return Err(FractalError::BufferSize);
    }

    let cols = viewport.width as usize;
    for (i, slot) in out.iter_mut().enumerate() {
        let (re, im) = viewport.point((i % cols) as u16, (i / cols) as u16);
        let c = backend.from_plane(re, im);
        *slot = escape_iterations_from(backend, c, viewport.start);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accel::{AcceleratedBackend, SoftComplexUnit};
    use crate::complex::{FixedBackend, FloatBackend};

    /// (re, im) in raw Q12 and the iteration count all backends agree on
    const SPOTS: [(i32, i32, u8); 8] = [
        (-7168, 4096, 0),
        (0, 0, 50),
        (-4096, 0, 50),
        (2048, 0, 3),
        (1024, 2048, 50),
        (-7168, 0, 50),
        (4096, 4096, 0),
        (-3072, 2048, 4),
    ];

    fn check_spots<B: ComplexBackend>(backend: &mut B) {
        for (re, im, expected) in SPOTS {
            let c = backend.from_plane(Fixed::from_raw(re), Fixed::from_raw(im));
            assert_eq!(escape_iterations(backend, c), expected, "at ({re}, {im})");
        }
    }

    #[test]
    fn test_spots_float() {
        check_spots(&mut FloatBackend);
    }

    #[test]
    fn test_spots_fixed() {
        check_spots(&mut FixedBackend);
    }

    #[test]
    fn test_spots_accelerated() {
        check_spots(&mut AcceleratedBackend::new(SoftComplexUnit));
    }

    #[test]
    fn test_origin_start_lags_one_iteration() {
        // (re, im, from z = c, from z = 0)
        let spots = [
            (2048, 0, 3, 4),
            (4096, 4096, 0, 1),
            (-3072, 2048, 4, 5),
            (-7168, 4096, 0, 0),
            (0, 0, 50, 50),
            (-4096, 0, 50, 50),
        ];
        let mut backend = FixedBackend;
        for (re, im, sample, origin) in spots {
            let c = backend.from_plane(Fixed::from_raw(re), Fixed::from_raw(im));
            assert_eq!(escape_iterations_from(&mut backend, c, Start::Sample), sample);
            assert_eq!(escape_iterations_from(&mut backend, c, Start::Origin), origin);
        }
    }

    #[test]
    fn test_escape_grid_honours_start() {
        let vp = Viewport {
            width: 2,
            height: 1,
            re_min: Fixed::from_raw(2048),
            im_max: Fixed::ZERO,
            step: Fixed::from_raw(2048),
            start: Start::Origin,
        };
        let mut out = [0u8; 2];
        escape_grid(&mut FloatBackend, &vp, &mut out).unwrap();
        // 0.5 and 1.0 on the real axis
        assert_eq!(out, [4, 2]);
    }

    #[test]
    fn test_benchmark_viewport() {
        let vp = Viewport::BENCHMARK;
        assert_eq!(vp.re_min.raw(), -7168);
        assert_eq!(vp.im_max.raw(), 4096);
        assert_eq!(vp.step.raw(), 64);
        assert_eq!(vp.point(0, 0), (Fixed::from_raw(-7168), Fixed::from_raw(4096)));
        assert_eq!(vp.point(159, 127), (Fixed::from_raw(3008), Fixed::from_raw(-4032)));
        assert_eq!(vp.pixels(), 20480);
    }

    #[test]
    fn test_viewport_validation() {
        let vp = Viewport {
            step: Fixed::ZERO,
            ..Viewport::BENCHMARK
        };
        assert_eq!(vp.validate(), Err(FractalError::InvalidViewport));
        let vp = Viewport {
            width: 0,
            ..Viewport::BENCHMARK
        };
        assert_eq!(vp.validate(), Err(FractalError::InvalidViewport));
    }

    #[test]
    fn test_escape_grid() {
        let vp = Viewport {
            width: 4,
            height: 2,
            re_min: Fixed::from_raw(-4096),
            im_max: Fixed::ZERO,
            step: Fixed::from_raw(2048),
            start: Start::Sample,
        };
        let mut out = [0u8; 8];
        escape_grid(&mut FixedBackend, &vp, &mut out).unwrap();
        // Row 0 lies on the real axis: -1, -0.5, 0 stay bounded, 0.5 escapes
        assert_eq!(&out[..4], &[50, 50, 50, 3]);

        let mut short = [0u8; 7];
        assert_eq!(
            escape_grid(&mut FixedBackend, &vp, &mut short),
            Err(FractalError::BufferSize)
        );
    }
}
