//! Viewport configuration
//!
//! Human-edited form of [`Viewport`]: plane coordinates as decimals,
//! converted to Q12 on load.

use serde::{Deserialize, Serialize};

use crate::error::FractalError;
use crate::fixed::Fixed;
use crate::mandelbrot::{Start, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u16,
    pub height: u16,
    /// Real part of the left column
    pub re_min: f32,
    /// Imaginary part of the top row
    pub im_max: f32,
    /// Plane distance between neighbouring pixels
    pub step: f32,
    pub start: Start,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Viewport::BENCHMARK.into()
    }
}

impl ViewportConfig {
    /// Convert to Q12, rounding each coordinate to the nearest step
    pub fn to_viewport(&self) -> Result<Viewport, FractalError> {
        let vp = Viewport {
            width: self.width,
            height: self.height,
            re_min: Fixed::from_f32(self.re_min),
            im_max: Fixed::from_f32(self.im_max),
            step: Fixed::from_f32(self.step),
            start: self.start,
        };
        vp.validate()?;
        Ok(vp)
    }
}

impl From<Viewport> for ViewportConfig {
    fn from(vp: Viewport) -> Self {
        Self {
            width: vp.width,
            height: vp.height,
            re_min: vp.re_min.to_f32(),
            im_max: vp.im_max.to_f32(),
            step: vp.step.to_f32(),
            start: vp.start,
        }
    }
}
