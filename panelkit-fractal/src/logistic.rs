//! Logistic-map bifurcation plot
//!
//! For each column the growth rate `r` is fixed and `x ← r·x·(1 − x)` is
//! iterated from `x_init`. After a warm-up, every visited `x` is plotted
//! as a white dot, `x = 0` on the bottom row and `x = 1` on the top.

use panelkit_display::{Point, Rect, Rgb24, St7735};
use panelkit_hal::LcdTransport;

use crate::error::FractalError;

/// Orbits beyond this magnitude are abandoned
const DIVERGED: f32 = 1.0e6;

/// Plot parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bifurcation {
    /// Growth rate of column 0
    pub r_start: f32,
    /// Growth-rate increment per column
    pub r_step: f32,
    pub x_init: f32,
    /// Iterations per column
    pub iterations: u16,
    /// Iterations not plotted
    pub warmup: u16,
}

impl Bifurcation {
    /// Growth rate from 1.0 to 4.0 across `width` columns
    pub fn for_width(width: u16) -> Self {
        Self {
            r_start: 1.0,
            r_step: 3.0 / width.max(1) as f32,
            x_init: 0.5,
            iterations: 256,
            warmup: 64,
        }
    }

    /// Row for population `x` on a surface `height` rows tall
    fn row(x: f32, height: u16) -> Option<u16> {
        let top = height.saturating_sub(1) as f32;
        let row = (top - x * top) as i32;
        if row >= 0 && row < height as i32 {
            Some(row as u16)
        } else {
            None
        }
    }
}

/// Clear to black and plot the diagram; returns the number of dots drawn
pub fn plot_bifurcation<T: LcdTransport>(
    lcd: &mut St7735<T>,
    params: &Bifurcation,
) -> Result<u32, FractalError> {
    let (width, height) = lcd.size();
    lcd.fill_rect(Rect::new(Point::new(0, 0), width, height), Rgb24::BLACK)?;

    let mut dots = 0;
    for col in 0..width {
        let r = params.r_start + params.r_step * col as f32;
        let mut x = params.x_init;
        for i in 0..params.iterations {
            x = r * x * (1.0 - x);
            if x.is_nan() || x > DIVERGED || x < -DIVERGED {
                break;
            }
            if i < params.warmup {
                continue;
            }
            if let Some(row) = Bifurcation::row(x, height) {
                lcd.draw_pixel(Point::new(col, row), Rgb24::WHITE)?;
                dots += 1;
            }
        }
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("bifurcation: {} dots", dots);

    Ok(dots)
}
