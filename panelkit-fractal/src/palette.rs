//! Iteration-count colour palette
//!
//! Escaping points run blue → cyan → yellow → red with growing iteration
//! count; points in the set are black.

use panelkit_display::{Rgb24, Rgb565};

use crate::mandelbrot::MAX_ITERATIONS;

/// One entry per possible result of `escape_iterations`
pub const PALETTE: [Rgb565; 51] = build();

const _: () = assert!(PALETTE.len() == MAX_ITERATIONS as usize + 1);

/// Colour for an iteration count; counts past the cap map to black
pub fn color_for(iterations: u8) -> Rgb565 {
    PALETTE
        .get(iterations as usize)
        .copied()
        .unwrap_or(Rgb565::BLACK)
}

const fn build() -> [Rgb565; 51] {
    let mut out = [Rgb565::BLACK; 51];
    let mut i = 0;
    while i < MAX_ITERATIONS as usize {
        out[i] = Rgb565::from_rgb24(gradient(i as u32));
        i += 1;
    }
    out
}

const fn gradient(i: u32) -> Rgb24 {
    // Position along three 255-step ramps
    let t = i * 255 * 3 / (MAX_ITERATIONS as u32 - 1);
    let f = (t % 255) as u8;
    match t / 255 {
        0 => Rgb24::new(0, f, 255),
        1 => Rgb24::new(f, 255, 255 - f),
        2 => Rgb24::new(255, 255 - f, 0),
        _ => Rgb24::new(255, 0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_set_is_black() {
        assert_eq!(PALETTE[MAX_ITERATIONS as usize], Rgb565::BLACK);
        assert_eq!(color_for(MAX_ITERATIONS), Rgb565::BLACK);
        assert_eq!(color_for(200), Rgb565::BLACK);
    }

    #[test]
    fn test_ramp_ends() {
        assert_eq!(PALETTE[0], Rgb565::from_rgb24(Rgb24::BLUE));
        assert_eq!(PALETTE[49], Rgb565::from_rgb24(Rgb24::RED));
    }

    #[test]
    fn test_escaping_colors_are_visible() {
        assert!(PALETTE[..MAX_ITERATIONS as usize]
            .iter()
            .all(|c| *c != Rgb565::BLACK));
    }
}
