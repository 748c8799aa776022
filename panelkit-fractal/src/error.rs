//! Fractal renderer errors

use panelkit_display::DisplayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FractalError {
    /// Drawing failed
    Display(DisplayError),
    /// Output buffer does not match the viewport
    BufferSize,
    /// Empty viewport or non-positive step
    InvalidViewport,
}

impl From<DisplayError> for FractalError {
    fn from(e: DisplayError) -> Self {
        FractalError::Display(e)
    }
}
