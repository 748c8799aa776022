//! Panel configuration
//!
//! Describes the physical panel the driver talks to. Loaded from the
//! board's TOML description or built in code.

use panelkit_protocol::Orientation;
use serde::{Deserialize, Serialize};

/// Largest side of the ST7735 frame memory
pub const MAX_DIMENSION: u16 = 162;

/// Panel configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Width or height is zero
    ZeroSize,
    /// Panel (including RAM offset) exceeds the controller's frame memory
    TooLarge,
}

/// Panel geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct PanelConfig {
    /// Native width at [`Orientation::Deg0`]
    pub width: u16,
    /// Native height at [`Orientation::Deg0`]
    pub height: u16,
    /// Column offset of the visible area in controller RAM
    pub col_offset: u16,
    /// Row offset of the visible area in controller RAM
    pub row_offset: u16,
    /// Rotation applied by `init`
    pub orientation: Orientation,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 128,
            col_offset: 0,
            row_offset: 0,
            orientation: Orientation::Deg0,
        }
    }
}

impl PanelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroSize);
        }
        let cols = self.width as u32 + self.col_offset as u32;
        let rows = self.height as u32 + self.row_offset as u32;
        if cols.max(rows) > MAX_DIMENSION as u32 {
            return Err(ConfigError::TooLarge);
        }
        Ok(())
    }

    /// Logical (width, height) at `orientation`
    pub fn logical_size(&self, orientation: Orientation) -> (u16, u16) {
        if orientation.swaps_axes() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(PanelConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_size() {
        let cfg = PanelConfig {
            height: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSize));
    }

    #[test]
    fn test_offset_counts_toward_limit() {
        let cfg = PanelConfig {
            width: 160,
            col_offset: 3,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::TooLarge));

        let cfg = PanelConfig {
            width: 160,
            col_offset: 2,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_logical_size() {
        let cfg = PanelConfig::default();
        assert_eq!(cfg.logical_size(Orientation::Deg0), (160, 128));
        assert_eq!(cfg.logical_size(Orientation::Deg90), (128, 160));
        assert_eq!(cfg.logical_size(Orientation::Deg180), (160, 128));
        assert_eq!(cfg.logical_size(Orientation::Deg270), (128, 160));
    }
}
