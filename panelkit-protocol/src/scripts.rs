//! Built-in bring-up scripts
//!
//! Run in order: [`INIT_7735B`], [`INIT_7735R`], [`INIT_7735R3`].
//! Together they reset the controller, leave sleep, select 16-bit colour,
//! program frame rate, power and gamma tables and switch the display on.

use crate::cmd::*;
use crate::script::{Script, DELAY_FLAG as DELAY};

/// 7735B bring-up: reset, sleep-out, colour mode, power and gamma
#[rustfmt::skip]
pub const INIT_7735B: Script<'static> = Script::new(&[
    18,
    SWRESET, DELAY,
        50,
    SLPOUT, DELAY,
        255,
    COLMOD, 1 | DELAY,
        0x05,                       // 16-bit colour
        10,
    FRMCTR1, 3 | DELAY,
        0x00, 0x06, 0x03,           // fastest refresh, 6 lines front porch, 3 back
        10,
    MADCTL, 1,
        0x68,
    DISSET5, 2,
        0x15, 0x02,
    INVCTR, 1,
        0x00,                       // line inversion
    PWCTR1, 2 | DELAY,
        0x02, 0x70,                 // GVDD 4.7 V, 1.0 uA
        10,
    PWCTR2, 1,
        0x05,
    PWCTR3, 2,
        0x01, 0x02,
    VMCTR1, 2 | DELAY,
        0x3C, 0x38,                 // VCOMH 4 V, VCOML -1.1 V
        10,
    PWCTR6, 2,
        0x11, 0x15,
    GMCTRP1, 16,
        0x09, 0x16, 0x09, 0x20, 0x21, 0x1B, 0x13, 0x19,
        0x17, 0x15, 0x1E, 0x2B, 0x04, 0x05, 0x02, 0x0E,
    GMCTRN1, 16 | DELAY,
        0x0B, 0x14, 0x08, 0x1E, 0x22, 0x1D, 0x18, 0x1E,
        0x1B, 0x1A, 0x24, 0x2B, 0x06, 0x06, 0x02, 0x0F,
        10,
    CASET, 4,
        0x00, 0x02, 0x00, 0x81,
    RASET, 4,
        0x00, 0x02, 0x00, 0x81,
    NORON, DELAY,
        10,
    DISPON, DELAY,
        255,
]);

/// 7735R part 1: frame rate, inversion and power control
#[rustfmt::skip]
pub const INIT_7735R: Script<'static> = Script::new(&[
    15,
    SWRESET, DELAY,
        150,
    SLPOUT, DELAY,
        255,
    FRMCTR1, 3,
        0x00, 0x02, 0x02,
    FRMCTR2, 3,
        0x00, 0x02, 0x02,
    FRMCTR3, 6,
        0x00, 0x02, 0x02,           // dot inversion
        0x00, 0x02, 0x02,           // line inversion
    INVCTR, 1,
        0x07,
    PWCTR1, 3,
        0xA2, 0x02, 0x84,           // -4.6 V, auto mode
    PWCTR2, 1,
        0xC5,
    PWCTR3, 2,
        0x0A, 0x00,
    PWCTR4, 2,
        0x8A, 0x2A,
    PWCTR5, 2,
        0x8A, 0xEE,
    VMCTR1, 1,
        0x0E,
    INVOFF, 0,
    MADCTL, 1,
        0x68,
    COLMOD, 1,
        0x05,
]);

/// 7735R part 3: gamma tables, normal mode, display on
#[rustfmt::skip]
pub const INIT_7735R3: Script<'static> = Script::new(&[
    4,
    GMCTRP1, 16,
        0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D,
        0x29, 0x25, 0x2B, 0x39, 0x00, 0x01, 0x03, 0x10,
    GMCTRN1, 16,
        0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D,
        0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00, 0x02, 0x10,
    NORON, DELAY,
        10,
    DISPON, DELAY,
        100,
]);

/// Scripts executed by the driver's `init`, in order
pub const INIT_SEQUENCE: [Script<'static>; 3] = [INIT_7735B, INIT_7735R, INIT_7735R3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        assert_eq!(INIT_7735B.validate(), Ok(18));
        assert_eq!(INIT_7735R.validate(), Ok(15));
        assert_eq!(INIT_7735R3.validate(), Ok(4));
    }

    #[test]
    fn test_delays() {
        assert_eq!(INIT_7735B.total_delay_ms(), Ok(1110));
        assert_eq!(INIT_7735R.total_delay_ms(), Ok(650));
        assert_eq!(INIT_7735R3.total_delay_ms(), Ok(110));
    }

    #[test]
    fn test_no_trailing_bytes() {
        for script in INIT_SEQUENCE {
            // Every byte belongs to a record
            let consumed: usize = 1 + script
                .records()
                .map(|r| {
                    let r = r.unwrap();
                    2 + r.args.len() + r.delay_ms.is_some() as usize
                })
                .sum::<usize>();
            assert_eq!(consumed, script.as_bytes().len());
        }
    }

    #[test]
    fn test_last_record_turns_display_on() {
        for script in [INIT_7735B, INIT_7735R3] {
            let last = script.records().last().unwrap().unwrap();
            assert_eq!(last.command, DISPON);
        }
    }
}
