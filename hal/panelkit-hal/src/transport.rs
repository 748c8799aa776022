//! Panel transport capability set
//!
//! A display driver needs exactly three things from the board: a byte-burst
//! write, the chip-select / data-command line states, and a millisecond
//! delay. [`LcdTransport`] bundles them so the driver can be constructed
//! with any implementation (a real bus, a recording mock, a simulator).

use crate::delay::DelayMs;
use crate::gpio::OutputPin;
use crate::spi::SpiWrite;

/// Capabilities consumed by panel drivers
///
/// All calls are synchronous. Transport faults are not reported through
/// this trait; implementations either complete the operation or surface
/// the fault out of band (see [`PinTransport::take_error`]).
pub trait LcdTransport {
    /// Send a burst of bytes, returning how many were accepted
    fn write(&mut self, data: &[u8]) -> usize;

    /// Drive the chip-select and data/command lines
    ///
    /// `cs_high == false` selects the panel; `dc_high == true` marks the
    /// following bytes as data (parameters or pixels) rather than a command.
    fn set_lines(&mut self, cs_high: bool, dc_high: bool);

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: LcdTransport + ?Sized> LcdTransport for &mut T {
    fn write(&mut self, data: &[u8]) -> usize {
        (**self).write(data)
    }

    fn set_lines(&mut self, cs_high: bool, dc_high: bool) {
        (**self).set_lines(cs_high, dc_high)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

/// Transport assembled from this crate's bus, pin and delay traits
///
/// The first SPI error is latched and the failing burst reports zero bytes
/// written; later bursts are still attempted.
pub struct PinTransport<S: SpiWrite, CS, DC, D> {
    spi: S,
    cs: CS,
    dc: DC,
    delay: D,
    error: Option<S::Error>,
}

impl<S, CS, DC, D> PinTransport<S, CS, DC, D>
where
    S: SpiWrite,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayMs,
{
    /// Create a transport from its parts
    pub fn new(spi: S, cs: CS, dc: DC, delay: D) -> Self {
        Self {
            spi,
            cs,
            dc,
            delay,
            error: None,
        }
    }

    /// Take the first bus error recorded since the last call
    pub fn take_error(&mut self) -> Option<S::Error> {
        self.error.take()
    }

    /// Release the underlying parts
    pub fn release(self) -> (S, CS, DC, D) {
        (self.spi, self.cs, self.dc, self.delay)
    }
}

impl<S, CS, DC, D> LcdTransport for PinTransport<S, CS, DC, D>
where
    S: SpiWrite,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayMs,
{
    fn write(&mut self, data: &[u8]) -> usize {
        match self.spi.write(data).and_then(|_| self.spi.flush()) {
            Ok(()) => data.len(),
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
                0
            }
        }
    }

    fn set_lines(&mut self, cs_high: bool, dc_high: bool) {
        self.cs.set_state(cs_high);
        self.dc.set_state(dc_high);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
