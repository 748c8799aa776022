//! `embedded-hal` 1.0 adapter
//!
//! Lets a board that already exposes `embedded-hal` SPI, pin and delay
//! implementations drive a panel without writing its own transport.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};

use crate::transport::LcdTransport;

/// Fault recorded by [`HalTransport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFault {
    /// SPI bus write or flush failed
    Spi(spi::ErrorKind),
    /// Chip-select or data/command pin could not be driven
    Pin(digital::ErrorKind),
}

#[cfg(feature = "defmt")]
impl defmt::Format for TransportFault {
    fn format(&self, f: defmt::Formatter) {
        match self {
            TransportFault::Spi(kind) => defmt::write!(f, "Spi({})", defmt::Debug2Format(kind)),
            TransportFault::Pin(kind) => defmt::write!(f, "Pin({})", defmt::Debug2Format(kind)),
        }
    }
}

/// Transport over `embedded-hal` traits
///
/// The bus is driven directly (not as an `SpiDevice`) because chip-select
/// is toggled by the driver through [`LcdTransport::set_lines`].
pub struct HalTransport<SPI, CS, DC, D> {
    spi: SPI,
    cs: CS,
    dc: DC,
    delay: D,
    fault: Option<TransportFault>,
}

impl<SPI, CS, DC, D> HalTransport<SPI, CS, DC, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayNs,
{
    /// Create a transport from its parts
    pub fn new(spi: SPI, cs: CS, dc: DC, delay: D) -> Self {
        Self {
            spi,
            cs,
            dc,
            delay,
            fault: None,
        }
    }

    /// Take the first fault recorded since the last call
    pub fn take_error(&mut self) -> Option<TransportFault> {
        self.fault.take()
    }

    /// Release the underlying parts
    pub fn release(self) -> (SPI, CS, DC, D) {
        (self.spi, self.cs, self.dc, self.delay)
    }

    fn latch(&mut self, fault: TransportFault) {
        if self.fault.is_none() {
            self.fault = Some(fault);
        }
    }
}

impl<SPI, CS, DC, D> LcdTransport for HalTransport<SPI, CS, DC, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayNs,
{
    fn write(&mut self, data: &[u8]) -> usize {
        let result = self.spi.write(data).and_then(|_| self.spi.flush());
        match result {
            Ok(()) => data.len(),
            Err(e) => {
                self.latch(TransportFault::Spi(spi::Error::kind(&e)));
                0
            }
        }
    }

    fn set_lines(&mut self, cs_high: bool, dc_high: bool) {
        let cs = if cs_high {
            self.cs.set_high()
        } else {
            self.cs.set_low()
        };
        if let Err(e) = cs {
            self.latch(TransportFault::Pin(digital::Error::kind(&e)));
        }

        let dc = if dc_high {
            self.dc.set_high()
        } else {
            self.dc.set_low()
        };
        if let Err(e) = dc {
            self.latch(TransportFault::Pin(digital::Error::kind(&e)));
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
