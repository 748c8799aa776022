//! SPI bus abstractions
//!
//! Panel controllers on this bus are write-only, so only the transmit half
//! of the bus is modelled.

/// Write-only SPI master
///
/// Implementations block until every byte has been accepted by the
/// peripheral's transmit FIFO.
pub trait SpiWrite {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Wait until the transmit FIFO has drained
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<S: SpiWrite + ?Sized> SpiWrite for &mut S {
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}
