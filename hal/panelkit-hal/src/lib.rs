//! panelkit Hardware Abstraction Layer
//!
//! This crate defines the small capability set a panel driver needs from the
//! board: push a burst of bytes over SPI, drive the chip-select and
//! data/command lines, and block for a number of milliseconds. Board crates
//! implement the bus-level traits (or reuse an `embedded-hal` 1.0 stack) and
//! hand the driver a [`LcdTransport`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  panelkit-display / panelkit-fractal    │
//! └─────────────────────────────────────────┘
//!                     │  LcdTransport
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  panelkit-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ PinTransport  │       │ HalTransport  │
//! │ (own traits)  │       │ (embedded-hal)│
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::SpiWrite`] - Write-only SPI master
//! - [`gpio::OutputPin`] - Digital output
//! - [`delay::DelayMs`] - Blocking millisecond delay
//! - [`transport::LcdTransport`] - The capability set consumed by drivers

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod embedded;
pub mod gpio;
pub mod spi;
pub mod transport;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use embedded::HalTransport;
pub use gpio::OutputPin;
pub use spi::SpiWrite;
pub use transport::{LcdTransport, PinTransport};
