//! ST7735 controller protocol
//!
//! This crate describes what travels over the panel's SPI link, independent
//! of any bus implementation:
//!
//! - Command opcodes and MADCTL bits ([`cmd`])
//! - The compact init-script format and its parser ([`script`])
//! - The built-in bring-up scripts ([`scripts`])
//! - Address-window parameter encoding ([`window`])
//!
//! # Init script format
//!
//! ```text
//! ┌───────┬─────────┬───────────────┬──────────┬───────────┬─────┐
//! │ COUNT │ COMMAND │ ARGC [|DELAY] │ ARGS     │ [DELAY MS]│ ... │
//! │ 1B    │ 1B      │ 1B            │ ARGC B   │ 1B        │     │
//! └───────┴─────────┴───────────────┴──────────┴───────────┴─────┘
//! ```
//!
//! When the high bit of the argument count is set, one delay byte follows
//! the arguments (255 means 500 ms).

#![no_std]
#![deny(unsafe_code)]

pub mod cmd;
pub mod script;
pub mod scripts;
pub mod window;

pub use cmd::{Madctl, Orientation};
pub use script::{Script, ScriptError, ScriptReader, ScriptRecord, DELAY_FLAG};
pub use scripts::{INIT_7735B, INIT_7735R, INIT_7735R3, INIT_SEQUENCE};
pub use window::AddressWindow;
