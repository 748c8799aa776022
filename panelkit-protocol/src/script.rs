//! Init-script parsing
//!
//! Script layout:
//! - COUNT (1 byte): number of records that follow
//! - per record:
//!   - COMMAND (1 byte)
//!   - ARGC (1 byte): argument count, high bit ([`DELAY_FLAG`]) set when a
//!     delay byte follows the arguments
//!   - ARGS (ARGC & 0x7F bytes)
//!   - DELAY (1 byte, only with the flag): milliseconds, 255 means 500 ms
//!
//! Bytes after the last declared record are ignored.

/// Argument-count flag announcing a trailing delay byte
pub const DELAY_FLAG: u8 = 0x80;

/// Delay byte value that stands for [`LONG_DELAY_MS`]
pub const LONG_DELAY: u8 = 255;

/// Delay substituted for [`LONG_DELAY`]
pub const LONG_DELAY_MS: u16 = 500;

/// Errors that can occur while reading a script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScriptError {
    /// Script has no count byte
    Empty,
    /// Script ended inside the given record (0-based)
    Truncated { record: u8 },
}

/// One decoded controller command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRecord<'a> {
    /// Command opcode (sent with D/C low)
    pub command: u8,
    /// Parameter bytes (sent with D/C high)
    pub args: &'a [u8],
    /// Wait after the command, if any
    pub delay_ms: Option<u16>,
}

/// A borrowed init script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Script<'a> {
    bytes: &'a [u8],
}

impl<'a> Script<'a> {
    /// Wrap raw script bytes
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Raw script bytes
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Iterate over the records
    pub fn records(&self) -> ScriptReader<'a> {
        ScriptReader::new(self.bytes)
    }

    /// Parse the whole script, returning the number of records
    pub fn validate(&self) -> Result<u8, ScriptError> {
        let mut count = 0u8;
        for record in self.records() {
            record?;
            count += 1;
        }
        Ok(count)
    }

    /// Sum of all post-command delays
    pub fn total_delay_ms(&self) -> Result<u32, ScriptError> {
        let mut total = 0u32;
        for record in self.records() {
            total += record?.delay_ms.unwrap_or(0) as u32;
        }
        Ok(total)
    }
}

/// Cursor over the records of a script
///
/// Yields `Err` at most once; iteration stops after an error.
#[derive(Debug, Clone)]
pub struct ScriptReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    remaining: Option<u8>,
    index: u8,
    done: bool,
}

impl<'a> ScriptReader<'a> {
    /// Create a reader positioned before the count byte
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            remaining: None,
            index: 0,
            done: false,
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        let slice = self.bytes.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    fn read_record(&mut self) -> Option<ScriptRecord<'a>> {
        let command = self.next_byte()?;
        let argc = self.next_byte()?;
        let args = self.take((argc & !DELAY_FLAG) as usize)?;

        let delay_ms = if argc & DELAY_FLAG != 0 {
            let raw = self.next_byte()?;
            Some(if raw == LONG_DELAY {
                LONG_DELAY_MS
            } else {
                raw as u16
            })
        } else {
            None
        };

        Some(ScriptRecord {
            command,
            args,
            delay_ms,
        })
    }

    fn fail(&mut self, error: ScriptError) -> Option<Result<ScriptRecord<'a>, ScriptError>> {
        self.done = true;
        Some(Err(error))
    }
}

impl<'a> Iterator for ScriptReader<'a> {
    type Item = Result<ScriptRecord<'a>, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let remaining = match self.remaining {
            Some(n) => n,
            None => match self.next_byte() {
                Some(n) => n,
                None => return self.fail(ScriptError::Empty),
            },
        };

        if remaining == 0 {
            self.done = true;
            return None;
        }

        match self.read_record() {
            Some(record) => {
                self.remaining = Some(remaining - 1);
                self.index = self.index.wrapping_add(1);
                Some(Ok(record))
            }
            None => {
                let record = self.index;
                self.fail(ScriptError::Truncated { record })
            }
        }
    }
}
