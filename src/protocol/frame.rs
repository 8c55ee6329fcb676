//! Register frame with typed accessors.
//!
//! Represents one decoded frame: the buffer number plus the 14 registers
//! captured into that buffer. Frames are immutable once constructed.
//!
//! # Example
//!
//! ```
//! use cw_registers::protocol::RegisterFrame;
//!
//! let mut bytes = vec![5u8];
//! for _ in 0..14 {
//!     bytes.extend_from_slice(&[0, 0, 0, 1]);
//! }
//!
//! let frame = RegisterFrame::from_bytes(&bytes).unwrap();
//! assert_eq!(frame.buffer_num(), 5);
//! assert_eq!(frame.get(13).unwrap(), 1);
//! ```

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use super::wire_format::{decode_frame, encode_frame, FRAME_SIZE, NUM_REGS};
use crate::error::{RegisterError, Result};

/// A decoded register frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegisterFrame {
    buffer_num: u8,
    registers: [u32; NUM_REGS],
}

impl RegisterFrame {
    /// Create a frame from already decoded values.
    pub fn new(buffer_num: u8, registers: [u32; NUM_REGS]) -> Self {
        Self {
            buffer_num,
            registers,
        }
    }

    /// Decode a frame from exactly `FRAME_SIZE` bytes.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` for any other length. No partial frame is
    /// ever produced.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (buffer_num, registers) = decode_frame(data)?;
        tracing::trace!("Decoded register frame for buffer {}", buffer_num);
        Ok(Self::new(buffer_num, registers))
    }

    /// Get the value of register `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` carrying the index if it is not in `[0, NUM_REGS)`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<u32> {
        self.registers
            .get(index)
            .copied()
            .ok_or(RegisterError::OutOfRange { index })
    }

    /// Get the buffer number this frame was captured into.
    #[inline]
    pub fn buffer_num(&self) -> u8 {
        self.buffer_num
    }

    /// Get all register values in index order.
    #[inline]
    pub fn registers(&self) -> &[u32; NUM_REGS] {
        &self.registers
    }

    /// Iterate over `(index, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.registers.iter().copied().enumerate()
    }

    /// Encode back into the wire layout.
    ///
    /// # Example
    ///
    /// ```
    /// use cw_registers::protocol::{RegisterFrame, FRAME_SIZE};
    ///
    /// let frame = RegisterFrame::new(1, [0xCAFE_F00D; 14]);
    /// let bytes = frame.encode();
    /// assert_eq!(bytes.len(), FRAME_SIZE);
    /// assert_eq!(RegisterFrame::from_bytes(&bytes).unwrap(), frame);
    /// ```
    pub fn encode(&self) -> [u8; FRAME_SIZE] {
        encode_frame(self.buffer_num, &self.registers)
    }

    /// Write the human-readable register listing to `out`.
    ///
    /// One `Registers:` line, then one line per register with a two-digit
    /// index and the value as zero-padded 8-digit hex.
    pub fn dump<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }

    /// Dump the register listing to stdout.
    pub fn print(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.dump(&mut handle)
    }
}

impl TryFrom<&[u8]> for RegisterFrame {
    type Error = RegisterError;

    fn try_from(data: &[u8]) -> Result<Self> {
        Self::from_bytes(data)
    }
}

impl From<RegisterFrame> for [u8; FRAME_SIZE] {
    fn from(frame: RegisterFrame) -> Self {
        frame.encode()
    }
}

impl fmt::Display for RegisterFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registers:")?;
        for (index, value) in self.iter() {
            writeln!(f, "  {:02}: {:08x}", index, value)?;
        }
        Ok(())
    }
}
