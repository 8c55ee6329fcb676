//! Register bank holding captured register sets.
//!
//! Models the device side of the protocol: a fixed number of buffers, each
//! holding one set of `NUM_REGS` captured register values. A capture
//! overwrites a buffer; sending a buffer produces the frame a reader decodes
//! with [`RegisterFrame::from_bytes`].
//!
//! # Example
//!
//! ```
//! use cw_registers::bank::RegisterBank;
//!
//! let mut bank = RegisterBank::new();
//! bank.capture(1, [0x2000_0000; 14]).unwrap();
//!
//! let frame = bank.frame(1).unwrap();
//! assert_eq!(frame.buffer_num(), 1);
//! assert_eq!(frame.get(0).unwrap(), 0x2000_0000);
//! ```

use crate::error::{RegisterError, Result};
use crate::protocol::{RegisterFrame, DEFAULT_NUM_BUFFERS, FRAME_SIZE, NUM_REGS};

/// Configuration for a register bank.
#[derive(Debug, Clone)]
pub struct BankConfig {
    /// Number of buffers. Only the first 256 are addressable by a `u8`
    /// buffer number.
    pub num_buffers: usize,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            num_buffers: DEFAULT_NUM_BUFFERS,
        }
    }
}

/// Fixed set of register buffers, zeroed on creation.
#[derive(Debug, Clone)]
pub struct RegisterBank {
    buffers: Vec<[u32; NUM_REGS]>,
}

impl RegisterBank {
    /// Create a bank with the default number of buffers.
    pub fn new() -> Self {
        Self::with_config(BankConfig::default())
    }

    /// Create a bank from a config.
    pub fn with_config(config: BankConfig) -> Self {
        let num_buffers = config.num_buffers.min(usize::from(u8::MAX) + 1);
        Self {
            buffers: vec![[0u32; NUM_REGS]; num_buffers],
        }
    }

    /// Number of buffers in the bank.
    #[inline]
    pub fn num_buffers(&self) -> usize {
        self.buffers.len()
    }

    fn unknown(&self, buffer_num: u8) -> RegisterError {
        RegisterError::UnknownBuffer {
            buffer_num,
            num_buffers: self.buffers.len(),
        }
    }

    fn slot(&self, buffer_num: u8) -> Result<&[u32; NUM_REGS]> {
        self.buffers
            .get(usize::from(buffer_num))
            .ok_or_else(|| self.unknown(buffer_num))
    }

    fn slot_mut(&mut self, buffer_num: u8) -> Result<&mut [u32; NUM_REGS]> {
        let err = self.unknown(buffer_num);
        self.buffers.get_mut(usize::from(buffer_num)).ok_or(err)
    }

    /// Store a captured register set into `buffer_num`.
    pub fn capture(&mut self, buffer_num: u8, registers: [u32; NUM_REGS]) -> Result<()> {
        *self.slot_mut(buffer_num)? = registers;
        tracing::debug!("Captured registers into buffer {}", buffer_num);
        Ok(())
    }

    /// Build the frame for `buffer_num`.
    pub fn frame(&self, buffer_num: u8) -> Result<RegisterFrame> {
        Ok(RegisterFrame::new(buffer_num, *self.slot(buffer_num)?))
    }

    /// Encode `buffer_num` into the wire layout, ready to send.
    pub fn encode(&self, buffer_num: u8) -> Result<[u8; FRAME_SIZE]> {
        Ok(self.frame(buffer_num)?.encode())
    }

    /// Iterate over the frames of every buffer, in buffer order.
    pub fn frames(&self) -> impl Iterator<Item = RegisterFrame> + '_ {
        self.buffers
            .iter()
            .enumerate()
            .map(|(index, registers)| RegisterFrame::new(index as u8, *registers))
    }
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new()
    }
}
