//! # cw-registers
//!
//! Decoder for register capture frames sent by a CWLITE-ARM target.
//!
//! The target captures 14 registers into one of a small number of buffers
//! and sends a buffer back as a fixed 57-byte frame: one buffer number byte
//! followed by the registers as big-endian `u32` values.
//!
//! ## Modules
//!
//! - [`protocol`]: wire layout, [`RegisterFrame`] and [`FrameBuffer`]
//! - [`bank`]: device-side register buffers that produce frames
//! - [`codec`]: MsgPack forwarding of decoded frames
//!
//! ## Example
//!
//! ```
//! use cw_registers::RegisterFrame;
//!
//! let mut bytes = vec![5u8];
//! for _ in 0..14 {
//!     bytes.extend_from_slice(&[0, 0, 0, 1]);
//! }
//!
//! let frame = RegisterFrame::from_bytes(&bytes)?;
//! assert_eq!(frame.buffer_num(), 5);
//! assert_eq!(frame.get(0)?, 1);
//! assert!(frame.get(14).is_err());
//! # Ok::<(), cw_registers::RegisterError>(())
//! ```

pub mod bank;
pub mod codec;
pub mod error;
pub mod protocol;

pub use bank::RegisterBank;
pub use error::{RegisterError, Result};
pub use protocol::{FrameBuffer, RegisterFrame};
