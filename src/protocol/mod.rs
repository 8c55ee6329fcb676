//! Protocol module - wire format, framing, and frame types.
//!
//! This module implements the register frame protocol:
//! - 57-byte frame encoding/decoding
//! - Frame buffer for splitting a byte stream into frames
//! - RegisterFrame struct with typed accessors

mod frame;
mod frame_buffer;
mod wire_format;

pub use frame::RegisterFrame;
pub use frame_buffer::{FrameBuffer, FrameBufferConfig, DEFAULT_CAPACITY};
pub use wire_format::{
    decode_frame, decode_register, encode_frame, encode_register, register_offset,
    BUFFER_NUM_SIZE, DEFAULT_NUM_BUFFERS, FRAME_SIZE, NUM_REGS, REGISTERS_COMMAND, REGSIZE,
};
