//! Wire format encoding and decoding.
//!
//! Implements the fixed 57-byte register frame:
//! ```text
//! ┌────────────┬────────────┬────────────┬─────┬─────────────┐
//! │ Buffer num │ Register 0 │ Register 1 │ ... │ Register 13 │
//! │ 1 byte     │ 4 bytes    │ 4 bytes    │     │ 4 bytes     │
//! │ raw        │ uint32 BE  │ uint32 BE  │     │ uint32 BE   │
//! └────────────┴────────────┴────────────┴─────┴─────────────┘
//! ```
//!
//! All multi-byte integers are Big Endian. There is no version field,
//! checksum or delimiter.

use crate::error::{RegisterError, Result};

/// Size of the buffer number field in bytes.
pub const BUFFER_NUM_SIZE: usize = 1;

/// Size of a single register in bytes.
pub const REGSIZE: usize = 4;

/// Number of registers in a frame.
pub const NUM_REGS: usize = 14;

/// Frame size in bytes (fixed, exactly 57).
pub const FRAME_SIZE: usize = BUFFER_NUM_SIZE + REGSIZE * NUM_REGS;

/// Default number of register buffers on the device.
pub const DEFAULT_NUM_BUFFERS: usize = 2;

/// Simpleserial command byte the device sends frames with.
pub const REGISTERS_COMMAND: u8 = b'r';

/// Byte offset of register `index` within a frame.
#[inline]
pub const fn register_offset(index: usize) -> usize {
    BUFFER_NUM_SIZE + index * REGSIZE
}

/// Decode one big-endian register from the first `REGSIZE` bytes of `buf`.
///
/// Returns `None` if buffer is too short.
#[inline]
pub fn decode_register(buf: &[u8]) -> Option<u32> {
    let bytes: [u8; REGSIZE] = buf.get(..REGSIZE)?.try_into().ok()?;
    Some(u32::from_be_bytes(bytes))
}

/// Encode one register big-endian into the first `REGSIZE` bytes of `buf`.
///
/// # Panics
///
/// Panics if `buf` is shorter than `REGSIZE`.
#[inline]
pub fn encode_register(value: u32, buf: &mut [u8]) {
    buf[..REGSIZE].copy_from_slice(&value.to_be_bytes());
}

/// Decode a complete frame into its buffer number and register values.
///
/// # Errors
///
/// Returns `MalformedInput` unless `buf` is exactly `FRAME_SIZE` bytes.
///
/// # Example
///
/// ```
/// use cw_registers::protocol::{decode_frame, FRAME_SIZE};
///
/// let mut bytes = [0u8; FRAME_SIZE];
/// bytes[0] = 1;
/// bytes[1..5].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
///
/// let (buffer_num, registers) = decode_frame(&bytes).unwrap();
/// assert_eq!(buffer_num, 1);
/// assert_eq!(registers[0], 0x0102_0304);
/// ```
pub fn decode_frame(buf: &[u8]) -> Result<(u8, [u32; NUM_REGS])> {
    if buf.len() != FRAME_SIZE {
        return Err(RegisterError::MalformedInput {
            expected: FRAME_SIZE,
            actual: buf.len(),
        });
    }

    let mut registers = [0u32; NUM_REGS];
    let chunks = buf[BUFFER_NUM_SIZE..].chunks_exact(REGSIZE);
    for (slot, chunk) in registers.iter_mut().zip(chunks) {
        let bytes: [u8; REGSIZE] = chunk.try_into().map_err(|_| RegisterError::MalformedInput {
            expected: FRAME_SIZE,
            actual: buf.len(),
        })?;
        *slot = u32::from_be_bytes(bytes);
    }

    Ok((buf[0], registers))
}

/// Encode a buffer number and register values into a frame.
pub fn encode_frame(buffer_num: u8, registers: &[u32; NUM_REGS]) -> [u8; FRAME_SIZE] {
    let mut buf = [0u8; FRAME_SIZE];
    buf[0] = buffer_num;
    for (index, value) in registers.iter().enumerate() {
        encode_register(*value, &mut buf[register_offset(index)..]);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_is_exactly_57() {
        assert_eq!(FRAME_SIZE, 57);
        assert_eq!(encode_frame(0, &[0; NUM_REGS]).len(), 57);
    }

    #[test]
    fn test_register_offsets() {
        assert_eq!(register_offset(0), 1);
        assert_eq!(register_offset(1), 5);
        assert_eq!(register_offset(13), 53);
        assert_eq!(register_offset(13) + REGSIZE, FRAME_SIZE);
    }

    #[test]
    fn test_decode_register_big_endian() {
        assert_eq!(decode_register(&[0x01, 0x02, 0x03, 0x04]), Some(0x0102_0304));
        assert_eq!(decode_register(&[0xFF, 0x00, 0x00, 0x00]), Some(0xFF00_0000));
        assert_eq!(decode_register(&[0x00, 0x00, 0x00, 0xFF]), Some(0x0000_00FF));
    }

    #[test]
    fn test_decode_register_too_short_buffer() {
        assert!(decode_register(&[]).is_none());
        assert!(decode_register(&[0x01, 0x02]).is_none());
        assert!(decode_register(&[0x01, 0x02, 0x03]).is_none());
    }

    #[test]
    fn test_decode_register_ignores_trailing_bytes() {
        assert_eq!(decode_register(&[0x0A, 0x0B, 0x0C, 0x0D, 0xFF]), Some(0x0A0B_0C0D));
    }

    #[test]
    fn test_encode_register_big_endian() {
        let mut buf = [0u8; REGSIZE];
        encode_register(0xDEAD_BEEF, &mut buf);
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_encode_frame_byte_order() {
        let mut registers = [0u32; NUM_REGS];
        registers[0] = 0x0102_0304;
        registers[13] = 0x0A0B_0C0D;
        let bytes = encode_frame(7, &registers);

        assert_eq!(bytes[0], 7);
        assert_eq!(&bytes[1..5], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&bytes[53..57], &[0x0A, 0x0B, 0x0C, 0x0D]);
        assert!(bytes[5..53].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_decode_frame_wrong_length() {
        for len in [0, 1, 56, 58, 114] {
            let buf = vec![0u8; len];
            match decode_frame(&buf) {
                Err(RegisterError::MalformedInput { expected, actual }) => {
                    assert_eq!(expected, FRAME_SIZE);
                    assert_eq!(actual, len);
                }
                other => panic!("expected MalformedInput for {len} bytes, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_decode_frame_all_registers() {
        let mut buf = [0u8; FRAME_SIZE];
        buf[0] = 0xAB;
        for i in 0..NUM_REGS {
            let value = (i as u32 + 1) * 0x0101_0101;
            buf[register_offset(i)..register_offset(i) + REGSIZE]
                .copy_from_slice(&value.to_be_bytes());
        }

        let (buffer_num, registers) = decode_frame(&buf).unwrap();
        assert_eq!(buffer_num, 0xAB);
        for (i, value) in registers.iter().enumerate() {
            assert_eq!(*value, (i as u32 + 1) * 0x0101_0101);
        }
    }

    #[test]
    fn test_encode_decode_extremes() {
        let registers = [u32::MAX; NUM_REGS];
        let bytes = encode_frame(u8::MAX, &registers);
        assert!(bytes.iter().all(|&b| b == 0xFF));

        let (buffer_num, decoded) = decode_frame(&bytes).unwrap();
        assert_eq!(buffer_num, u8::MAX);
        assert_eq!(decoded, registers);
    }

    #[test]
    fn test_registers_command_byte() {
        assert_eq!(REGISTERS_COMMAND, 0x72);
    }
}
