//! MsgPack codec using `rmp-serde`.
//!
//! Always uses `to_vec_named`, so structs are written as maps with field
//! names. A `RegisterFrame` becomes `{ buffer_num, registers }`, which
//! non-Rust consumers can read without knowing field order.
//!
//! # Example
//!
//! ```
//! use cw_registers::codec::MsgPackCodec;
//! use cw_registers::protocol::RegisterFrame;
//!
//! let frame = RegisterFrame::new(1, [0xAB; 14]);
//! let encoded = MsgPackCodec::encode(&frame).unwrap();
//! let decoded: RegisterFrame = MsgPackCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, frame);
//! ```

use crate::error::Result;

/// MessagePack codec for forwarding decoded frames.
pub struct MsgPackCodec;

impl MsgPackCodec {
    /// Encode a value to MsgPack bytes (struct-as-map format).
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be serialized.
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(value)?)
    }

    /// Decode MsgPack bytes to a value.
    ///
    /// # Errors
    ///
    /// Returns error if the bytes cannot be deserialized to type T.
    #[inline]
    pub fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        Ok(rmp_serde::from_slice(bytes)?)
    }
}
