//! Codec module - structured serialization of decoded frames.
//!
//! - [`MsgPackCodec`] - MessagePack using `rmp-serde` (`to_vec_named`)
//!
//! Codecs are marker structs with static methods rather than trait objects.

mod msgpack;

pub use msgpack::MsgPackCodec;
