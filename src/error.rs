//! Error types for cw-registers.

use thiserror::Error;

/// Main error type for all register frame operations.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Input byte sequence does not have the exact frame length.
    #[error("Malformed input: expected {expected} bytes, got {actual}")]
    MalformedInput {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Register index outside `[0, NUM_REGS)`.
    #[error("Out of range: register {index} does not exist")]
    OutOfRange {
        /// The offending index.
        index: usize,
    },

    /// Register bank has no slot for this buffer number.
    #[error("Unknown buffer {buffer_num} (bank holds {num_buffers} buffers)")]
    UnknownBuffer {
        /// Requested buffer number.
        buffer_num: u8,
        /// Number of slots in the bank.
        num_buffers: usize,
    },

    /// I/O error while writing a dump.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// MsgPack serialization error.
    #[error("MsgPack encode error: {0}")]
    MsgPackEncode(#[from] rmp_serde::encode::Error),

    /// MsgPack deserialization error.
    #[error("MsgPack decode error: {0}")]
    MsgPackDecode(#[from] rmp_serde::decode::Error),
}

/// Result type alias using RegisterError.
pub type Result<T> = std::result::Result<T, RegisterError>;
