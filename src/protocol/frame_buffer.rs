//! Frame buffer for splitting a byte stream into register frames.
//!
//! Uses `bytes::BytesMut` for buffer management. Data read from a device,
//! socket or file arrives in arbitrary chunks; the buffer holds partial
//! data until a full 57-byte frame is available.
//!
//! When the number of device buffers is known, the buffer number byte is
//! used as a best-effort alignment check: a frame whose buffer number does
//! not exist cannot be real, so bytes are skipped until one that could be a
//! buffer number leads. A stray byte that happens to be a valid buffer
//! number is not caught; the frame it starts is emitted as-is. The layout
//! has no checksum, so nothing stronger is possible at this level.
//!
//! # Example
//!
//! ```
//! use cw_registers::protocol::{FrameBuffer, RegisterFrame};
//!
//! let mut buffer = FrameBuffer::new();
//! let bytes = RegisterFrame::new(1, [42; 14]).encode();
//!
//! // Data arrives in chunks
//! assert!(buffer.push(&bytes[..20]).unwrap().is_empty());
//! let frames = buffer.push(&bytes[20..]).unwrap();
//!
//! assert_eq!(frames.len(), 1);
//! assert_eq!(frames[0].get(0).unwrap(), 42);
//! ```

use bytes::BytesMut;

use super::wire_format::FRAME_SIZE;
use super::RegisterFrame;
use crate::error::Result;

/// Default initial capacity (room for 64 frames).
pub const DEFAULT_CAPACITY: usize = 64 * FRAME_SIZE;

/// Configuration for a frame buffer.
#[derive(Debug, Clone)]
pub struct FrameBufferConfig {
    /// Initial capacity of the internal buffer in bytes.
    pub capacity: usize,
    /// Number of buffers on the device. When set, frames whose buffer
    /// number is not below this value are treated as misaligned.
    /// `Some(0)` disables the check; values above 256 are capped.
    pub num_buffers: Option<usize>,
}

impl Default for FrameBufferConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            num_buffers: None,
        }
    }
}

/// Buffer for accumulating incoming bytes and extracting complete frames.
pub struct FrameBuffer {
    /// Accumulated bytes not yet consumed.
    buffer: BytesMut,
    /// Valid buffer number limit for resynchronization.
    num_buffers: Option<usize>,
    /// Bytes discarded while resynchronizing since the last `clear`.
    skipped: usize,
    /// Bytes discarded in the current resync run.
    run: usize,
}

impl FrameBuffer {
    /// Create a new frame buffer with default settings.
    pub fn new() -> Self {
        Self::with_config(FrameBufferConfig::default())
    }

    /// Create a new frame buffer with custom initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(FrameBufferConfig {
            capacity,
            ..FrameBufferConfig::default()
        })
    }

    /// Create a new frame buffer from a config.
    pub fn with_config(config: FrameBufferConfig) -> Self {
        let num_buffers = match config.num_buffers {
            Some(0) => None,
            Some(limit) => Some(limit.min(usize::from(u8::MAX) + 1)),
            None => None,
        };
        Self {
            buffer: BytesMut::with_capacity(config.capacity),
            num_buffers,
            skipped: 0,
            run: 0,
        }
    }

    /// Push data into the buffer and extract all complete frames.
    ///
    /// Returns frames in stream order. Partial trailing data is buffered
    /// for the next push.
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<RegisterFrame>> {
        self.buffer.extend_from_slice(data);

        let mut frames = Vec::with_capacity(self.buffer.len() / FRAME_SIZE);
        while let Some(frame) = self.try_extract_one()? {
            frames.push(frame);
        }

        if !frames.is_empty() {
            tracing::debug!(
                "Extracted {} register frames, {} bytes pending",
                frames.len(),
                self.buffer.len()
            );
        }

        Ok(frames)
    }

    /// Try to extract a single frame from the buffer.
    fn try_extract_one(&mut self) -> Result<Option<RegisterFrame>> {
        loop {
            if self.buffer.len() < FRAME_SIZE {
                return Ok(None);
            }

            if let Some(limit) = self.num_buffers {
                let buffer_num = self.buffer[0];
                if usize::from(buffer_num) >= limit {
                    if self.run == 0 {
                        tracing::warn!(
                            "Lost frame alignment: buffer number {} exceeds {} buffers, skipping",
                            buffer_num,
                            limit
                        );
                    }
                    let _ = self.buffer.split_to(1);
                    self.skipped += 1;
                    self.run += 1;
                    continue;
                }
            }

            if self.run > 0 {
                tracing::debug!("Realigned after skipping {} bytes", self.run);
                self.run = 0;
            }

            let chunk = self.buffer.split_to(FRAME_SIZE);
            return RegisterFrame::from_bytes(&chunk).map(Some);
        }
    }

    /// Get the number of buffered bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the number of bytes discarded while resynchronizing since
    /// creation or the last `clear`.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Get the effective buffer number limit, if any.
    pub fn num_buffers(&self) -> Option<usize> {
        self.num_buffers
    }

    /// Clear pending bytes and the skip count, e.g. after the caller
    /// resynchronizes the stream.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.skipped = 0;
        self.run = 0;
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
