//! Error types for the grice library.

use std::fmt;

/// Result type alias for grice operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Frame or output length doesn't match the expected pixel count.
    InvalidDataLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes provided.
        actual: usize,
    },
    /// Decoded stream header disagrees with the caller-supplied dimensions.
    DimensionMismatch {
        /// Dimensions the caller expected, as (width, height).
        expected: (u16, u16),
        /// Dimensions recorded in the stream header.
        actual: (u16, u16),
    },
    /// Output buffer is smaller than the worst-case encoded size.
    BufferTooSmall {
        /// Minimum buffer size in bytes for these dimensions.
        needed: usize,
        /// Actual buffer size provided.
        actual: usize,
    },
    /// Buffer length is not a multiple of the 8-byte word size.
    Misaligned {
        /// Offending buffer length.
        len: usize,
    },
    /// The bit reader ran off the end of the input stream.
    UnexpectedEof {
        /// Bit position at which the read was attempted.
        bit_pos: usize,
    },
    /// The stream decoded to something the encoder cannot produce.
    CorruptStream(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDataLength { expected, actual } => {
                write!(f, "Invalid data length: expected {expected} bytes, got {actual}")
            }
            Error::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Dimension mismatch: expected {}x{}, stream has {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Error::BufferTooSmall { needed, actual } => {
                write!(f, "Output buffer too small: need {needed} bytes, got {actual}")
            }
            Error::Misaligned { len } => {
                write!(f, "Buffer length {len} is not a multiple of 8")
            }
            Error::UnexpectedEof { bit_pos } => {
                write!(f, "Unexpected end of stream at bit {bit_pos}")
            }
            Error::CorruptStream(msg) => {
                write!(f, "Corrupt stream: {msg}")
            }
        }
    }
}

impl std::error::Error for Error {}
