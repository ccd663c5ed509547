//! # grice
//!
//! A lossless (and optionally near-lossless) compression library for
//! single-channel 8-bit raster images.
//!
//! The core is a streaming bit-level codec: a small spatial predictor, a
//! modulo-256 fold of the prediction residual, and an adaptive Golomb-Rice
//! coder whose parameter is re-estimated from each symbol as it goes by,
//! so no coder state ever travels in the stream. Two variants share that
//! machinery:
//!
//! - [`delta`] — the minimal codec: previous-sample prediction, pure
//!   Rice coding with a raw-byte tail escape. Fast and simple.
//! - [`loco`] — a LOCO-I style extension: median edge detector
//!   prediction, run-length shortcuts for flat regions, and optional
//!   near-lossless quantization.
//!
//! Both consume a raw `width x height` byte plane (row-major, up to
//! 65535 pixels per side) and emit a word-aligned stream whose length is
//! always a multiple of 8 bytes. The core allocates nothing; `*_to_vec`
//! wrappers are provided for convenience.
//!
//! ## Example
//!
//! ```rust
//! use grice::delta;
//!
//! let frame = vec![128u8; 64 * 64];
//! let encoded = delta::encode_to_vec(&frame, 64, 64).unwrap();
//! assert_eq!(delta::header(&encoded).unwrap(), (64, 64));
//!
//! let decoded = delta::decode_to_vec(&encoded, 64, 64).unwrap();
//! assert_eq!(decoded, frame);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bits;
pub mod delta;
pub mod error;
pub mod fold;
pub mod loco;
pub mod rice;

pub use error::{Error, Result};
pub use loco::{LocoHeader, LocoOptions};
