//! The loco codec: LOCO-I style compression with a median edge detector,
//! optional run mode, and optional near-lossless quantization.
//!
//! Shares the bitstream plumbing, residual fold, and adaptive Rice coder
//! with the [`delta`](crate::delta) variant, trading its single-neighbor
//! predictor for the full causal neighborhood. Flat regions can be
//! shortcut with run-length codes, and a nonzero `near` tolerance buys
//! extra compression by quantizing residuals to within `±near`.
//!
//! ## Stream layout
//!
//! ```text
//! bits  0..15   width, LSB first
//! bits 16..31   height
//! bits 32..39   near
//! bit  40       run mode enabled
//! bits 41..     per pixel: a run flag plus run-length code in flat
//!               regions, otherwise one Rice symbol
//! flush         final 64-bit word padded with zeros, written whole
//! ```
//!
//! Unlike `delta`, the Rice parameter and the last-sample state reset at
//! the start of every scan line, and again after each run.

pub(crate) mod predictor;
pub(crate) mod run;

use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::fold::{fold, unfold};
use crate::rice::{decode_symbol, encode_symbol, next_k, K0};

use predictor::Neighbors;

/// Encoding options for the loco codec.
///
/// Only `near` is recorded in the stream; `run_mode` occupies a single
/// header bit so that decoding needs no out-of-band configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocoOptions {
    /// Emit run-length codes in flat regions.
    pub run_mode: bool,
    /// Reconstruction tolerance; 0 is lossless.
    pub near: u8,
}

impl Default for LocoOptions {
    fn default() -> Self {
        Self::lossless()
    }
}

impl LocoOptions {
    /// Exact reconstruction, no run mode.
    pub fn lossless() -> Self {
        Self {
            run_mode: false,
            near: 0,
        }
    }

    /// Exact reconstruction with run-length shortcuts for flat regions.
    pub fn with_runs() -> Self {
        Self {
            run_mode: true,
            near: 0,
        }
    }

    /// Near-lossless mode: reconstruction within `±near` of the encoder's
    /// working frame, with run mode enabled.
    pub fn near(near: u8) -> Self {
        Self {
            run_mode: true,
            near,
        }
    }
}

/// Header fields of an encoded loco stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocoHeader {
    /// Frame width in pixels.
    pub width: u16,
    /// Frame height in pixels.
    pub height: u16,
    /// Reconstruction tolerance the stream was encoded with.
    pub near: u8,
    /// Whether the stream contains run-length codes.
    pub run_mode: bool,
}

/// Header size: width, height, near, and the run-mode bit.
const HEADER_BITS: usize = 16 + 16 + 8 + 1;

/// Worst-case cost per pixel: a run-context flag plus a full escape symbol.
const MAX_PIXEL_BITS: usize = 21;

/// Worst-case encoded size in bytes for a frame of the given dimensions.
/// Always a multiple of 8.
pub fn max_encoded_len(width: u16, height: u16) -> usize {
    let pixels = width as usize * height as usize;
    (HEADER_BITS + pixels * MAX_PIXEL_BITS).div_ceil(64) * 8
}

/// Compress a grayscale frame into `output`, returning the byte count
/// written (always a multiple of 8).
///
/// `frame` holds `width * height` samples in row-major order. When
/// `options.near > 0` the frame is rewritten in place with the
/// reconstructed samples, so that after the call it matches what
/// [`decode`] will produce; with `near == 0` it is never modified.
/// `output` must be a multiple of 8 bytes long and at least
/// [`max_encoded_len`] bytes.
pub fn encode(
    frame: &mut [u8],
    width: u16,
    height: u16,
    options: &LocoOptions,
    output: &mut [u8],
) -> Result<usize> {
    let w = width as usize;
    let pixels = w * height as usize;
    if frame.len() != pixels {
        return Err(Error::InvalidDataLength {
            expected: pixels,
            actual: frame.len(),
        });
    }
    if output.len() % 8 != 0 {
        return Err(Error::Misaligned { len: output.len() });
    }
    let needed = max_encoded_len(width, height);
    if output.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            actual: output.len(),
        });
    }

    let near = options.near;
    let mut writer = BitWriter::new(output);
    writer.push_bits(u32::from(width), 16);
    writer.push_bits(u32::from(height), 16);
    writer.push_bits(u32::from(near), 8);
    writer.push_bit(options.run_mode);

    for y in 0..height as usize {
        let (done, rest) = frame.split_at_mut(y * w);
        let line = &mut rest[..w];
        let prev = if y == 0 { None } else { Some(&done[(y - 1) * w..]) };

        let mut k = K0;
        let mut last: Option<u8> = None;
        let mut x = 0;
        while x < w {
            let neighbors = Neighbors::at(prev, line, x);
            if options.run_mode && neighbors.flat(near) {
                if let Some(run_value) = last {
                    let mut count = 0u32;
                    while x < w && count < run::MAX_RUN && within_near(line[x], run_value, near) {
                        line[x] = run_value;
                        x += 1;
                        count += 1;
                    }
                    if count > 0 {
                        writer.push_bit(true);
                        run::encode_count(&mut writer, count);
                        k = K0; // a run usually ends on an edge
                        continue;
                    }
                    writer.push_bit(false);
                }
            }

            let pred = neighbors.predict();
            let reconstructed = encode_sample(&mut writer, line[x], pred, near, &mut k);
            line[x] = reconstructed;
            last = Some(reconstructed);
            x += 1;
        }
    }
    Ok(writer.flush())
}

/// Compress a grayscale frame into a freshly allocated buffer. See
/// [`encode`] for the in-place reconstruction behavior of `near > 0`.
pub fn encode_to_vec(
    frame: &mut [u8],
    width: u16,
    height: u16,
    options: &LocoOptions,
) -> Result<Vec<u8>> {
    let mut output = vec![0u8; max_encoded_len(width, height)];
    let written = encode(frame, width, height, options, &mut output)?;
    output.truncate(written);
    Ok(output)
}

/// Quantize (for `near > 0`), fold, and Rice-encode one residual,
/// returning the reconstructed sample value.
#[inline]
fn encode_sample(writer: &mut BitWriter<'_>, value: u8, pred: u8, near: u8, k: &mut u8) -> u8 {
    let wide = i32::from(value) - i32::from(pred);
    let (delta, reconstructed) = if near > 0 {
        let t = i32::from(near);
        let step = 2 * t + 1;
        let q = if wide >= 0 {
            (t + wide) / step
        } else {
            -((t - wide) / step)
        };
        (q, (i32::from(pred) + q * step) as u8)
    } else {
        (wide, value)
    };

    let symbol = fold(delta as u8 as i8);
    encode_symbol(writer, symbol, *k);
    *k = next_k(symbol);
    reconstructed
}

/// Decompress a stream produced by [`encode`] into `output`, returning the
/// pixel count written.
///
/// The tolerance and run-mode settings are taken from the stream header;
/// `width` and `height` are validated against it. `stream` must be a
/// multiple of 8 bytes long and `output` at least `width * height` bytes.
pub fn decode(stream: &[u8], output: &mut [u8], width: u16, height: u16) -> Result<usize> {
    if stream.len() % 8 != 0 {
        return Err(Error::Misaligned { len: stream.len() });
    }
    let mut reader = BitReader::new(stream);
    let w = reader.pull_bits(16)? as u16;
    let h = reader.pull_bits(16)? as u16;
    if (w, h) != (width, height) {
        return Err(Error::DimensionMismatch {
            expected: (width, height),
            actual: (w, h),
        });
    }
    let near = reader.pull_bits(8)? as u8;
    let run_mode = reader.pull_bit()?;

    let w = width as usize;
    let pixels = w * height as usize;
    if output.len() < pixels {
        return Err(Error::InvalidDataLength {
            expected: pixels,
            actual: output.len(),
        });
    }

    let step = 2 * i32::from(near) + 1;
    for y in 0..height as usize {
        let (done, rest) = output.split_at_mut(y * w);
        let line = &mut rest[..w];
        let prev = if y == 0 { None } else { Some(&done[(y - 1) * w..]) };

        let mut k = K0;
        let mut last: Option<u8> = None;
        let mut x = 0;
        while x < w {
            let neighbors = Neighbors::at(prev, line, x);
            if run_mode && neighbors.flat(near) {
                if let Some(run_value) = last {
                    if reader.pull_bit()? {
                        let count = run::decode_count(&mut reader)? as usize;
                        if x + count > w {
                            return Err(Error::CorruptStream("run overflows scan line"));
                        }
                        line[x..x + count].fill(run_value);
                        x += count;
                        k = K0;
                        continue;
                    }
                }
            }

            let pred = neighbors.predict();
            let symbol = decode_symbol(&mut reader, k)?;
            k = next_k(symbol);
            let delta = i32::from(unfold(symbol));
            let value = (i32::from(pred) + delta * step) as u8;
            line[x] = value;
            last = Some(value);
            x += 1;
        }
    }
    Ok(pixels)
}

/// Decompress a stream produced by [`encode`] into a freshly allocated
/// buffer of `width * height` bytes.
pub fn decode_to_vec(stream: &[u8], width: u16, height: u16) -> Result<Vec<u8>> {
    let mut output = vec![0u8; width as usize * height as usize];
    decode(stream, &mut output, width, height)?;
    Ok(output)
}

/// Peek the header of an encoded loco stream without decoding it.
pub fn header(stream: &[u8]) -> Result<LocoHeader> {
    let first = stream.get(..8).ok_or(Error::UnexpectedEof { bit_pos: 0 })?;
    let mut reader = BitReader::new(first);
    let width = reader.pull_bits(16)? as u16;
    let height = reader.pull_bits(16)? as u16;
    let near = reader.pull_bits(8)? as u8;
    let run_mode = reader.pull_bit()?;
    Ok(LocoHeader {
        width,
        height,
        near,
        run_mode,
    })
}

#[inline]
fn within_near(value: u8, reference: u8, near: u8) -> bool {
    (i16::from(value) - i16::from(reference)).abs() <= i16::from(near)
}
