//! The delta codec: previous-sample prediction plus adaptive Rice coding.
//!
//! This is the fast, minimal variant. Each pixel is predicted by the last
//! reconstructed sample (0 at the start of the frame), the residual is
//! folded to an unsigned symbol, and the symbol is Rice-coded with a
//! parameter re-estimated from the symbol just sent. Nothing but the 32-bit
//! dimension header and the symbols themselves goes into the stream.
//!
//! ## Stream layout
//!
//! ```text
//! bits  0..15   width, LSB first
//! bits 16..31   height
//! bits 32..     one Rice symbol per pixel, row-major
//! flush         final 64-bit word padded with zeros, written whole
//! ```

use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::fold::{fold, unfold};
use crate::rice::{decode_symbol, encode_symbol, next_k, K0};

/// Worst-case symbol length: CUTOFF zeros, a stop bit, and the raw byte.
const MAX_SYMBOL_BITS: usize = 20;

/// Worst-case encoded size in bytes for a frame of the given dimensions.
///
/// Always a multiple of 8; a buffer of this size never triggers
/// [`Error::BufferTooSmall`]. Comes out a little over 2.5 bytes per pixel,
/// comfortably under the suggested `4 * width * height` allocation.
pub fn max_encoded_len(width: u16, height: u16) -> usize {
    let pixels = width as usize * height as usize;
    (32 + pixels * MAX_SYMBOL_BITS).div_ceil(64) * 8
}

/// Compress a grayscale frame into `output`, returning the byte count
/// written (always a multiple of 8).
///
/// `frame` holds `width * height` samples in row-major order. `output` must
/// be a multiple of 8 bytes long and at least [`max_encoded_len`] bytes.
pub fn encode(frame: &[u8], width: u16, height: u16, output: &mut [u8]) -> Result<usize> {
    let pixels = width as usize * height as usize;
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

    let mut writer = BitWriter::new(output);
    // Dimensions are the only shared knowledge carried in the stream; the
    // Rice parameter chain is reconstructed by the decoder.
    writer.push_bits(u32::from(width), 16);
    writer.push_bits(u32::from(height), 16);

    let mut k = K0;
    let mut prediction = 0u8;
    for &px in frame {
        let symbol = fold(px.wrapping_sub(prediction) as i8);
        encode_symbol(&mut writer, symbol, k);
        k = next_k(symbol);
        prediction = px;
    }
    Ok(writer.flush())
}

/// Compress a grayscale frame into a freshly allocated buffer.
pub fn encode_to_vec(frame: &[u8], width: u16, height: u16) -> Result<Vec<u8>> {
    let mut output = vec![0u8; max_encoded_len(width, height)];
    let written = encode(frame, width, height, &mut output)?;
    output.truncate(written);
    Ok(output)
}

/// Decompress a stream produced by [`encode`] into `output`, returning the
/// pixel count written.
///
/// `width` and `height` are the dimensions the caller expects; if the
/// stream header disagrees, decoding fails with
/// [`Error::DimensionMismatch`] before any pixel is written. `stream` must
/// be a multiple of 8 bytes long and `output` at least `width * height`
/// bytes.
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
    let pixels = width as usize * height as usize;
    if output.len() < pixels {
        return Err(Error::InvalidDataLength {
            expected: pixels,
            actual: output.len(),
        });
    }

    let mut k = K0;
    let mut prediction = 0u8;
    for slot in &mut output[..pixels] {
        let symbol = decode_symbol(&mut reader, k)?;
        let value = prediction.wrapping_add(unfold(symbol) as u8);
        *slot = value;
        prediction = value;
        k = next_k(symbol);
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

/// Peek the dimension header of an encoded stream without decoding it.
pub fn header(stream: &[u8]) -> Result<(u16, u16)> {
    let first = stream.get(..8).ok_or(Error::UnexpectedEof { bit_pos: 0 })?;
    let mut reader = BitReader::new(first);
    let w = reader.pull_bits(16)? as u16;
    let h = reader.pull_bits(16)? as u16;
    Ok((w, h))
}
