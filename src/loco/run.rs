//! Prefix-free run-length code for flat-region runs.
//!
//! The code follows the run flag bit written by the frame driver, so the
//! shortest runs cost almost nothing: including the flag, a run of one
//! pixel takes 2 bits and runs of 2..=5 take 5. Longer runs spend a unary
//! length prefix, a stop bit, and `lb` payload bits:
//!
//! ```text
//! count 1        0
//! count 2..=5    10  + 2 bits of (count - 2)
//! count 6..=255  1^(lb+1) 0 + lb bits of (count - 6),  lb = bitlen(count - 6)
//! ```
//!
//! Counts are capped at 255 by the encoder; a longer flat stretch is
//! simply emitted as consecutive runs.

use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};

/// Longest run a single code can carry.
pub(crate) const MAX_RUN: u32 = 255;

/// Encode a run length in `1..=MAX_RUN`. The caller has already written
/// the `1` flag bit that announces a run.
pub(crate) fn encode_count(writer: &mut BitWriter<'_>, count: u32) {
    debug_assert!((1..=MAX_RUN).contains(&count));
    match count {
        1 => writer.push_bit(false),
        2..=5 => {
            writer.push_bit(true);
            writer.push_bit(false);
            writer.push_bits(count - 2, 2);
        }
        _ => {
            let v = count - 6;
            let lb = (32 - v.leading_zeros()).max(1);
            writer.push_bits((1 << (lb + 1)) - 1, lb + 1);
            writer.push_bit(false);
            writer.push_bits(v, lb);
        }
    }
}

/// Decode a run length. The caller has already consumed the `1` flag bit.
pub(crate) fn decode_count(reader: &mut BitReader<'_>) -> Result<u32> {
    let mut ones = 0u32;
    while reader.pull_bit()? {
        ones += 1;
        if ones > 9 {
            return Err(Error::CorruptStream("run length prefix too long"));
        }
    }
    match ones {
        0 => Ok(1),
        1 => Ok(2 + reader.pull_bits(2)?),
        _ => Ok(6 + reader.pull_bits(ones - 1)?),
    }
}
