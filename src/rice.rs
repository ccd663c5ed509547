//! Adaptive Golomb-Rice coding of byte symbols with a raw-byte tail escape.
//!
//! A symbol `r` is split by the current parameter `k` into a quotient
//! `q = r >> k`, sent in unary (`q` zeros then a one), and `k` remainder
//! bits. Quotients of [`CUTOFF`] or more would produce long unary runs, so
//! they are replaced by `CUTOFF` zeros, a one, and the full 8-bit symbol,
//! bounding the worst case at 20 bits.
//!
//! `k` itself is never transmitted. Both sides start a frame at [`K0`] and
//! after every symbol move to `K4RICE[r]`, so the parameter sequence is a
//! pure function of the decoded symbols.

use crate::bits::{BitReader, BitWriter};
use crate::error::Result;

/// Unary-prefix cap before switching to the 8-bit raw tail.
pub const CUTOFF: u32 = 11;

/// Rice parameter at the start of a frame.
pub const K0: u8 = 7;

/// Parameter update table: `K4RICE[r]` is the `k` used for the symbol after
/// `r`. Equals `max(0, ceil(log2(r + 1)) - 1)`; the minus one biases `k`
/// low, which compresses slightly better than the exact estimate.
pub static K4RICE: [u8; 256] = build_k4rice();

const fn build_k4rice() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut r = 0usize;
    while r < 256 {
        let mut bits = 0u8;
        while (1usize << bits) < r {
            bits += 1;
        }
        if bits > 1 {
            bits -= 1;
        }
        table[r] = bits;
        r += 1;
    }
    table
}

/// Parameter for the symbol following `symbol`.
#[inline]
pub fn next_k(symbol: u8) -> u8 {
    K4RICE[symbol as usize]
}

/// Encode one symbol with parameter `k` (at most 8).
#[inline]
pub fn encode_symbol(writer: &mut BitWriter<'_>, symbol: u8, k: u8) {
    debug_assert!(k <= 8);
    let r = u32::from(symbol);
    let k = u32::from(k);
    let q = r >> k;
    if q < CUTOFF {
        writer.push_bits(1 << q, q + 1);
        writer.push_bits(r & ((1 << k) - 1), k);
    } else {
        writer.push_bits(1 << CUTOFF, CUTOFF + 1);
        writer.push_bits(r, 8);
    }
}

/// Decode one symbol with parameter `k` (at most 8).
#[inline]
pub fn decode_symbol(reader: &mut BitReader<'_>, k: u8) -> Result<u8> {
    debug_assert!(k <= 8);
    let q = reader.pull_unary()?;
    if q < CUTOFF {
        let m = reader.pull_bits(u32::from(k))?;
        let r = (q << k) | m;
        debug_assert!(r <= 0xFF, "decoded symbol {r} out of range");
        Ok(r as u8)
    } else {
        Ok(reader.pull_bits(8)? as u8)
    }
}
