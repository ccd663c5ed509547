//! Residual folding: the bijection between signed prediction errors and the
//! unsigned symbols fed to the Rice coder.
//!
//! Residuals are taken modulo 256 before folding (callers use `wrapping_sub`
//! and a cast to `i8`), so a raw error of +200 and one of -56 map to the same
//! symbol; the matching `wrapping_add` on reconstruction makes the pair
//! lossless for every byte.

/// Map a signed residual to its unsigned Rice symbol.
///
/// Non-negative residuals occupy the even symbols, negative ones the odd:
///
/// ```text
/// delta:   -128 ... -2, -1, 0, +1, +2 ... +127
/// symbol:   255 ...  3,  1, 0,  2,  4 ...  254
/// ```
#[inline]
pub fn fold(delta: i8) -> u8 {
    let d = i16::from(delta);
    let symbol = if d >= 0 { d * 2 } else { -d * 2 - 1 };
    symbol as u8
}

/// Recover the signed residual from a Rice symbol. Exact inverse of
/// [`fold`].
#[inline]
pub fn unfold(symbol: u8) -> i8 {
    let s = i16::from(symbol);
    let delta = if s % 2 == 0 { s / 2 } else { -(s / 2) - 1 };
    delta as i8
}
