//! Rice coding of single signed integers.
//!
//! A codeword under parameter `k` is the unary quotient `u >> k` as zero
//! bits, a `1` terminator, then the `k` low bits of `u` MSB-first, where
//! `u` is the zig-zag folding of the signed value.

use crate::core::bitio::{BitReader, BitWriter};
use crate::core::types::CodecResult;

/// Largest usable Rice parameter. The adaptive controller is clamped to
/// this before truncation; the header fields use it directly.
pub const MAX_RICE_K: u32 = 16;

/// Zig-zag fold: signed to unsigned, small magnitudes stay small.
#[inline]
pub fn fold(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`fold`].
#[inline]
pub fn unfold(folded: u64) -> i64 {
    if folded & 1 != 0 {
        -((folded >> 1) as i64) - 1
    } else {
        (folded >> 1) as i64
    }
}

/// Encode one signed value under parameter `k`.
///
/// Returns the codeword length in bits, `quotient + 1 + k`, which the
/// stream codec feeds to the adaptive-`k` controller.
pub fn write(bits: &mut BitWriter, value: i64, k: u32) -> usize {
    debug_assert!(k <= MAX_RICE_K);
    let folded = fold(value);
    let msbs = folded >> k;

    // unary quotient in bulk; the terminating 1 rides along with the
    // last run of zeros
    let mut run = msbs;
    while run >= 32 {
        bits.write_bits(0, 32);
        run -= 32;
    }
    bits.write_bits(1, run as u32 + 1);

    if k > 0 {
        bits.write_bits(folded & ((1u64 << k) - 1), k);
    }

    msbs as usize + 1 + k as usize
}

/// Decode one signed value under parameter `k`.
pub fn read(bits: &mut BitReader, k: u32) -> CodecResult<i64> {
    debug_assert!(k <= MAX_RICE_K);
    let mut msbs = 0u64;
    while bits.read_bit()? == 0 {
        msbs += 1;
    }
    let lsbs = if k > 0 { bits.read_bits(k)? } else { 0 };
    Ok(unfold((msbs << k) | lsbs))
}
