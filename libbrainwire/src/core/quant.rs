//! The fixed 16<->10-bit requantization map.
//!
//! The recorder upscaled 10-bit sensor values to 16 bits through an affine
//! map; `quant` recovers the 10-bit label by floored division and `dequant`
//! reproduces the recorder's upscale, so samples that came out of the
//! recorder survive the round trip bit-for-bit. Arbitrary 16-bit values are
//! projected onto the nearest reconstruction level instead.

/// Slope and offset of the recorder's 10->16-bit upscale. Fitted against
/// recorded data, not derived; treat as a table.
const DEQUANT_SCALE: f64 = 64.061577;
const DEQUANT_BIAS: f64 = 31.034184;

/// Forward map, floored division so e.g. `quant(-1) == -1`.
#[inline]
pub fn quant(sample: i16) -> i32 {
    (sample as i32).div_euclid(64)
}

/// Inverse map. Mirrored around zero with round-half-away-from-zero, the
/// same arithmetic the recorder used.
#[inline]
pub fn dequant(quantized: i32) -> i16 {
    let v = if quantized >= 0 {
        (quantized as f64 * DEQUANT_SCALE + DEQUANT_BIAS).round() as i32
    } else {
        -(((-quantized - 1) as f64 * DEQUANT_SCALE + DEQUANT_BIAS).round() as i32) - 1
    };
    v as i16
}
