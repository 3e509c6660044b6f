use crate::core::bitio::BitWriter;
use crate::core::quant::quant;
use crate::core::rice;

use super::control::{AdaptiveK, HEADER_RICE_K};

/// Streaming brainwire encoder.
///
/// The header carries the sample count, so the count must be declared up
/// front; after that every pushed sample emits its bits immediately and no
/// state beyond the previous quantized sample is carried across pushes.
pub struct Encoder {
    bits: BitWriter,
    k: AdaptiveK,
    q_prev: i64,
    declared: u64,
    written: u64,
}

impl Encoder {
    /// Start a stream and write the header.
    pub fn new(sample_count: u64, sample_rate: u32) -> Self {
        // 2 bytes per sample covers the worst case seen in practice; the
        // writer grows if a pathological stream needs more
        let mut bits = BitWriter::with_capacity(2 * sample_count as usize + 8);
        rice::write(&mut bits, sample_count as i64, HEADER_RICE_K);
        rice::write(&mut bits, sample_rate as i64, HEADER_RICE_K);
        Encoder {
            bits,
            k: AdaptiveK::new(),
            q_prev: 0,
            declared: sample_count,
            written: 0,
        }
    }

    /// Encode one sample.
    pub fn push(&mut self, sample: i16) {
        assert!(
            self.written < self.declared,
            "pushed more samples than declared"
        );
        let q = quant(sample) as i64;
        let residual = q - self.q_prev;
        self.q_prev = q;

        let len = rice::write(&mut self.bits, residual, self.k.param());
        self.k.update(len);
        self.written += 1;
    }

    /// Current controller state, identical on the decoder after the same
    /// number of samples.
    pub fn rice_parameter(&self) -> f64 {
        self.k.value()
    }

    /// Bit position after the last codeword.
    pub fn bit_position(&self) -> usize {
        self.bits.position()
    }

    /// Flush to the byte boundary and return the stream.
    pub fn finish(self) -> Vec<u8> {
        assert_eq!(
            self.written, self.declared,
            "encoded fewer samples than declared"
        );
        self.bits.into_bytes()
    }
}
