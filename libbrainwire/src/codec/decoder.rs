use crate::core::bitio::BitReader;
use crate::core::quant::dequant;
use crate::core::rice;
use crate::core::types::{CodecError, CodecResult, SampleBlock};

use super::control::{AdaptiveK, HEADER_RICE_K};

/// Streaming brainwire decoder.
///
/// Mirrors [`super::Encoder`] exactly: it reconstructs the adaptive `k`
/// trajectory from the length of each codeword it just read, consumes
/// precisely `sample_count` codewords after the header, and never looks at
/// the zero padding past the last one.
pub struct Decoder<'a> {
    bits: BitReader<'a>,
    k: AdaptiveK,
    q_prev: i64,
    sample_count: u64,
    sample_rate: u32,
    remaining: u64,
}

impl<'a> Decoder<'a> {
    /// Parse the header and position the reader at the first residual.
    pub fn new(data: &'a [u8]) -> CodecResult<Self> {
        let mut bits = BitReader::new(data);
        let sample_count = rice::read(&mut bits, HEADER_RICE_K)? as u64;
        let sample_rate = rice::read(&mut bits, HEADER_RICE_K)? as u32;
        Ok(Decoder {
            bits,
            k: AdaptiveK::new(),
            q_prev: 0,
            sample_count,
            sample_rate,
            remaining: sample_count,
        })
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Current controller state, identical on the encoder after the same
    /// number of samples.
    pub fn rice_parameter(&self) -> f64 {
        self.k.value()
    }

    /// Bit position after the last codeword.
    pub fn bit_position(&self) -> usize {
        self.bits.position()
    }

    /// Samples not yet decoded.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Decode the next sample.
    ///
    /// Exactly `sample_count` calls succeed; past that the stream is
    /// exhausted and only zero padding remains.
    pub fn next_sample(&mut self) -> CodecResult<i16> {
        if self.remaining == 0 {
            return Err(CodecError::UnexpectedEndOfStream {
                bit_pos: self.bits.position(),
            });
        }
        let start = self.bits.position();
        let residual = rice::read(&mut self.bits, self.k.param())?;
        let q = self.q_prev + residual;
        self.q_prev = q;

        let len = self.bits.position() - start;
        self.k.update(len);
        self.remaining -= 1;
        Ok(dequant(q as i32))
    }

    /// Decode the whole payload into a mono block.
    pub fn decode_all(mut self) -> CodecResult<SampleBlock> {
        // every codeword is at least one bit, which bounds a corrupt
        // header's sample count before the allocation
        let available = (self.bits.len_bits() - self.bits.position()) as u64;
        let mut samples = Vec::with_capacity(self.sample_count.min(available) as usize);
        for _ in 0..self.sample_count {
            samples.push(self.next_sample()?);
        }
        Ok(SampleBlock::mono(self.sample_rate, samples))
    }
}
