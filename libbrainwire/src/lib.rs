//! Lossless codec for single-channel 16-bit PCM neural recordings.
//!
//! The samples this codec is built for were originally 10-bit sensor values
//! upscaled to 16 bits. Encoding requantizes each sample back to its 10-bit
//! label, predicts it from the previous label, and Rice-codes the residual
//! with a parameter that adapts from the length of the previous codeword.
//! Decoding inverts every step exactly, so recorder output round-trips
//! bit-for-bit while the stream shrinks well below 2 bytes per sample.
//!
//! There is no algorithmic delay: each sample's bits are emitted before the
//! next sample is consumed, and the only state crossing samples is one
//! previous quantized value and the `k` controller.
//!
//! # Example
//! ```
//! use libbrainwire::SampleBlock;
//!
//! // samples as the recorder produces them (10-bit values upscaled to 16)
//! let block = SampleBlock::mono(44100, vec![31, 95, 159, 95, 31]);
//!
//! let compressed = libbrainwire::encode(&block).unwrap();
//! let decoded = libbrainwire::decode(&compressed).unwrap();
//!
//! assert_eq!(decoded.samples, block.samples);
//! assert_eq!(decoded.sample_rate, 44100);
//! ```

pub mod codec;
pub mod core;

pub use crate::codec::{Decoder, Encoder};
pub use crate::core::types::{CodecError, CodecResult, SampleBlock};

/// Encode a mono block to a brainwire stream.
///
/// Rejects blocks that are not single-channel; a well-formed mono block
/// always encodes.
pub fn encode(block: &SampleBlock) -> CodecResult<Vec<u8>> {
    if block.channels != 1 {
        return Err(CodecError::InvalidInput {
            channels: block.channels,
        });
    }
    let mut encoder = Encoder::new(block.samples.len() as u64, block.sample_rate);
    for &sample in &block.samples {
        encoder.push(sample);
    }
    Ok(encoder.finish())
}

/// Decode a brainwire stream back into a mono block.
pub fn decode(data: &[u8]) -> CodecResult<SampleBlock> {
    Decoder::new(data)?.decode_all()
}
