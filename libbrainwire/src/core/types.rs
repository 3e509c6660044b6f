//! common types for the brainwire codec

use thiserror::Error;

/// A block of PCM samples plus its stream descriptor.
///
/// The codec only handles single-channel 16-bit data; `channels` is carried
/// so the container layer can hand blocks through unchanged and `encode`
/// can reject anything that is not mono.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBlock {
    pub channels: u16,
    pub sample_rate: u32,
    pub samples: Vec<i16>,
}

impl SampleBlock {
    /// Single-channel block.
    pub fn mono(sample_rate: u32, samples: Vec<i16>) -> Self {
        SampleBlock {
            channels: 1,
            sample_rate,
            samples,
        }
    }
}

/// Errors reported by the codec core.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The decoder requested bits past the end of the buffer.
    #[error("unexpected end of stream at bit {bit_pos}")]
    UnexpectedEndOfStream { bit_pos: usize },

    /// Encode was called with data that is not single-channel.
    #[error("expected 1 channel, got {channels}")]
    InvalidInput { channels: u16 },
}

/// result type for brainwire stuff
pub type CodecResult<T> = Result<T, CodecError>;
