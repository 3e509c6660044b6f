//! The stream codec: header framing, first-order prediction, and adaptive
//! Rice entropy coding.
//!
//! Encode path: sample -> quantize -> subtract previous quantized sample ->
//! Rice codeword under the current `k`. Decode inverts each step and
//! re-derives `k` locally from the length of the codeword it just read, so
//! the two state machines stay bit-identical without any side channel.

mod control;
mod decoder;
mod encoder;

pub use decoder::Decoder;
pub use encoder::Encoder;
