pub mod bitio;
pub mod quant;
pub mod rice;
pub mod types;

pub use bitio::{BitReader, BitWriter};
pub use quant::{dequant, quant};
pub use rice::{fold, unfold, MAX_RICE_K};
pub use types::*;
