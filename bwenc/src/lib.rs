//! bwenc - brainwire <-> WAV converter library
//!
//! Direction is inferred from file extensions: `.wav` is the PCM container,
//! `.bw` is the compressed brainwire stream. The codec itself lives in
//! `libbrainwire`; this crate owns the container I/O around it.

pub mod audio;

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use libbrainwire::SampleBlock;

/// The two file formats the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pcm,
    Brainwire,
}

impl FileKind {
    /// Map an extension to a format; `None` for anything else.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("wav") => Some(FileKind::Pcm),
            Some("bw") => Some(FileKind::Brainwire),
            _ => None,
        }
    }
}

/// Load samples from either container, dispatching on the extension.
pub fn load(path: &Path) -> Result<SampleBlock> {
    match FileKind::from_path(path) {
        Some(FileKind::Pcm) => audio::read_wav(path),
        Some(FileKind::Brainwire) => {
            let data = fs::read(path)
                .with_context(|| format!("can't open {} for reading", path.display()))?;
            let block = libbrainwire::decode(&data)
                .with_context(|| format!("can't decode {}", path.display()))?;
            Ok(block)
        }
        None => bail!("unknown file type for {}", path.display()),
    }
}

/// Store samples in either container, dispatching on the extension.
/// Returns the number of bytes written.
pub fn store(path: &Path, block: &SampleBlock) -> Result<usize> {
    match FileKind::from_path(path) {
        Some(FileKind::Pcm) => audio::write_wav(path, block),
        Some(FileKind::Brainwire) => {
            let data = libbrainwire::encode(block)
                .with_context(|| format!("can't encode {}", path.display()))?;
            fs::write(path, &data)
                .with_context(|| format!("can't open {} for writing", path.display()))?;
            Ok(data.len())
        }
        None => bail!("unknown file type for {}", path.display()),
    }
}
