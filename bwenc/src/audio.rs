use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use libbrainwire::SampleBlock;

/// Read a WAV file into a sample block.
///
/// The codec needs the recorder's 16-bit values untouched, so this rejects
/// anything that is not mono 16-bit PCM instead of converting.
pub fn read_wav(path: &Path) -> Result<SampleBlock> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("can't open {} for reading", path.display()))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    hint.with_extension("wav");

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .with_context(|| format!("{} is not a readable WAV file", path.display()))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("no audio track found")?;

    let channels = track
        .codec_params
        .channels
        .context("unknown channel count")?
        .count();
    if channels != 1 {
        bail!("expected mono input, got {} channels", channels);
    }
    if let Some(bits) = track.codec_params.bits_per_sample {
        if bits != 16 {
            bail!("bits per sample is {}, not 16", bits);
        }
    }
    let sample_rate = track
        .codec_params
        .sample_rate
        .context("unknown sample rate")?;
    let track_id = track.id;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("failed to create PCM decoder")?;

    let mut samples = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break
            }
            Err(e) => return Err(e).context("error reading packet"),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet).context("error decoding packet")? {
            AudioBufferRef::S16(buf) => samples.extend_from_slice(buf.chan(0)),
            _ => bail!("sample format is not 16-bit PCM"),
        }
    }

    Ok(SampleBlock {
        channels: 1,
        sample_rate,
        samples,
    })
}

/// Write a sample block to a WAV file. Returns the file size in bytes.
pub fn write_wav(path: &Path, block: &SampleBlock) -> Result<usize> {
    let bytes = write_wav_to_bytes(block)?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("can't open {} for writing", path.display()))?;
    Ok(bytes.len())
}

/// Assemble a mono 16-bit PCM RIFF container in memory.
pub fn write_wav_to_bytes(block: &SampleBlock) -> Result<Vec<u8>> {
    let bytes_per_sample = 2usize;
    let data_size = block.samples.len() * bytes_per_sample;
    let mut buffer = Vec::with_capacity(44 + data_size);

    // RIFF header
    buffer.write_all(b"RIFF")?;
    buffer.write_all(&((36 + data_size) as u32).to_le_bytes())?;
    buffer.write_all(b"WAVE")?;

    // fmt chunk
    buffer.write_all(b"fmt ")?;
    buffer.write_all(&16u32.to_le_bytes())?; // chunk size
    buffer.write_all(&1u16.to_le_bytes())?; // format = integer PCM
    buffer.write_all(&block.channels.to_le_bytes())?;
    buffer.write_all(&block.sample_rate.to_le_bytes())?;
    let byte_rate = block.sample_rate * block.channels as u32 * bytes_per_sample as u32;
    buffer.write_all(&byte_rate.to_le_bytes())?;
    let block_align = block.channels * bytes_per_sample as u16;
    buffer.write_all(&block_align.to_le_bytes())?;
    buffer.write_all(&16u16.to_le_bytes())?; // bits per sample

    // data chunk
    buffer.write_all(b"data")?;
    buffer.write_all(&(data_size as u32).to_le_bytes())?;
    for &sample in &block.samples {
        buffer.write_all(&sample.to_le_bytes())?;
    }

    Ok(buffer)
}
