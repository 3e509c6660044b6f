mod convert_tests {
    use bwenc::FileKind;
    use libbrainwire::core::quant::{dequant, quant};
    use libbrainwire::SampleBlock;
    use std::path::{Path, PathBuf};

    /// Unique temp path so parallel tests don't trample each other.
    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bwenc_{}_{}", std::process::id(), name))
    }

    /// Samples as the recorder would have produced them.
    fn recorder_block(sample_rate: u32, n: usize) -> SampleBlock {
        let samples = (0..n)
            .map(|i| {
                let t = i as f64 / sample_rate as f64;
                let raw = (8_000.0 * (t * 440.0 * 2.0 * std::f64::consts::PI).sin()) as i16;
                dequant(quant(raw))
            })
            .collect();
        SampleBlock::mono(sample_rate, samples)
    }

    #[test]
    fn test_extension_dispatch() {
        assert_eq!(FileKind::from_path(Path::new("in.wav")), Some(FileKind::Pcm));
        assert_eq!(
            FileKind::from_path(Path::new("out.bw")),
            Some(FileKind::Brainwire)
        );
        assert_eq!(FileKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(FileKind::from_path(Path::new("bare")), None);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = bwenc::load(Path::new("recording.flac")).unwrap_err();
        assert!(err.to_string().contains("unknown file type"));
    }

    #[test]
    fn test_wav_write_read_roundtrip() {
        let block = recorder_block(19_531, 2_000);
        let path = temp_path("roundtrip.wav");

        let written = bwenc::audio::write_wav(&path, &block).unwrap();
        assert_eq!(written, 44 + block.samples.len() * 2);

        let read_back = bwenc::audio::read_wav(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(read_back, block);
    }

    #[test]
    fn test_wav_header_layout() {
        let block = SampleBlock::mono(44_100, vec![1, -1, 0]);
        let bytes = bwenc::audio::write_wav_to_bytes(&block).unwrap();

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(bytes.len(), 44 + 6);
        // mono, 16-bit, little-endian payload
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 1);
        assert_eq!(u16::from_le_bytes([bytes[34], bytes[35]]), 16);
        assert_eq!(&bytes[44..46], &1i16.to_le_bytes());
    }

    #[test]
    fn test_full_conversion_cycle() {
        let block = recorder_block(19_531, 5_000);
        let wav_in = temp_path("cycle_in.wav");
        let bw = temp_path("cycle.bw");
        let wav_out = temp_path("cycle_out.wav");

        bwenc::audio::write_wav(&wav_in, &block).unwrap();

        // wav -> bw
        let loaded = bwenc::load(&wav_in).unwrap();
        let compressed_size = bwenc::store(&bw, &loaded).unwrap();
        assert!(compressed_size < block.samples.len() * 2);

        // bw -> wav
        let decoded = bwenc::load(&bw).unwrap();
        bwenc::store(&wav_out, &decoded).unwrap();

        // byte-for-byte identical PCM containers
        let original = std::fs::read(&wav_in).unwrap();
        let restored = std::fs::read(&wav_out).unwrap();

        std::fs::remove_file(&wav_in).ok();
        std::fs::remove_file(&bw).ok();
        std::fs::remove_file(&wav_out).ok();

        assert_eq!(original, restored);
    }

    #[test]
    fn test_corrupt_brainwire_file_errors() {
        let path = temp_path("corrupt.bw");
        // a header promising more samples than the payload carries
        std::fs::write(&path, [0x80u8, 0xff, 0x40, 0x00, 0xa0]).unwrap();

        let result = bwenc::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
