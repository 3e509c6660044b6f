use anyhow::Result;
use bwenc::FileKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bwenc")]
#[command(version)]
#[command(about = "Compress and expand brainwire sample files", long_about = None)]
struct Cli {
    /// Input file (.wav or .bw)
    input: PathBuf,
    /// Output file (.wav or .bw)
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Reading {}...", cli.input.display());
    let block = bwenc::load(&cli.input)?;

    match FileKind::from_path(&cli.output) {
        Some(FileKind::Brainwire) => println!("Encoding to brainwire..."),
        Some(FileKind::Pcm) => println!("Writing WAV..."),
        None => {}
    }
    let bytes_written = bwenc::store(&cli.output, &block)?;

    let raw_size = block.samples.len() * std::mem::size_of::<i16>();
    println!(
        "{}: size: {} kb ({} bytes) = {:.2}x compression",
        cli.output.display(),
        bytes_written / 1024,
        bytes_written,
        raw_size as f64 / bytes_written as f64
    );

    Ok(())
}
