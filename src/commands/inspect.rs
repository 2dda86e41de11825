use crate::wav::header::stored_riff_size;
use crate::wav::{HEADER_SIZE, WavHeader, WavReader};
use anyhow::{Context, Result, anyhow};
use clap::Args;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args)]
pub struct InspectArgs {
    /// WAV file to inspect
    pub input: PathBuf,
}

pub fn run(args: InspectArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(anyhow!("Input file does not exist: {}", args.input.display()));
    }

    let mut file = File::open(&args.input)
        .with_context(|| format!("Failed to open file: {}", args.input.display()))?;
    let file_len = file.metadata()?.len();

    let mut bytes = [0u8; HEADER_SIZE];
    file.read_exact(&mut bytes)
        .with_context(|| format!("File too short for a WAV header: {}", args.input.display()))?;
    let header = WavHeader::from_bytes(&bytes)?;
    let stored_riff = stored_riff_size(&bytes);

    println!("WAV Header");
    println!("==========");
    println!();
    println!("Channels: {}", header.channels);
    println!("Sample rate: {} Hz", header.sample_rate);
    println!("Bits per sample: {}", header.bits_per_sample);
    println!("Byte rate: {} bytes/s", header.byte_rate());
    println!("Block align: {} bytes", header.block_align());
    println!("Data size: {} bytes", header.data_size);
    println!(
        "Duration: {:.3}s",
        header.format().duration_seconds(header.data_size as u64)
    );

    println!();
    print!("RIFF size: {} ", stored_riff);
    if stored_riff == header.riff_size() {
        println!("(consistent)");
    } else {
        println!("(expected {})", header.riff_size());
    }

    let payload_on_disk = file_len.saturating_sub(HEADER_SIZE as u64);
    print!("Payload on disk: {} bytes ", payload_on_disk);
    if payload_on_disk == header.data_size as u64 {
        println!("(matches)");
    } else {
        println!("(header says {})", header.data_size);
    }

    match WavReader::open(&args.input) {
        Ok(reader) => println!(
            "Standard reader: ok ({} samples, {:.3}s, peak {:.1}%)",
            reader.total_samples(),
            reader.duration_seconds(),
            reader.peak() * 100.0
        ),
        Err(e) => println!("Standard reader: failed ({})", e),
    }

    Ok(())
}
