use crate::audio::{self, DEFAULT_CHUNK_SAMPLES, MAX_CHUNK_SAMPLES, PcmSource};
use crate::wav::{WavFileWriter, WavFormat};
use crate::{Progress, Verbosity};
use anyhow::{Context, Result, anyhow};
use clap::Args;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct RecordArgs {
    /// Raw PCM input file, or "-" for stdin
    pub input: PathBuf,

    /// Output WAV file (overwritten if it exists)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Sample rate in Hz
    #[arg(long, default_value = "48000", value_parser = clap::value_parser!(u32).range(1..))]
    pub rate: u32,

    /// Number of interleaved channels
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..))]
    pub channels: u16,

    /// Bits per sample (16 streams through the sample path, others are copied as raw bytes)
    #[arg(long, default_value = "16", value_parser = clap::value_parser!(u16).range(1..))]
    pub bits: u16,

    /// Samples per streaming chunk (at most 1048576)
    #[arg(long, default_value_t = DEFAULT_CHUNK_SAMPLES, value_parser = parse_chunk)]
    pub chunk: usize,
}

fn parse_chunk(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("chunk size must be at least 1".to_string()),
        Ok(n) if n > MAX_CHUNK_SAMPLES => {
            Err(format!("chunk size must be at most {}", MAX_CHUNK_SAMPLES))
        }
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

pub fn run(args: RecordArgs, verbosity: Verbosity) -> Result<()> {
    let format = WavFormat::new(args.bits, args.rate, args.channels);
    let (input, progress) = open_input(&args.input, verbosity)?;

    let mut writer = WavFileWriter::create(&args.output, format)
        .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;

    if format.bits_per_sample == 16 {
        let mut source = PcmSource::new(input);
        audio::record(&mut source, &mut writer, args.chunk, &progress)
            .with_context(|| format!("Failed to record into {}", args.output.display()))?;
    } else {
        let chunk_bytes = args
            .chunk
            .saturating_mul(format.bytes_per_frame().max(1) as usize)
            .min(MAX_CHUNK_SAMPLES * 2);
        copy_bytes(input, &mut writer, chunk_bytes, &progress)
            .with_context(|| format!("Failed to record into {}", args.output.display()))?;
    }
    progress.finish_and_clear();

    if verbosity.show_status() {
        let bytes = writer.bytes_written();
        let format = writer.format();
        eprintln!(
            "Recorded {} bytes ({:.2}s, {} Hz, {} ch, {}-bit) to {}",
            bytes,
            format.duration_seconds(bytes),
            format.sample_rate,
            format.channels,
            format.bits_per_sample,
            writer.path().display()
        );
    }

    Ok(())
}

fn open_input(path: &Path, verbosity: Verbosity) -> Result<(Box<dyn Read>, Progress)> {
    if path.as_os_str() == "-" {
        let progress = Progress::spinner("Recording from stdin", verbosity);
        return Ok((Box::new(io::stdin().lock()), progress));
    }

    if !path.exists() {
        return Err(anyhow!("Input file does not exist: {}", path.display()));
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let len = file.metadata().map(|m| m.len()).unwrap_or(0);
    Ok((Box::new(BufReader::new(file)), Progress::new(len, verbosity)))
}

/// Byte path for bit depths the sample path does not cover.
fn copy_bytes(
    mut input: impl Read,
    writer: &mut WavFileWriter,
    chunk_bytes: usize,
    progress: &Progress,
) -> Result<()> {
    let mut buf = vec![0u8; chunk_bytes.max(1)];
    let copied = loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => break Err(e.into()),
        };
        if let Err(e) = writer.write(&buf[..n]) {
            break Err(e);
        }
        progress.inc(n as u64);
    };
    writer.close()?;
    copied?;
    Ok(())
}
