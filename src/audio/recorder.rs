use super::SampleSource;
use crate::Progress;
use crate::error::Result;
use crate::wav::WavFileWriter;

pub const DEFAULT_CHUNK_SAMPLES: usize = 1024;
pub const MAX_CHUNK_SAMPLES: usize = 1 << 20;

/// Pump samples from `source` into `writer` through one reused buffer of
/// `chunk_samples` (clamped to `1..=MAX_CHUNK_SAMPLES`), then close the
/// writer. Returns the samples recorded.
///
/// The writer is closed on the error path too, leaving a valid header over
/// whatever payload reached disk.
pub fn record<S: SampleSource + ?Sized>(
    source: &mut S,
    writer: &mut WavFileWriter,
    chunk_samples: usize,
    progress: &Progress,
) -> Result<u64> {
    let result = pump(source, writer, chunk_samples.clamp(1, MAX_CHUNK_SAMPLES), progress);
    let closed = writer.close();
    let total = result?;
    closed?;
    Ok(total)
}

fn pump<S: SampleSource + ?Sized>(
    source: &mut S,
    writer: &mut WavFileWriter,
    chunk_samples: usize,
    progress: &Progress,
) -> Result<u64> {
    let mut cache = vec![0i16; chunk_samples];
    let mut total = 0u64;

    loop {
        let size = source.read(&mut cache)?;
        if size == 0 {
            break;
        }
        writer.write_samples(&cache, 0, size)?;
        total += size as u64;
        progress.inc(size as u64 * 2);
    }

    tracing::debug!(samples = total, "source exhausted");
    Ok(total)
}
