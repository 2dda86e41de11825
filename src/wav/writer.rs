//! Streaming WAV writer.
//!
//! Payload is appended after a zeroed 44-byte placeholder; the real header is
//! patched over the placeholder once the payload size is known.

use super::header::{HEADER_SIZE, WavHeader};
use super::WavFormat;
use crate::error::{Result, WavError};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

enum State {
    Unopened,
    Open {
        out: BufWriter<File>,
        bytes_written: u64,
    },
    Closed,
}

/// Writes PCM payload to `path` and finalizes the header on [`close`](Self::close).
///
/// Dropping an open writer finalizes it as well; errors from that path can
/// only be logged, so call `close` explicitly when the outcome matters.
pub struct WavFileWriter {
    path: PathBuf,
    format: WavFormat,
    state: State,
    last_bytes_written: u64,
}

impl WavFileWriter {
    pub fn new(path: impl Into<PathBuf>, format: WavFormat) -> Self {
        Self {
            path: path.into(),
            format,
            state: State::Unopened,
            last_bytes_written: 0,
        }
    }

    /// Construct and open in one step.
    pub fn create(path: impl Into<PathBuf>, format: WavFormat) -> Result<Self> {
        let mut writer = Self::new(path, format);
        writer.open()?;
        Ok(writer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> WavFormat {
        self.format
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    /// Payload bytes appended since `open`. Still reports the final count after `close`.
    pub fn bytes_written(&self) -> u64 {
        match &self.state {
            State::Open { bytes_written, .. } => *bytes_written,
            _ => self.last_bytes_written,
        }
    }

    pub fn open(&mut self) -> Result<()> {
        match self.state {
            State::Open { .. } => return Ok(()),
            State::Closed => return Err(WavError::AlreadyClosed),
            State::Unopened => {}
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        let mut out = BufWriter::new(file);
        out.write_all(&[0u8; HEADER_SIZE])?;

        tracing::debug!(
            path = %self.path.display(),
            channels = self.format.channels,
            sample_rate = self.format.sample_rate,
            bits_per_sample = self.format.bits_per_sample,
            "opened WAV file"
        );

        self.state = State::Open {
            out,
            bytes_written: 0,
        };
        Ok(())
    }

    /// Append raw payload bytes verbatim.
    ///
    /// On failure the file is cut back to the payload counted so far, so a
    /// later `close` still describes exactly what is on disk.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let State::Open { out, bytes_written } = &mut self.state else {
            return Err(WavError::NotOpen);
        };
        if bytes.is_empty() {
            return Ok(());
        }

        if let Err(e) = out.write_all(bytes) {
            let end = HEADER_SIZE as u64 + *bytes_written;
            if let Err(rollback_err) = rewind(out, end) {
                tracing::warn!(end, "failed to discard partial write: {}", rollback_err);
            }
            return Err(e.into());
        }
        *bytes_written += bytes.len() as u64;
        tracing::trace!(len = bytes.len(), total = *bytes_written, "appended payload");
        Ok(())
    }

    /// Append `samples[offset..offset + length]` as little-endian 16-bit PCM.
    ///
    /// `length` is clamped to the end of `samples`. An `offset` at or past the
    /// end, or a zero `length`, writes nothing and succeeds.
    pub fn write_samples(&mut self, samples: &[i16], offset: usize, length: usize) -> Result<()> {
        if !self.is_open() {
            return Err(WavError::NotOpen);
        }
        if offset >= samples.len() || length == 0 {
            return Ok(());
        }

        let end = offset.saturating_add(length).min(samples.len());
        let bytes: Vec<u8> = samples[offset..end]
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect();
        self.write(&bytes)
    }

    /// Patch the header over the placeholder and release the file.
    ///
    /// Succeeds immediately when nothing is open. The writer is closed
    /// afterwards even if finalizing fails.
    pub fn close(&mut self) -> Result<()> {
        let (out, bytes_written) = match std::mem::replace(&mut self.state, State::Closed) {
            State::Open { out, bytes_written } => (out, bytes_written),
            other => {
                self.state = other;
                return Ok(());
            }
        };
        self.last_bytes_written = bytes_written;

        // Data chunk size is a 32-bit field; larger payloads wrap.
        let header = WavHeader::new(self.format, bytes_written as u32);
        finalize(out, &header)?;

        tracing::debug!(
            path = %self.path.display(),
            data_size = bytes_written,
            "finalized WAV header"
        );
        Ok(())
    }
}

/// Drop anything past `end`, including bytes a failed write left behind.
fn rewind(out: &mut BufWriter<File>, end: u64) -> std::io::Result<()> {
    out.flush()?;
    let file = out.get_mut();
    file.set_len(end)?;
    file.seek(SeekFrom::Start(end))?;
    Ok(())
}

fn finalize(mut out: BufWriter<File>, header: &WavHeader) -> Result<()> {
    out.seek(SeekFrom::Start(0))?;
    out.write_all(&header.to_bytes())?;
    let file = out.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

impl Drop for WavFileWriter {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(path = %self.path.display(), "failed to finalize WAV header: {}", e);
        }
    }
}
