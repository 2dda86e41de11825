use std::io::{self, Read};

/// Upstream producer of 16-bit samples.
///
/// `read` fills the front of `buf` and returns how many samples are valid.
/// Zero means the source is exhausted.
pub trait SampleSource {
    fn read(&mut self, buf: &mut [i16]) -> io::Result<usize>;
}

/// Decodes raw signed 16-bit little-endian PCM from any byte reader.
pub struct PcmSource<R> {
    inner: R,
    bytes: Vec<u8>,
    carry: Option<u8>,
}

impl<R: Read> PcmSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            bytes: Vec::new(),
            carry: None,
        }
    }
}

impl<R: Read> SampleSource for PcmSource<R> {
    fn read(&mut self, buf: &mut [i16]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        self.bytes.resize(buf.len() * 2, 0);
        let mut filled = 0;
        if let Some(byte) = self.carry.take() {
            self.bytes[0] = byte;
            filled = 1;
        }

        // Keep reading until at least one whole sample is available or EOF.
        while filled < 2 {
            match self.inner.read(&mut self.bytes[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        let count = filled / 2;
        for (sample, pair) in buf.iter_mut().zip(self.bytes[..count * 2].chunks_exact(2)) {
            *sample = i16::from_le_bytes([pair[0], pair[1]]);
        }

        if filled % 2 == 1 {
            if count == 0 {
                tracing::warn!("dropping trailing odd byte at end of PCM input");
            } else {
                self.carry = Some(self.bytes[filled - 1]);
            }
        }

        Ok(count)
    }
}

impl SampleSource for &[i16] {
    fn read(&mut self, buf: &mut [i16]) -> io::Result<usize> {
        let n = buf.len().min(self.len());
        buf[..n].copy_from_slice(&self[..n]);
        *self = &self[n..];
        Ok(n)
    }
}
