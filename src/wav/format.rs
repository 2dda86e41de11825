/// PCM format parameters fixed for the lifetime of a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub bits_per_sample: u16,
    pub sample_rate: u32,
    pub channels: u16,
}

impl Default for WavFormat {
    fn default() -> Self {
        Self {
            bits_per_sample: 16,
            sample_rate: 48000,
            channels: 1,
        }
    }
}

impl WavFormat {
    pub fn new(bits_per_sample: u16, sample_rate: u32, channels: u16) -> Self {
        Self {
            bits_per_sample,
            sample_rate,
            channels,
        }
    }

    /// Bytes in one multi-channel sample frame (the header's BlockAlign).
    ///
    /// Computed in 32 bits and truncated to the 16-bit field width.
    pub fn bytes_per_frame(&self) -> u16 {
        (self.channels as u32 * self.bits_per_sample as u32 / 8) as u16
    }

    /// Bytes of payload per second of audio (the header's ByteRate).
    ///
    /// Computed in 64 bits and truncated to the 32-bit field width.
    pub fn byte_rate(&self) -> u32 {
        (self.sample_rate as u64 * self.channels as u64 * self.bits_per_sample as u64 / 8) as u32
    }

    pub fn duration_seconds(&self, payload_bytes: u64) -> f64 {
        match self.byte_rate() {
            0 => 0.0,
            rate => payload_bytes as f64 / rate as f64,
        }
    }
}
