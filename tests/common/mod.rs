//! Shared test utilities for generating raw PCM inputs.

use std::path::Path;

/// Signal shapes for synthetic PCM input
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// Pure sine wave at specified frequency (Hz)
    Sine(f32),
    /// Digital silence (all zeros)
    Silence,
    /// Deterministic xorshift noise
    Noise,
    /// Square wave (harsh transitions)
    Square(f32),
}

/// Configuration for raw PCM fixture generation
#[derive(Debug, Clone)]
pub struct TestPcmConfig {
    pub channels: u16,
    pub sample_rate: u32,
    pub frames: usize,
    pub pattern: Pattern,
    /// Amplitude multiplier (0.0 to 1.0, where 1.0 = max i16)
    pub amplitude: f32,
}

impl Default for TestPcmConfig {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 44100,
            frames: 4410,
            pattern: Pattern::Sine(440.0),
            amplitude: 0.6,
        }
    }
}

impl TestPcmConfig {
    pub fn stereo(mut self) -> Self {
        self.channels = 2;
        self
    }

    pub fn sample_rate(mut self, rate: u32) -> Self {
        self.sample_rate = rate;
        self
    }

    pub fn frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Interleaved samples, same value on every channel.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn samples(&self) -> Vec<i16> {
        let max_amplitude = i16::MAX as f32 * self.amplitude;
        let mut rng_state: u32 = 0xDEAD_BEEF;

        let mut out = Vec::with_capacity(self.frames * self.channels as usize);
        for i in 0..self.frames {
            let t = i as f32 / self.sample_rate as f32;
            let value = match self.pattern {
                Pattern::Sine(freq) => (t * freq * 2.0 * std::f32::consts::PI).sin() * max_amplitude,
                Pattern::Silence => 0.0,
                Pattern::Noise => {
                    rng_state ^= rng_state << 13;
                    rng_state ^= rng_state >> 17;
                    rng_state ^= rng_state << 5;
                    (rng_state as f32 / u32::MAX as f32).mul_add(2.0, -1.0) * max_amplitude
                }
                Pattern::Square(freq) => {
                    if (t * freq) % 1.0 < 0.5 {
                        max_amplitude
                    } else {
                        -max_amplitude
                    }
                }
            };
            let sample = value.round() as i16;
            for _ in 0..self.channels {
                out.push(sample);
            }
        }
        out
    }

    /// Samples encoded as s16le bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.samples().iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    pub fn write_raw(&self, path: &Path) {
        std::fs::write(path, self.bytes()).expect("Failed to write raw PCM");
    }
}

/// Little-endian field readers for checking headers by offset.
pub fn le_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

pub fn le_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
