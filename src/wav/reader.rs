//! Cross-check a finished recording with `hound`, independent of our header code.

use crate::error::Result;
use hound::{SampleFormat, WavSpec};
use std::path::Path;

/// Decoded payload, kept at the width it was stored with.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    /// 16-bit PCM, the layout `WavFileWriter::write_samples` produces
    Pcm16(Vec<i16>),
    /// 8, 24 or 32-bit PCM
    Pcm(Vec<i32>),
    /// IEEE float
    Float(Vec<f32>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Self::Pcm16(s) => s.len(),
            Self::Pcm(s) => s.len(),
            Self::Float(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct WavReader {
    pub spec: WavSpec,
    pub samples: Samples,
}

impl WavReader {
    pub fn open(path: &Path) -> Result<Self> {
        let reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        let samples = match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Int, 16) => Samples::Pcm16(
                reader
                    .into_samples::<i16>()
                    .collect::<std::result::Result<_, hound::Error>>()?,
            ),
            (SampleFormat::Int, _) => Samples::Pcm(
                reader
                    .into_samples::<i32>()
                    .collect::<std::result::Result<_, hound::Error>>()?,
            ),
            (SampleFormat::Float, _) => Samples::Float(
                reader
                    .into_samples::<f32>()
                    .collect::<std::result::Result<_, hound::Error>>()?,
            ),
        };

        Ok(Self { spec, samples })
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.spec.channels.max(1) as usize
    }

    pub fn duration_seconds(&self) -> f64 {
        self.frames() as f64 / self.spec.sample_rate as f64
    }

    pub fn total_samples(&self) -> usize {
        self.samples.len()
    }

    /// Largest absolute sample value relative to full scale, in `0.0..=1.0`.
    pub fn peak(&self) -> f64 {
        match &self.samples {
            Samples::Pcm16(s) => s
                .iter()
                .map(|&v| (v as f64).abs() / -(i16::MIN as f64))
                .fold(0.0, f64::max),
            Samples::Pcm(s) => {
                let full_scale = (1u64 << (self.spec.bits_per_sample.clamp(1, 32) - 1)) as f64;
                s.iter()
                    .map(|&v| (v as f64).abs() / full_scale)
                    .fold(0.0, f64::max)
            }
            Samples::Float(s) => s.iter().map(|&v| (v as f64).abs()).fold(0.0, f64::max),
        }
    }
}
