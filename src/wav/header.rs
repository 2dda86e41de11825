//! Canonical 44-byte RIFF/WAVE header for uncompressed PCM.
//!
//! Layout (all integers little-endian):
//!
//! ```text
//!  0  "RIFF"      4  riff size     8  "WAVE"
//! 12  "fmt "     16  16           20  format=1   22  channels
//! 24  rate       28  byte rate    32  align      34  bits
//! 36  "data"     40  data size
//! ```

use super::WavFormat;
use crate::error::{Result, WavError};

pub const HEADER_SIZE: usize = 44;
pub const PCM_FORMAT: u16 = 1;
pub const FMT_CHUNK_SIZE: u32 = 16;

const RIFF: &[u8; 4] = b"RIFF";
const WAVE: &[u8; 4] = b"WAVE";
const FMT: &[u8; 4] = b"fmt ";
const DATA: &[u8; 4] = b"data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

impl WavHeader {
    pub fn new(format: WavFormat, data_size: u32) -> Self {
        Self {
            channels: format.channels,
            sample_rate: format.sample_rate,
            bits_per_sample: format.bits_per_sample,
            data_size,
        }
    }

    pub fn format(&self) -> WavFormat {
        WavFormat::new(self.bits_per_sample, self.sample_rate, self.channels)
    }

    /// RIFF chunk size: `4 + (8 + 16) + (8 + data_size)`. Wraps past 4 GiB.
    pub fn riff_size(&self) -> u32 {
        (4 + (8 + FMT_CHUNK_SIZE) + 8).wrapping_add(self.data_size)
    }

    pub fn byte_rate(&self) -> u32 {
        self.format().byte_rate()
    }

    pub fn block_align(&self) -> u16 {
        self.format().bytes_per_frame()
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(RIFF);
        bytes[4..8].copy_from_slice(&self.riff_size().to_le_bytes());
        bytes[8..12].copy_from_slice(WAVE);
        bytes[12..16].copy_from_slice(FMT);
        bytes[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        bytes[20..22].copy_from_slice(&PCM_FORMAT.to_le_bytes());
        bytes[22..24].copy_from_slice(&self.channels.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.byte_rate().to_le_bytes());
        bytes[32..34].copy_from_slice(&self.block_align().to_le_bytes());
        bytes[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        bytes[36..40].copy_from_slice(DATA);
        bytes[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        bytes
    }

    /// Decode the canonical layout. Only the length and chunk tags are checked.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(WavError::InvalidHeader(format!(
                "expected {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        for (offset, tag) in [(0, RIFF), (8, WAVE), (12, FMT), (36, DATA)] {
            if &bytes[offset..offset + 4] != tag {
                return Err(WavError::InvalidHeader(format!(
                    "missing {:?} tag at offset {}",
                    String::from_utf8_lossy(tag),
                    offset
                )));
            }
        }

        let u16_at = |i: usize| u16::from_le_bytes([bytes[i], bytes[i + 1]]);
        let u32_at =
            |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);

        Ok(Self {
            channels: u16_at(22),
            sample_rate: u32_at(24),
            bits_per_sample: u16_at(34),
            data_size: u32_at(40),
        })
    }
}

/// Read back the RIFF size field stored at offset 4.
pub fn stored_riff_size(bytes: &[u8; HEADER_SIZE]) -> u32 {
    u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]])
}
