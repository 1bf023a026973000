//! The codec configuration seam.

use super::sample::SampleFormat;
use serde::{Deserialize, Serialize};

/// Audio fields of a codec configuration.
///
/// Implemented by whatever holds the encoder or decoder state; [`CodecContext`]
/// is the plain in-memory implementation.
pub trait CodecParameters {
    /// Sample rate in Hz.
    fn sample_rate(&self) -> u32;
    fn set_sample_rate(&mut self, sample_rate: u32);

    /// Number of channels.
    fn channels(&self) -> u32;
    fn set_channels(&mut self, channels: u32);

    /// Layout of each sample.
    fn sample_format(&self) -> SampleFormat;
    fn set_sample_format(&mut self, sample_format: SampleFormat);
}

/// Direction a codec works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecType {
    Encoder,
    Decoder,
}

/// In-memory codec configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecContext {
    /// Encoder or decoder.
    pub codec_type: CodecType,
    /// Codec name (e.g., "aac", "pcm_s16le").
    pub codec_name: String,
    /// Sample rate in Hz, 0 until configured.
    pub sample_rate: u32,
    /// Number of channels, 0 until configured.
    pub channels: u32,
    /// Layout of each sample.
    pub sample_format: SampleFormat,
}

impl CodecContext {
    /// Create an unconfigured context for the named codec.
    pub fn new(codec_type: CodecType, codec_name: impl Into<String>) -> Self {
        Self {
            codec_type,
            codec_name: codec_name.into(),
            sample_rate: 0,
            channels: 0,
            sample_format: SampleFormat::S16,
        }
    }
}

impl CodecParameters for CodecContext {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn set_sample_rate(&mut self, sample_rate: u32) {
        self.sample_rate = sample_rate;
    }

    fn channels(&self) -> u32 {
        self.channels
    }

    fn set_channels(&mut self, channels: u32) {
        self.channels = channels;
    }

    fn sample_format(&self) -> SampleFormat {
        self.sample_format
    }

    fn set_sample_format(&mut self, sample_format: SampleFormat) {
        self.sample_format = sample_format;
    }
}
