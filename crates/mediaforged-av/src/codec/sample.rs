//! Audio sample layouts and the frame descriptor built from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sample format for PCM audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleFormat {
    /// Unsigned 8-bit.
    #[serde(rename = "u8")]
    U8,
    /// Signed 16-bit, native endian.
    #[serde(rename = "s16")]
    S16,
    /// Signed 32-bit, native endian.
    #[serde(rename = "s32")]
    S32,
    /// Signed 64-bit, native endian.
    #[serde(rename = "s64")]
    S64,
    /// 32-bit float.
    #[serde(rename = "flt")]
    F32,
    /// 64-bit float.
    #[serde(rename = "dbl")]
    F64,
    /// Unsigned 8-bit planar.
    #[serde(rename = "u8p")]
    U8p,
    /// Signed 16-bit planar.
    #[serde(rename = "s16p")]
    S16p,
    /// Signed 32-bit planar.
    #[serde(rename = "s32p")]
    S32p,
    /// Signed 64-bit planar.
    #[serde(rename = "s64p")]
    S64p,
    /// 32-bit float planar.
    #[serde(rename = "fltp")]
    F32p,
    /// 64-bit float planar.
    #[serde(rename = "dblp")]
    F64p,
}

impl SampleFormat {
    const ALL: [SampleFormat; 12] = [
        Self::U8,
        Self::S16,
        Self::S32,
        Self::S64,
        Self::F32,
        Self::F64,
        Self::U8p,
        Self::S16p,
        Self::S32p,
        Self::S64p,
        Self::F32p,
        Self::F64p,
    ];

    /// Get the number of bytes per sample.
    pub fn bytes_per_sample(&self) -> usize {
        match self {
            Self::U8 | Self::U8p => 1,
            Self::S16 | Self::S16p => 2,
            Self::S32 | Self::S32p | Self::F32 | Self::F32p => 4,
            Self::S64 | Self::S64p | Self::F64 | Self::F64p => 8,
        }
    }

    /// Check if this is a planar format.
    pub fn is_planar(&self) -> bool {
        matches!(
            self,
            Self::U8p | Self::S16p | Self::S32p | Self::S64p | Self::F32p | Self::F64p
        )
    }

    /// Check if this is a floating-point format.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64 | Self::F32p | Self::F64p)
    }

    /// Get the packed equivalent of this format.
    pub fn to_packed(&self) -> Self {
        match self {
            Self::U8p => Self::U8,
            Self::S16p => Self::S16,
            Self::S32p => Self::S32,
            Self::S64p => Self::S64,
            Self::F32p => Self::F32,
            Self::F64p => Self::F64,
            other => *other,
        }
    }

    /// Get the planar equivalent of this format.
    pub fn to_planar(&self) -> Self {
        match self {
            Self::U8 => Self::U8p,
            Self::S16 => Self::S16p,
            Self::S32 => Self::S32p,
            Self::S64 => Self::S64p,
            Self::F32 => Self::F32p,
            Self::F64 => Self::F64p,
            other => *other,
        }
    }

    /// Short name as used by FFmpeg (`s16`, `fltp`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::S16 => "s16",
            Self::S32 => "s32",
            Self::S64 => "s64",
            Self::F32 => "flt",
            Self::F64 => "dbl",
            Self::U8p => "u8p",
            Self::S16p => "s16p",
            Self::S32p => "s32p",
            Self::S64p => "s64p",
            Self::F32p => "fltp",
            Self::F64p => "dblp",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a sample format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sample format: {0}")]
pub struct ParseSampleFormatError(String);

impl FromStr for SampleFormat {
    type Err = ParseSampleFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| ParseSampleFormatError(s.to_string()))
    }
}

/// Description of an audio frame: sample rate, channel count and sample format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioFrameDesc {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u32,
    /// Layout of each sample.
    pub sample_format: SampleFormat,
}

impl AudioFrameDesc {
    /// Create a new descriptor.
    pub fn new(sample_rate: u32, channels: u32, sample_format: SampleFormat) -> Self {
        Self {
            sample_rate,
            channels,
            sample_format,
        }
    }

    /// Bytes of PCM covering one video frame at `fps` frames per second.
    ///
    /// Returns 0 when `fps` is not a positive number.
    pub fn data_size(&self, fps: f64) -> usize {
        if !fps.is_finite() || fps <= 0.0 {
            return 0;
        }
        let bytes_per_second = self.sample_rate as f64
            * self.channels as f64
            * self.sample_format.bytes_per_sample() as f64;
        (bytes_per_second / fps) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_per_sample() {
        assert_eq!(SampleFormat::U8.bytes_per_sample(), 1);
        assert_eq!(SampleFormat::S16p.bytes_per_sample(), 2);
        assert_eq!(SampleFormat::F32.bytes_per_sample(), 4);
        assert_eq!(SampleFormat::S64p.bytes_per_sample(), 8);
    }

    #[test]
    fn test_planar_round_trip() {
        for format in SampleFormat::ALL {
            assert_eq!(format.to_planar().to_packed(), format.to_packed());
            assert!(format.to_planar().is_planar());
            assert!(!format.to_packed().is_planar());
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("fltp".parse::<SampleFormat>(), Ok(SampleFormat::F32p));
        assert_eq!("s16".parse::<SampleFormat>(), Ok(SampleFormat::S16));
        assert!("pcm".parse::<SampleFormat>().is_err());
        for format in SampleFormat::ALL {
            assert_eq!(format.to_string().parse::<SampleFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_serde_uses_short_names() {
        let json = serde_json::to_string(&SampleFormat::F32p).unwrap();
        assert_eq!(json, "\"fltp\"");

        let desc: AudioFrameDesc = serde_json::from_str(
            r#"{"sample_rate":44100,"channels":2,"sample_format":"s16"}"#,
        )
        .unwrap();
        assert_eq!(desc, AudioFrameDesc::new(44_100, 2, SampleFormat::S16));
    }

    #[test]
    fn test_data_size() {
        let desc = AudioFrameDesc::new(48_000, 2, SampleFormat::S16);
        assert_eq!(desc.data_size(25.0), 7_680);
        assert_eq!(desc.data_size(0.0), 0);
        assert_eq!(desc.data_size(f64::NAN), 0);

        let desc = AudioFrameDesc::new(44_100, 6, SampleFormat::F32p);
        assert_eq!(desc.data_size(1.0), 44_100 * 6 * 4);
    }
}
