//! Typed per-stream records.

use crate::codec::{AudioFrameDesc, SampleFormat};
use mediaforged_common::StreamKind;
use serde::{Deserialize, Serialize};

/// A per-stream record keyed by its index in the container.
pub trait StreamRecord {
    /// Kind of the collection this record lives in.
    const KIND: StreamKind;

    /// Index of the stream in the container.
    fn stream_index(&self) -> usize;
}

/// Information about a video stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoProperties {
    /// Stream index in the container.
    pub stream_index: usize,
    /// Codec name (e.g., "hevc", "h264").
    pub codec_name: Option<String>,
    /// Stream-level metadata.
    pub metadata: Vec<(String, String)>,
}

/// Information about an audio stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioProperties {
    /// Stream index in the container.
    pub stream_index: usize,
    /// Codec name (e.g., "aac", "truehd").
    pub codec_name: Option<String>,
    /// Sample rate in Hz.
    pub sample_rate: Option<u32>,
    /// Number of channels.
    pub channels: Option<u32>,
    /// Decoded sample layout.
    pub sample_format: Option<SampleFormat>,
    /// Stream-level metadata.
    pub metadata: Vec<(String, String)>,
}

/// Information about a data stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataProperties {
    pub stream_index: usize,
    pub codec_name: Option<String>,
    pub metadata: Vec<(String, String)>,
}

/// Information about a subtitle stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitleProperties {
    pub stream_index: usize,
    pub codec_name: Option<String>,
    pub metadata: Vec<(String, String)>,
}

/// Information about an attachment (fonts, cover art).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentProperties {
    pub stream_index: usize,
    pub codec_name: Option<String>,
    pub metadata: Vec<(String, String)>,
}

/// Information about a stream of unknown kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnknownProperties {
    pub stream_index: usize,
    pub metadata: Vec<(String, String)>,
}

macro_rules! stream_record {
    ($($record:ident => $kind:ident),* $(,)?) => {
        $(
            impl $record {
                /// Create a record for the stream at `stream_index`.
                pub fn new(stream_index: usize) -> Self {
                    Self {
                        stream_index,
                        ..Default::default()
                    }
                }
            }

            impl StreamRecord for $record {
                const KIND: StreamKind = StreamKind::$kind;

                fn stream_index(&self) -> usize {
                    self.stream_index
                }
            }
        )*
    };
}

stream_record! {
    VideoProperties => Video,
    AudioProperties => Audio,
    DataProperties => Data,
    SubtitleProperties => Subtitle,
    AttachmentProperties => Attachment,
    UnknownProperties => Unknown,
}

impl AudioProperties {
    /// Frame descriptor, when rate, channels and format are all known.
    pub fn frame_desc(&self) -> Option<AudioFrameDesc> {
        Some(AudioFrameDesc::new(
            self.sample_rate?,
            self.channels?,
            self.sample_format?,
        ))
    }

    /// Fill rate, channels and format from a descriptor.
    pub fn with_frame_desc(mut self, desc: AudioFrameDesc) -> Self {
        self.sample_rate = Some(desc.sample_rate);
        self.channels = Some(desc.channels);
        self.sample_format = Some(desc.sample_format);
        self
    }
}

/// A typed record of any kind, as produced by a demuxer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StreamProperties {
    Video(VideoProperties),
    Audio(AudioProperties),
    Data(DataProperties),
    Subtitle(SubtitleProperties),
    Attachment(AttachmentProperties),
    Unknown(UnknownProperties),
}

impl StreamProperties {
    /// Get the kind of the wrapped record.
    pub fn kind(&self) -> StreamKind {
        match self {
            Self::Video(_) => StreamKind::Video,
            Self::Audio(_) => StreamKind::Audio,
            Self::Data(_) => StreamKind::Data,
            Self::Subtitle(_) => StreamKind::Subtitle,
            Self::Attachment(_) => StreamKind::Attachment,
            Self::Unknown(_) => StreamKind::Unknown,
        }
    }

    /// Get the stream index of the wrapped record.
    pub fn stream_index(&self) -> usize {
        match self {
            Self::Video(p) => p.stream_index,
            Self::Audio(p) => p.stream_index,
            Self::Data(p) => p.stream_index,
            Self::Subtitle(p) => p.stream_index,
            Self::Attachment(p) => p.stream_index,
            Self::Unknown(p) => p.stream_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_index_only() {
        let video = VideoProperties::new(3);
        assert_eq!(video.stream_index(), 3);
        assert_eq!(video.codec_name, None);
        assert!(video.metadata.is_empty());
        assert_eq!(VideoProperties::KIND, StreamKind::Video);
        assert_eq!(UnknownProperties::KIND, StreamKind::Unknown);
    }

    #[test]
    fn test_audio_frame_desc_needs_all_fields() {
        let mut audio = AudioProperties::new(1);
        audio.sample_rate = Some(48_000);
        audio.channels = Some(2);
        assert_eq!(audio.frame_desc(), None);

        let desc = AudioFrameDesc::new(48_000, 2, SampleFormat::F32p);
        let audio = AudioProperties::new(1).with_frame_desc(desc);
        assert_eq!(audio.frame_desc(), Some(desc));
    }

    #[test]
    fn test_stream_properties_kind_and_index() {
        let record = StreamProperties::Subtitle(SubtitleProperties::new(4));
        assert_eq!(record.kind(), StreamKind::Subtitle);
        assert_eq!(record.stream_index(), 4);
    }

    #[test]
    fn test_serialize_tagged() {
        let record = StreamProperties::Audio(AudioProperties::new(2).with_frame_desc(
            AudioFrameDesc::new(44_100, 2, SampleFormat::S16),
        ));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "audio");
        assert_eq!(json["stream_index"], 2);
        assert_eq!(json["sample_format"], "s16");

        let back: StreamProperties = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
