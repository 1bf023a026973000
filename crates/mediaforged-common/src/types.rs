//! Stream classification shared by the property registry and its errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of stream found in a container.
///
/// A container's global stream index space is partitioned by kind: an index
/// is unique within one kind but may appear under several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    /// Picture streams.
    Video,
    /// Sound streams.
    Audio,
    /// Opaque data streams (timecode tracks, telemetry, ...).
    Data,
    /// Text or bitmap subtitle streams.
    Subtitle,
    /// Attached files such as fonts or cover art.
    Attachment,
    /// Streams the demuxer could not classify.
    Unknown,
}

impl StreamKind {
    /// All kinds in export order.
    pub const ALL: [StreamKind; 6] = [
        Self::Video,
        Self::Audio,
        Self::Data,
        Self::Subtitle,
        Self::Attachment,
        Self::Unknown,
    ];

    /// Property name under which the number of streams of this kind is exported.
    pub fn count_property(&self) -> &'static str {
        match self {
            Self::Video => "numberOfVideoStreams",
            Self::Audio => "numberOfAudioStreams",
            Self::Data => "numberOfDataStreams",
            Self::Subtitle => "numberOfSubtitleStreams",
            // Misspelt in the exported name; consumers match on it.
            Self::Attachment => "numberOfAttachementStreams",
            Self::Unknown => "numberOfUnknownStreams",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
            Self::Data => write!(f, "data"),
            Self::Subtitle => write!(f, "subtitle"),
            Self::Attachment => write!(f, "attachment"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_kind_display() {
        assert_eq!(StreamKind::Video.to_string(), "video");
        assert_eq!(StreamKind::Attachment.to_string(), "attachment");
        assert_eq!(StreamKind::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_count_property_order() {
        let names: Vec<_> = StreamKind::ALL.iter().map(|k| k.count_property()).collect();
        assert_eq!(
            names,
            vec![
                "numberOfVideoStreams",
                "numberOfAudioStreams",
                "numberOfDataStreams",
                "numberOfSubtitleStreams",
                "numberOfAttachementStreams",
                "numberOfUnknownStreams",
            ]
        );
    }

    #[test]
    fn test_attachment_count_keeps_exported_spelling() {
        assert_eq!(
            StreamKind::Attachment.count_property(),
            "numberOfAttachementStreams"
        );
    }
}
