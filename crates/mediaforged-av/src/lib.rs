//! # mediaforged-av
//!
//! The buffer, codec-parameter and property-lookup layer that sits beneath an
//! encode/decode/mux pipeline.
//!
//! This crate provides:
//! - [`Frame`] / [`CodedData`]: one unit of encoded media, either owning its
//!   bytes or borrowing them from someone else without copying
//! - [`AudioCodec`]: sample rate, channel count and sample format get/set over
//!   a codec configuration owned by the caller
//! - [`FileProperties`]: a per-file registry of container fields, a metadata
//!   snapshot, and typed per-stream records
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//! - `native-ffmpeg` - Read container fields straight from an FFmpeg format
//!   context
//!
//! ## Example
//!
//! ```
//! use mediaforged_av::{AudioProperties, FileProperties, FormatContext, StreamProperties};
//!
//! let container = FormatContext::new()
//!     .with_filename("movie.mkv")
//!     .with_format("matroska,webm", "Matroska / WebM")
//!     .with_duration(90_000_000);
//!
//! let mut file = FileProperties::new(&container);
//! file.add_stream(StreamProperties::Audio(AudioProperties::new(1)));
//!
//! assert_eq!(file.duration()?, 90.0);
//! assert!(file.audio_properties_by_stream_index(1).is_ok());
//! # Ok::<(), mediaforged_av::Error>(())
//! ```

pub mod codec;
pub mod frame;
pub mod properties;

#[cfg(feature = "native-ffmpeg")]
pub mod native_ffmpeg;

// Re-exports
pub use codec::{
    AudioCodec, AudioFrameDesc, CodecContext, CodecParameters, CodecType, ParseSampleFormatError,
    SampleFormat,
};
pub use frame::{CodedData, Frame};
pub use mediaforged_common::{add_property, Error, PropertyVector, Result, StreamKind};
pub use properties::{
    AttachmentProperties, AudioProperties, ContainerHandle, DataProperties, ExportOptions,
    FileProperties, FormatContext, FormatDescriptor, StreamProperties, StreamRecord,
    SubtitleProperties, UnknownProperties, VideoProperties, TIME_BASE,
};
