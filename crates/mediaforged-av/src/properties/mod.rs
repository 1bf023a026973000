//! Per-file stream properties.
//!
//! A [`FileProperties`] registry is built once per opened container. It reads
//! format-level fields from a [`ContainerHandle`], copies the container's
//! metadata at construction, and collects one typed record per stream as the
//! demuxer discovers them.

mod container;
mod file;
mod stream;

pub use container::{ContainerHandle, FormatContext, FormatDescriptor, TIME_BASE};
pub use file::{ExportOptions, FileProperties};
pub use stream::{
    AttachmentProperties, AudioProperties, DataProperties, StreamProperties, StreamRecord,
    SubtitleProperties, UnknownProperties, VideoProperties,
};
