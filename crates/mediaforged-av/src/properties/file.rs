//! The per-file stream property registry.

use super::container::ContainerHandle;
use super::stream::{
    AttachmentProperties, AudioProperties, DataProperties, StreamProperties, StreamRecord,
    SubtitleProperties, UnknownProperties, VideoProperties,
};
use mediaforged_common::{add_property, Error, PropertyVector, Result, StreamKind};
use std::fmt;

/// Options for [`FileProperties::properties_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Value exported for a field the container does not provide.
    pub unavailable_value: String,
    /// Whether to append the container metadata entries.
    pub include_metadata: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            unavailable_value: "null".to_string(),
            include_metadata: true,
        }
    }
}

/// Properties of one opened container and its streams.
///
/// Borrows the container handle, which therefore outlives the registry.
/// Container metadata is copied once at construction; later changes to the
/// container are not reflected.
pub struct FileProperties<'a> {
    container: Option<&'a dyn ContainerHandle>,
    metadata: Vec<(String, String)>,
    video_streams: Vec<VideoProperties>,
    audio_streams: Vec<AudioProperties>,
    data_streams: Vec<DataProperties>,
    subtitle_streams: Vec<SubtitleProperties>,
    attachment_streams: Vec<AttachmentProperties>,
    unknown_streams: Vec<UnknownProperties>,
}

impl<'a> FileProperties<'a> {
    /// Snapshot the metadata of `container`. Stream collections start empty.
    pub fn new(container: &'a dyn ContainerHandle) -> Self {
        let metadata = container.metadata();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            filename = container.filename().unwrap_or("<unknown>"),
            metadata_entries = metadata.len(),
            "captured container metadata"
        );

        Self {
            container: Some(container),
            metadata,
            ..Self::detached()
        }
    }

    /// Create a registry with no container behind it.
    ///
    /// Every container field query fails with [`Error::MissingData`].
    pub fn detached() -> Self {
        Self {
            container: None,
            metadata: Vec::new(),
            video_streams: Vec::new(),
            audio_streams: Vec::new(),
            data_streams: Vec::new(),
            subtitle_streams: Vec::new(),
            attachment_streams: Vec::new(),
            unknown_streams: Vec::new(),
        }
    }

    fn container(&self) -> Result<&'a dyn ContainerHandle> {
        self.container.ok_or(Error::missing("format context"))
    }

    pub fn filename(&self) -> Result<String> {
        self.container()?
            .filename()
            .map(str::to_string)
            .ok_or(Error::missing("file name"))
    }

    pub fn format_name(&self) -> Result<String> {
        self.container()?
            .format_name()
            .map(str::to_string)
            .ok_or(Error::missing("format name"))
    }

    pub fn format_long_name(&self) -> Result<String> {
        self.container()?
            .format_long_name()
            .map(str::to_string)
            .ok_or(Error::missing("format long name"))
    }

    pub fn program_count(&self) -> Result<usize> {
        Ok(self.container()?.program_count())
    }

    /// Start time in seconds.
    pub fn start_time(&self) -> Result<f64> {
        let container = self.container()?;
        let ticks = container.start_time().ok_or(Error::missing("start time"))?;
        Self::to_seconds(container, ticks)
    }

    /// Duration in seconds.
    pub fn duration(&self) -> Result<f64> {
        let container = self.container()?;
        let ticks = container.duration().ok_or(Error::missing("duration"))?;
        Self::to_seconds(container, ticks)
    }

    /// Total bit rate in bits per second.
    pub fn bit_rate(&self) -> Result<u64> {
        self.container()?
            .bit_rate()
            .ok_or(Error::missing("bit rate"))
    }

    pub fn packet_size(&self) -> Result<u32> {
        self.container()?
            .packet_size()
            .ok_or(Error::missing("packet size"))
    }

    /// Number of streams the container declares, of all kinds.
    pub fn stream_count(&self) -> Result<usize> {
        Ok(self.container()?.stream_count())
    }

    fn to_seconds(container: &dyn ContainerHandle, ticks: i64) -> Result<f64> {
        let time_base = container.time_base();
        if time_base <= 0 {
            return Err(Error::missing("time base"));
        }
        Ok(ticks as f64 / time_base as f64)
    }

    /// Container metadata captured at construction.
    pub fn metadata(&self) -> &[(String, String)] {
        &self.metadata
    }

    /// Append a typed record to the collection of its kind.
    pub fn add_stream(&mut self, stream: StreamProperties) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            kind = %stream.kind(),
            stream_index = stream.stream_index(),
            "adding stream properties"
        );

        match stream {
            StreamProperties::Video(p) => self.video_streams.push(p),
            StreamProperties::Audio(p) => self.audio_streams.push(p),
            StreamProperties::Data(p) => self.data_streams.push(p),
            StreamProperties::Subtitle(p) => self.subtitle_streams.push(p),
            StreamProperties::Attachment(p) => self.attachment_streams.push(p),
            StreamProperties::Unknown(p) => self.unknown_streams.push(p),
        }
    }

    pub fn video_properties_by_stream_index(&self, stream_index: usize) -> Result<&VideoProperties> {
        find_record(&self.video_streams, stream_index)
    }

    pub fn video_properties_by_stream_index_mut(
        &mut self,
        stream_index: usize,
    ) -> Result<&mut VideoProperties> {
        find_record_mut(&mut self.video_streams, stream_index)
    }

    pub fn audio_properties_by_stream_index(&self, stream_index: usize) -> Result<&AudioProperties> {
        find_record(&self.audio_streams, stream_index)
    }

    pub fn audio_properties_by_stream_index_mut(
        &mut self,
        stream_index: usize,
    ) -> Result<&mut AudioProperties> {
        find_record_mut(&mut self.audio_streams, stream_index)
    }

    pub fn video_streams(&self) -> &[VideoProperties] {
        &self.video_streams
    }

    pub fn audio_streams(&self) -> &[AudioProperties] {
        &self.audio_streams
    }

    pub fn data_streams(&self) -> &[DataProperties] {
        &self.data_streams
    }

    pub fn subtitle_streams(&self) -> &[SubtitleProperties] {
        &self.subtitle_streams
    }

    pub fn attachment_streams(&self) -> &[AttachmentProperties] {
        &self.attachment_streams
    }

    pub fn unknown_streams(&self) -> &[UnknownProperties] {
        &self.unknown_streams
    }

    /// Number of typed records collected for `kind`.
    pub fn count_of(&self, kind: StreamKind) -> usize {
        match kind {
            StreamKind::Video => self.video_streams.len(),
            StreamKind::Audio => self.audio_streams.len(),
            StreamKind::Data => self.data_streams.len(),
            StreamKind::Subtitle => self.subtitle_streams.len(),
            StreamKind::Attachment => self.attachment_streams.len(),
            StreamKind::Unknown => self.unknown_streams.len(),
        }
    }

    /// Drop every typed stream record.
    ///
    /// The metadata snapshot and the container stay as they are, so the
    /// records can be rebuilt after a seek or stream reconfiguration.
    pub fn clear_stream_properties(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("clearing stream properties");

        self.video_streams.clear();
        self.audio_streams.clear();
        self.data_streams.clear();
        self.subtitle_streams.clear();
        self.attachment_streams.clear();
        self.unknown_streams.clear();
    }

    /// Flatten into `(name, value)` pairs with default [`ExportOptions`].
    pub fn properties(&self) -> PropertyVector {
        self.properties_with(&ExportOptions::default())
    }

    /// Flatten into `(name, value)` pairs.
    ///
    /// Container fields come first, then the per-kind stream counts, then the
    /// metadata entries in capture order. A field the container cannot provide
    /// is exported as `options.unavailable_value`.
    pub fn properties_with(&self, options: &ExportOptions) -> PropertyVector {
        let mut data = PropertyVector::new();

        add_field(&mut data, "filename", self.filename(), options);
        add_field(&mut data, "formatName", self.format_name(), options);
        add_field(&mut data, "formatLongName", self.format_long_name(), options);
        add_field(&mut data, "startTime", self.start_time(), options);
        add_field(&mut data, "duration", self.duration(), options);
        add_field(&mut data, "bitrate", self.bit_rate(), options);
        add_field(&mut data, "numberOfStreams", self.stream_count(), options);
        add_field(&mut data, "numberOfPrograms", self.program_count(), options);

        for kind in StreamKind::ALL {
            add_property(&mut data, kind.count_property(), self.count_of(kind));
        }

        if options.include_metadata {
            data.extend(self.metadata.iter().cloned());
        }

        data
    }
}

impl fmt::Debug for FileProperties<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileProperties")
            .field("has_container", &self.container.is_some())
            .field("metadata", &self.metadata)
            .field("video_streams", &self.video_streams.len())
            .field("audio_streams", &self.audio_streams.len())
            .field("data_streams", &self.data_streams.len())
            .field("subtitle_streams", &self.subtitle_streams.len())
            .field("attachment_streams", &self.attachment_streams.len())
            .field("unknown_streams", &self.unknown_streams.len())
            .finish()
    }
}

fn find_record<T: StreamRecord>(records: &[T], stream_index: usize) -> Result<&T> {
    records
        .iter()
        .find(|r| r.stream_index() == stream_index)
        .ok_or(Error::not_found(T::KIND, stream_index))
}

fn find_record_mut<T: StreamRecord>(records: &mut [T], stream_index: usize) -> Result<&mut T> {
    records
        .iter_mut()
        .find(|r| r.stream_index() == stream_index)
        .ok_or(Error::not_found(T::KIND, stream_index))
}

fn add_field<T: fmt::Display>(
    data: &mut PropertyVector,
    key: &str,
    value: Result<T>,
    options: &ExportOptions,
) {
    match value {
        Ok(value) => add_property(data, key, value),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(property = key, error = %_err, "exporting placeholder");
            add_property(data, key, &options.unavailable_value);
        }
    }
}
