//! The container seam and its plain-data implementation.

use serde::{Deserialize, Serialize};

/// Ticks per second of container timestamps, unless the container says
/// otherwise.
pub const TIME_BASE: i64 = 1_000_000;

/// Format-level fields of an open container.
///
/// Every optional field returns `None` when the container never set it.
pub trait ContainerHandle {
    /// Path or URL the container was opened from.
    fn filename(&self) -> Option<&str>;

    /// Short format name (e.g., "matroska,webm").
    fn format_name(&self) -> Option<&str>;

    /// Human-readable format name (e.g., "Matroska / WebM").
    fn format_long_name(&self) -> Option<&str>;

    fn stream_count(&self) -> usize;

    fn program_count(&self) -> usize;

    /// Start time in ticks of [`ContainerHandle::time_base`].
    fn start_time(&self) -> Option<i64>;

    /// Duration in ticks of [`ContainerHandle::time_base`].
    fn duration(&self) -> Option<i64>;

    /// Ticks per second.
    fn time_base(&self) -> i64 {
        TIME_BASE
    }

    /// Total bit rate in bits per second.
    fn bit_rate(&self) -> Option<u64>;

    /// Packet size in bytes, for formats with fixed-size packets.
    fn packet_size(&self) -> Option<u32>;

    /// Container-level metadata in the container's own order.
    fn metadata(&self) -> Vec<(String, String)>;
}

/// Short and long name of a container format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    pub name: Option<String>,
    pub long_name: Option<String>,
}

/// In-memory container description.
///
/// Filled by a demuxer, or by hand in tests.
///
/// # Example
///
/// ```
/// use mediaforged_av::{ContainerHandle, FormatContext};
///
/// let container = FormatContext::new()
///     .with_filename("clip.wav")
///     .with_format("wav", "WAV / WAVE (Waveform Audio)")
///     .with_metadata("encoder", "Lavf60.3.100");
///
/// assert_eq!(container.format_name(), Some("wav"));
/// assert_eq!(container.duration(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatContext {
    pub filename: Option<String>,
    pub format: Option<FormatDescriptor>,
    pub stream_count: usize,
    pub program_count: usize,
    pub start_time: Option<i64>,
    pub duration: Option<i64>,
    pub time_base: i64,
    pub bit_rate: Option<u64>,
    pub packet_size: Option<u32>,
    pub metadata: Vec<(String, String)>,
}

impl FormatContext {
    /// Create a context with every optional field unset.
    pub fn new() -> Self {
        Self {
            filename: None,
            format: None,
            stream_count: 0,
            program_count: 0,
            start_time: None,
            duration: None,
            time_base: TIME_BASE,
            bit_rate: None,
            packet_size: None,
            metadata: Vec::new(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_format(mut self, name: impl Into<String>, long_name: impl Into<String>) -> Self {
        self.format = Some(FormatDescriptor {
            name: Some(name.into()),
            long_name: Some(long_name.into()),
        });
        self
    }

    pub fn with_stream_count(mut self, count: usize) -> Self {
        self.stream_count = count;
        self
    }

    pub fn with_program_count(mut self, count: usize) -> Self {
        self.program_count = count;
        self
    }

    /// Set the start time in ticks.
    pub fn with_start_time(mut self, ticks: i64) -> Self {
        self.start_time = Some(ticks);
        self
    }

    /// Set the duration in ticks.
    pub fn with_duration(mut self, ticks: i64) -> Self {
        self.duration = Some(ticks);
        self
    }

    pub fn with_time_base(mut self, ticks_per_second: i64) -> Self {
        self.time_base = ticks_per_second;
        self
    }

    pub fn with_bit_rate(mut self, bit_rate: u64) -> Self {
        self.bit_rate = Some(bit_rate);
        self
    }

    pub fn with_packet_size(mut self, packet_size: u32) -> Self {
        self.packet_size = Some(packet_size);
        self
    }

    /// Append one metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }
}

impl Default for FormatContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerHandle for FormatContext {
    fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    fn format_name(&self) -> Option<&str> {
        self.format.as_ref()?.name.as_deref()
    }

    fn format_long_name(&self) -> Option<&str> {
        self.format.as_ref()?.long_name.as_deref()
    }

    fn stream_count(&self) -> usize {
        self.stream_count
    }

    fn program_count(&self) -> usize {
        self.program_count
    }

    fn start_time(&self) -> Option<i64> {
        self.start_time
    }

    fn duration(&self) -> Option<i64> {
        self.duration
    }

    fn time_base(&self) -> i64 {
        self.time_base
    }

    fn bit_rate(&self) -> Option<u64> {
        self.bit_rate
    }

    fn packet_size(&self) -> Option<u32> {
        self.packet_size
    }

    fn metadata(&self) -> Vec<(String, String)> {
        self.metadata.clone()
    }
}
