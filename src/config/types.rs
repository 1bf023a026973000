use mediaforged_av::{AudioFrameDesc, ExportOptions, SampleFormat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub properties: PropertiesConfig,

    #[serde(default)]
    pub audio: AudioConfig,
}

impl Config {
    /// Export options for `FileProperties::properties_with`.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            unavailable_value: self.properties.unavailable_value.clone(),
            include_metadata: self.properties.include_metadata,
        }
    }

    /// Audio parameters to fall back to when a stream does not carry its own.
    pub fn default_audio_frame(&self) -> AudioFrameDesc {
        self.audio.default_frame
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing` filter directives, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "mediaforged=info,mediaforged_av=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PropertiesConfig {
    /// Value exported for container fields that are not set (default: "null")
    #[serde(default = "default_unavailable_value")]
    pub unavailable_value: String,

    /// Append container metadata to exported property lists (default: true)
    #[serde(default = "default_true")]
    pub include_metadata: bool,
}

fn default_unavailable_value() -> String {
    "null".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self {
            unavailable_value: default_unavailable_value(),
            include_metadata: default_true(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AudioConfig {
    #[serde(default = "default_audio_frame")]
    pub default_frame: AudioFrameDesc,
}

fn default_audio_frame() -> AudioFrameDesc {
    AudioFrameDesc::new(48_000, 2, SampleFormat::S16)
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            default_frame: default_audio_frame(),
        }
    }
}
