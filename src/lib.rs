//! Mediaforged - buffers, codec parameters and stream properties for media
//! pipelines
//!
//! This crate bundles the workspace libraries with configuration loading and
//! logging setup:
//!
//! - [`config`] - TOML configuration (logging filter, property export, audio
//!   defaults)
//! - [`logging`] - `tracing` subscriber initialisation
//! - [`av`] - frames, audio codec parameters and file properties
//! - [`common`] - error type, stream kinds and property lists

pub mod config;
pub mod logging;

pub use mediaforged_av as av;
pub use mediaforged_common as common;

pub use mediaforged_av::{
    AudioCodec, AudioFrameDesc, CodedData, ContainerHandle, Error, FileProperties, FormatContext,
    Frame, PropertyVector, Result, SampleFormat, StreamKind,
};
