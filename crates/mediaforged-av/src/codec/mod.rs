//! Codec configuration.
//!
//! The codec context itself belongs to whoever drives encoding or decoding;
//! this module only describes the audio fields it carries and gives typed
//! access to them.

mod audio;
mod context;
mod sample;

pub use audio::AudioCodec;
pub use context::{CodecContext, CodecParameters, CodecType};
pub use sample::{AudioFrameDesc, ParseSampleFormatError, SampleFormat};
