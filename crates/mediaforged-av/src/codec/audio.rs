//! Typed access to the audio fields of a codec configuration.

use super::context::CodecParameters;
use super::sample::{AudioFrameDesc, SampleFormat};

/// Audio view over a codec configuration owned elsewhere.
///
/// Holds nothing but the borrow; every setter writes straight through to the
/// shared configuration.
///
/// # Example
///
/// ```
/// use mediaforged_av::{AudioCodec, AudioFrameDesc, CodecContext, CodecType, SampleFormat};
///
/// let mut context = CodecContext::new(CodecType::Encoder, "pcm_s16le");
/// let mut codec = AudioCodec::new(&mut context);
/// codec.set_audio_parameters(44_100, 2, SampleFormat::S16);
///
/// assert_eq!(codec.frame_desc(), AudioFrameDesc::new(44_100, 2, SampleFormat::S16));
/// assert_eq!(context.sample_rate, 44_100);
/// ```
pub struct AudioCodec<'a, C: CodecParameters + ?Sized> {
    context: &'a mut C,
}

impl<'a, C: CodecParameters + ?Sized> AudioCodec<'a, C> {
    /// Bind to a codec configuration.
    pub fn new(context: &'a mut C) -> Self {
        Self { context }
    }

    /// Read the sample rate, channel count and sample format.
    pub fn frame_desc(&self) -> AudioFrameDesc {
        AudioFrameDesc::new(
            self.context.sample_rate(),
            self.context.channels(),
            self.context.sample_format(),
        )
    }

    /// Write all three fields of `desc` into the configuration.
    pub fn set_frame_desc(&mut self, desc: &AudioFrameDesc) {
        self.apply(desc.sample_rate, desc.channels, desc.sample_format);
    }

    /// Write the three audio fields into the configuration.
    pub fn set_audio_parameters(
        &mut self,
        sample_rate: u32,
        channels: u32,
        sample_format: SampleFormat,
    ) {
        self.apply(sample_rate, channels, sample_format);
    }

    /// Get the bound configuration.
    pub fn context(&self) -> &C {
        &*self.context
    }

    fn apply(&mut self, sample_rate: u32, channels: u32, sample_format: SampleFormat) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate,
            channels,
            sample_format = %sample_format,
            "setting audio codec parameters"
        );

        self.context.set_sample_rate(sample_rate);
        self.context.set_channels(channels);
        self.context.set_sample_format(sample_format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CodecContext, CodecType};

    #[test]
    fn test_set_then_get_round_trips() {
        let cases = [
            (8_000, 1, SampleFormat::U8),
            (48_000, 6, SampleFormat::S32p),
            (192_000, 8, SampleFormat::F64),
        ];
        for (rate, channels, format) in cases {
            let mut context = CodecContext::new(CodecType::Decoder, "flac");
            let mut codec = AudioCodec::new(&mut context);
            let desc = AudioFrameDesc::new(rate, channels, format);
            codec.set_frame_desc(&desc);
            assert_eq!(codec.frame_desc(), desc);
        }
    }

    #[test]
    fn test_setters_agree() {
        let desc = AudioFrameDesc::new(44_100, 2, SampleFormat::F32p);

        let mut a = CodecContext::new(CodecType::Encoder, "aac");
        AudioCodec::new(&mut a).set_frame_desc(&desc);

        let mut b = CodecContext::new(CodecType::Encoder, "aac");
        AudioCodec::new(&mut b).set_audio_parameters(44_100, 2, SampleFormat::F32p);

        assert_eq!(a, b);
    }

    #[test]
    fn test_writes_reach_shared_context() {
        let mut context = CodecContext::new(CodecType::Encoder, "pcm_s24le");
        {
            let mut codec = AudioCodec::new(&mut context);
            codec.set_audio_parameters(96_000, 2, SampleFormat::S32);
            assert_eq!(codec.context().codec_name, "pcm_s24le");
        }
        assert_eq!(context.sample_rate, 96_000);
        assert_eq!(context.channels, 2);
        assert_eq!(context.sample_format, SampleFormat::S32);
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut context = CodecContext::new(CodecType::Decoder, "opus");
        let dynamic: &mut dyn CodecParameters = &mut context;
        let mut codec = AudioCodec::new(dynamic);
        codec.set_audio_parameters(48_000, 2, SampleFormat::F32);
        assert_eq!(codec.frame_desc().sample_rate, 48_000);
    }
}
