//! FFmpeg-backed container handle using ffmpeg-the-third bindings.
//!
//! Lets [`FileProperties`] read straight from an opened FFmpeg input
//! context and fills its stream records. Opening the file stays with the
//! caller. Requires the `native-ffmpeg` feature.

use crate::codec::SampleFormat;
use crate::properties::{
    AttachmentProperties, AudioProperties, ContainerHandle, DataProperties, FileProperties,
    StreamProperties, SubtitleProperties, UnknownProperties, VideoProperties, TIME_BASE,
};
use ffmpeg_the_third as ffmpeg;
use ffmpeg::format::context::Input;
use std::ffi::CStr;
use std::os::raw::c_char;

/// Borrowed FFmpeg input context exposed as a [`ContainerHandle`].
///
/// # Example
///
/// ```no_run
/// use ffmpeg_the_third as ffmpeg;
/// use mediaforged_av::native_ffmpeg::{populate_streams, NativeContainer};
/// use mediaforged_av::FileProperties;
///
/// ffmpeg::init()?;
/// let input = ffmpeg::format::input("/path/to/movie.mkv")?;
/// let container = NativeContainer::new(&input);
///
/// let mut file = FileProperties::new(&container);
/// populate_streams(&mut file, &input);
/// println!("{:?}", file.properties());
/// # Ok::<(), ffmpeg::Error>(())
/// ```
pub struct NativeContainer<'a> {
    input: &'a Input,
}

impl<'a> NativeContainer<'a> {
    pub fn new(input: &'a Input) -> Self {
        Self { input }
    }

    fn raw(&self) -> &ffmpeg::ffi::AVFormatContext {
        // SAFETY: the context stays valid and unmodified for as long as
        // `input` is borrowed.
        unsafe { &*self.input.as_ptr() }
    }
}

impl ContainerHandle for NativeContainer<'_> {
    fn filename(&self) -> Option<&str> {
        // SAFETY: `url` is either null or a NUL-terminated string owned by
        // the context.
        unsafe { c_str(self.raw().url) }
    }

    fn format_name(&self) -> Option<&str> {
        // SAFETY: `iformat` is null or points at a static format descriptor.
        unsafe { self.raw().iformat.as_ref().and_then(|f| c_str(f.name)) }
    }

    fn format_long_name(&self) -> Option<&str> {
        // SAFETY: as above.
        unsafe { self.raw().iformat.as_ref().and_then(|f| c_str(f.long_name)) }
    }

    fn stream_count(&self) -> usize {
        self.raw().nb_streams as usize
    }

    fn program_count(&self) -> usize {
        self.raw().nb_programs as usize
    }

    fn start_time(&self) -> Option<i64> {
        let ticks = self.raw().start_time;
        (ticks != ffmpeg::ffi::AV_NOPTS_VALUE).then_some(ticks)
    }

    fn duration(&self) -> Option<i64> {
        let ticks = self.raw().duration;
        (ticks != ffmpeg::ffi::AV_NOPTS_VALUE).then_some(ticks)
    }

    fn time_base(&self) -> i64 {
        TIME_BASE
    }

    fn bit_rate(&self) -> Option<u64> {
        u64::try_from(self.raw().bit_rate)
            .ok()
            .filter(|&rate| rate > 0)
    }

    fn packet_size(&self) -> Option<u32> {
        let size = self.raw().packet_size;
        (size > 0).then_some(size)
    }

    fn metadata(&self) -> Vec<(String, String)> {
        self.input
            .metadata()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// Append one typed record per stream of `input` to `file`.
pub fn populate_streams(file: &mut FileProperties<'_>, input: &Input) {
    for stream in input.streams() {
        let stream_index = stream.index();
        let params = stream.parameters();
        let codec_name = Some(format!("{:?}", params.id()).to_lowercase());
        let metadata: Vec<(String, String)> = stream
            .metadata()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let record = match params.medium() {
            ffmpeg::media::Type::Video => StreamProperties::Video(VideoProperties {
                stream_index,
                codec_name,
                metadata,
            }),
            ffmpeg::media::Type::Audio => {
                let mut audio = AudioProperties {
                    stream_index,
                    codec_name,
                    metadata,
                    ..Default::default()
                };
                if let Ok(decoder) = ffmpeg::codec::context::Context::from_parameters(params)
                    .and_then(|ctx| ctx.decoder().audio())
                {
                    audio.sample_rate = Some(decoder.rate());
                    audio.channels = Some(decoder.ch_layout().channels());
                    audio.sample_format = sample_format(decoder.format());
                }
                StreamProperties::Audio(audio)
            }
            ffmpeg::media::Type::Data => StreamProperties::Data(DataProperties {
                stream_index,
                codec_name,
                metadata,
            }),
            ffmpeg::media::Type::Subtitle => StreamProperties::Subtitle(SubtitleProperties {
                stream_index,
                codec_name,
                metadata,
            }),
            ffmpeg::media::Type::Attachment => {
                StreamProperties::Attachment(AttachmentProperties {
                    stream_index,
                    codec_name,
                    metadata,
                })
            }
            _ => StreamProperties::Unknown(UnknownProperties {
                stream_index,
                metadata,
            }),
        };

        file.add_stream(record);
    }
}

fn sample_format(sample: ffmpeg::format::Sample) -> Option<SampleFormat> {
    use ffmpeg::format::sample::Type::{Packed, Planar};
    use ffmpeg::format::Sample;

    let format = match sample {
        Sample::None => return None,
        Sample::U8(Packed) => SampleFormat::U8,
        Sample::U8(Planar) => SampleFormat::U8p,
        Sample::I16(Packed) => SampleFormat::S16,
        Sample::I16(Planar) => SampleFormat::S16p,
        Sample::I32(Packed) => SampleFormat::S32,
        Sample::I32(Planar) => SampleFormat::S32p,
        Sample::I64(Packed) => SampleFormat::S64,
        Sample::I64(Planar) => SampleFormat::S64p,
        Sample::F32(Packed) => SampleFormat::F32,
        Sample::F32(Planar) => SampleFormat::F32p,
        Sample::F64(Packed) => SampleFormat::F64,
        Sample::F64(Planar) => SampleFormat::F64p,
    };
    Some(format)
}

unsafe fn c_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}
