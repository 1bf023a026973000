//! Integration tests for mediaforged-av

use mediaforged_av::{
    AttachmentProperties, AudioCodec, AudioFrameDesc, AudioProperties, CodecContext, CodecType,
    CodedData, Error, FileProperties, FormatContext, Frame, SampleFormat, StreamKind,
    StreamProperties, SubtitleProperties, VideoProperties,
};

fn two_video_one_audio() -> FormatContext {
    FormatContext::new()
        .with_filename("/media/tears_of_steel.mov")
        .with_format("mov,mp4,m4a,3gp,3g2,mj2", "QuickTime / MOV")
        .with_stream_count(8)
        .with_program_count(0)
        .with_start_time(0)
        .with_duration(734_083_000)
        .with_bit_rate(4_200_000)
        .with_metadata("major_brand", "qt  ")
        .with_metadata("creation_time", "2012-05-26T10:04:13.000000Z")
}

fn value<'p>(data: &'p [(String, String)], key: &str) -> Option<&'p str> {
    data.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Test lookup and export over a registry with video at 3 and 7, audio at 5
#[test]
fn test_registry_lookup_and_export() {
    let container = two_video_one_audio();
    let mut file = FileProperties::new(&container);

    let mut hevc = VideoProperties::new(3);
    hevc.codec_name = Some("hevc".to_string());
    let mut h264 = VideoProperties::new(7);
    h264.codec_name = Some("h264".to_string());
    file.add_stream(StreamProperties::Video(hevc));
    file.add_stream(StreamProperties::Audio(AudioProperties::new(5)));
    file.add_stream(StreamProperties::Video(h264));

    let three = file.video_properties_by_stream_index(3).unwrap();
    let seven = file.video_properties_by_stream_index(7).unwrap();
    assert_ne!(three, seven);
    assert_eq!(three.codec_name.as_deref(), Some("hevc"));
    assert_eq!(seven.codec_name.as_deref(), Some("h264"));

    let err = file.video_properties_by_stream_index(5).unwrap_err();
    assert_eq!(
        err,
        Error::NotFound {
            kind: StreamKind::Video,
            index: 5
        }
    );
    assert!(err.to_string().contains('5'));

    let data = file.properties();
    assert!(data.contains(&("numberOfVideoStreams".to_string(), "2".to_string())));
    assert!(data.contains(&("numberOfAudioStreams".to_string(), "1".to_string())));
    assert_eq!(value(&data, "formatLongName"), Some("QuickTime / MOV"));
    assert_eq!(value(&data, "duration"), Some("734.083"));
}

/// Test the six per-kind counters as they appear in the export
#[test]
fn test_export_count_names() {
    let container = two_video_one_audio();
    let mut file = FileProperties::new(&container);
    file.add_stream(StreamProperties::Attachment(AttachmentProperties::new(4)));

    let data = file.properties();
    let counts: Vec<_> = data[8..14].iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        counts,
        vec![
            "numberOfVideoStreams",
            "numberOfAudioStreams",
            "numberOfDataStreams",
            "numberOfSubtitleStreams",
            "numberOfAttachementStreams",
            "numberOfUnknownStreams",
        ]
    );
    assert_eq!(value(&data, "numberOfAttachementStreams"), Some("1"));
}

/// Test that clearing stream records leaves metadata in the export untouched
#[test]
fn test_clear_stream_properties() {
    let container = two_video_one_audio();
    let mut file = FileProperties::new(&container);
    file.add_stream(StreamProperties::Video(VideoProperties::new(0)));
    file.add_stream(StreamProperties::Subtitle(SubtitleProperties::new(2)));

    file.clear_stream_properties();

    assert!(file.video_streams().is_empty());
    assert!(file.audio_streams().is_empty());
    assert!(file.data_streams().is_empty());
    assert!(file.subtitle_streams().is_empty());
    assert!(file.attachment_streams().is_empty());
    assert!(file.unknown_streams().is_empty());

    let data = file.properties();
    assert_eq!(value(&data, "numberOfSubtitleStreams"), Some("0"));
    assert_eq!(value(&data, "major_brand"), Some("qt  "));
    assert_eq!(
        value(&data, "creation_time"),
        Some("2012-05-26T10:04:13.000000Z")
    );
}

/// Test missing container fields
#[test]
fn test_missing_times() {
    let container = FormatContext::new().with_filename("live.ts");
    let file = FileProperties::new(&container);

    assert!(matches!(
        file.duration(),
        Err(Error::MissingData { field: "duration" })
    ));
    assert!(matches!(
        file.start_time(),
        Err(Error::MissingData { field: "start time" })
    ));
    assert_eq!(value(&file.properties(), "duration"), Some("null"));
    assert_eq!(value(&file.properties(), "filename"), Some("live.ts"));
}

/// Test resize zeroing across grow and shrink
#[test]
fn test_resize_always_zeroes() {
    for (from, to) in [(0usize, 0usize), (1, 4096), (4096, 1), (100, 100), (188, 0)] {
        let mut frame = Frame::with_size(from, 0xee);
        frame.resize(to).unwrap();
        assert_eq!(frame.size(), to);
        assert!(frame.data().iter().all(|&b| b == 0));
    }
}

/// Test borrowing a demuxer-owned packet without copying
#[test]
fn test_borrowed_packet_survives_frame() {
    let packet: Vec<u8> = (0..=255).collect();
    let mut coded: CodedData<'_> = Frame::new();
    coded.refer_to(&packet);

    assert_eq!(coded.as_ptr(), packet.as_ptr());
    assert_eq!(coded.size(), 256);
    assert!(coded.assign(4, 0).is_err());

    drop(coded);
    assert_eq!(packet.len(), 256);
    assert_eq!(packet[255], 255);
}

/// Test sizing a coded buffer from the codec's audio parameters
#[test]
fn test_codec_parameters_size_a_frame() {
    let mut context = CodecContext::new(CodecType::Decoder, "pcm_f32le");
    let mut codec = AudioCodec::new(&mut context);
    codec.set_frame_desc(&AudioFrameDesc::new(48_000, 2, SampleFormat::F32));

    let desc = codec.frame_desc();
    let frame = Frame::for_audio(&desc, 25.0);
    assert_eq!(frame.size(), 48_000 * 2 * 4 / 25);

    let audio = AudioProperties::new(1).with_frame_desc(desc);
    assert_eq!(audio.frame_desc(), Some(desc));
}
