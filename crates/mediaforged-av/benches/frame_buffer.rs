use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mediaforged_av::{
    AudioProperties, FileProperties, FormatContext, Frame, StreamProperties, VideoProperties,
};

fn bench_frame_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_resize");
    for size in [188usize, 4096, 65_536] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut frame = Frame::with_size(size / 2, 1);
            b.iter(|| {
                frame.resize(black_box(size)).unwrap();
                frame.resize(black_box(size / 2)).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_frame_borrow(c: &mut Criterion) {
    let packet = vec![0x47u8; 65_536];
    c.bench_function("frame_refer_to", |b| {
        b.iter(|| {
            let mut frame = Frame::new();
            frame.refer_to(black_box(&packet));
            black_box(frame.size())
        });
    });
}

fn bench_properties_export(c: &mut Criterion) {
    let mut container = FormatContext::new()
        .with_filename("/media/movie.mkv")
        .with_format("matroska,webm", "Matroska / WebM")
        .with_duration(7_200_000_000);
    for i in 0..32 {
        container = container.with_metadata(format!("tag{i}"), "value");
    }
    let mut file = FileProperties::new(&container);
    for index in 0..16 {
        file.add_stream(StreamProperties::Video(VideoProperties::new(index)));
        file.add_stream(StreamProperties::Audio(AudioProperties::new(index + 16)));
    }

    c.bench_function("properties_export", |b| {
        b.iter(|| black_box(file.properties()));
    });
    c.bench_function("audio_lookup", |b| {
        b.iter(|| black_box(file.audio_properties_by_stream_index(black_box(31)).is_ok()));
    });
}

criterion_group!(
    benches,
    bench_frame_resize,
    bench_frame_borrow,
    bench_properties_export
);
criterion_main!(benches);
