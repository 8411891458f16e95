use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seiseki_core::{assignment, schedule};

fn bench_schedule_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");

    group.bench_function("parse_canonical", |b| {
        b.iter(|| schedule::parse(black_box("T2 - Tiết 3, T4 - Tiết 5, T6 - Tiết 1")))
    });

    group.bench_function("parse_legacy", |b| {
        b.iter(|| schedule::parse(black_box("T2, T4, T6 - Tiết 1")))
    });

    group.bench_function("parse_garbage", |b| {
        b.iter(|| schedule::parse(black_box("no schedule set yet")))
    });

    let entries = schedule::parse("T2 - Tiết 3, T4 - Tiết 5, T6 - Tiết 1");
    group.bench_function("serialize", |b| {
        b.iter(|| schedule::serialize(black_box(&entries)))
    });

    group.finish();
}

fn bench_assignment_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("assignment");

    group.bench_function("parse", |b| {
        b.iter(|| assignment::parse(black_box("Yamada (Kanji), Sato (Hội thoại), Pham (Ngữ pháp)")))
    });

    let entries = assignment::parse("Yamada (Kanji), Sato (Hội thoại), Pham (Ngữ pháp)");
    group.bench_function("serialize", |b| {
        b.iter(|| assignment::serialize(black_box(&entries)))
    });

    group.finish();
}

criterion_group!(benches, bench_schedule_codec, bench_assignment_codec);
criterion_main!(benches);
