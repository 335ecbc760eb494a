use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use temporenc::{pack, pack_as, unpack, Moment, TemporencType};

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    group.throughput(Throughput::Elements(1));

    let date_only = Moment::new().date(1983, 1, 15);
    group.bench_function("d", |b| b.iter(|| pack(black_box(&date_only)).unwrap()));

    let full = Moment::new()
        .date(1983, 1, 15)
        .time(18, 25, 12)
        .nanosecond(123_456_789)
        .tz_offset(60);
    group.bench_function("dtsz_ns", |b| b.iter(|| pack(black_box(&full)).unwrap()));

    group.bench_function("dt_explicit", |b| {
        b.iter(|| pack_as(TemporencType::DT, black_box(&full)).unwrap())
    });
    group.finish();
}

fn bench_unpack(c: &mut Criterion) {
    let d = pack(&Moment::new().date(1983, 1, 15)).unwrap();
    let dtsz = pack(
        &Moment::new()
            .date(1983, 1, 15)
            .time(18, 25, 12)
            .nanosecond(123_456_789)
            .tz_offset(60),
    )
    .unwrap();

    let mut group = c.benchmark_group("unpack");
    group.throughput(Throughput::Elements(1));
    group.bench_function("d", |b| b.iter(|| unpack(black_box(&d)).unwrap()));
    group.bench_function("dtsz_ns", |b| b.iter(|| unpack(black_box(&dtsz)).unwrap()));
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let moment = Moment::new().date(1983, 1, 15).time(18, 25, 12).millisecond(123);
    let mut group = c.benchmark_group("roundtrip");
    group.throughput(Throughput::Elements(1));
    group.bench_function("dts_ms", |b| {
        b.iter(|| unpack(&pack(black_box(&moment)).unwrap()).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_pack, bench_unpack, bench_roundtrip);
criterion_main!(benches);
