use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qrchunk_core::{symbol, textsafe};

fn bench_textsafe_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("textsafe_encode");

    for size in [64, 256, 1024, 1864] {
        let data = vec![0x42u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| textsafe::encode(black_box(data)));
        });
    }

    group.finish();
}

fn bench_textsafe_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("textsafe_decode");

    for size in [64, 256, 1024, 1864] {
        let encoded = textsafe::encode(&vec![0x42u8; size]);

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, text| {
            b.iter(|| textsafe::decode(black_box(text)).unwrap());
        });
    }

    group.finish();
}

fn bench_symbol_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("symbol_render");
    group.sample_size(20);

    for size in [64, 512, 1864] {
        let payload = textsafe::encode(&vec![0x42u8; size]);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, text| {
            b.iter(|| symbol::render(black_box(text)).unwrap());
        });
    }

    group.finish();
}

fn bench_symbol_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("symbol_read");
    group.sample_size(10);

    for size in [64, 512] {
        let payload = textsafe::encode(&vec![0x42u8; size]);
        let image = symbol::render(&payload).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &image, |b, image| {
            b.iter(|| symbol::read(black_box(image)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_textsafe_encode,
    bench_textsafe_decode,
    bench_symbol_render,
    bench_symbol_read
);
criterion_main!(benches);
