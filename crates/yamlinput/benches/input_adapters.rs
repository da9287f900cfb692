//! Benchmark – pulling a YAML document through every adapter kind
#![allow(missing_docs)]

use std::{
    io::{BufReader, Cursor, Seek, SeekFrom, Write},
    time::Duration,
};

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use yamlinput::{InputAdapter, Stream, input_adapter};

/// Produce a deterministic YAML document of at least `target_len` bytes,
/// mixing ASCII, BMP and astral scalars so the UTF-16 path sees surrogate
/// pairs.
fn make_yaml_payload(target_len: usize) -> String {
    let mut s = String::with_capacity(target_len + 64);
    let mut i = 0usize;
    while s.len() < target_len {
        match i % 3 {
            0 => s.push_str(&format!("key{i}: plain value\n")),
            1 => s.push_str(&format!("キー{i}: 値\n")),
            _ => s.push_str(&format!("- 𠀋 {i} 😀\n")),
        }
        i += 1;
    }
    s
}

/// Pull every byte and return how many there were, so Criterion cannot
/// optimise the work away.
fn drain<A: InputAdapter>(mut adapter: A) -> usize {
    let mut n = 0usize;
    while let Some(byte) = adapter.get_character().unwrap() {
        black_box(byte);
        n += 1;
    }
    n
}

fn bench_input_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_adapters");

    for &len in &[1_000usize, 100_000] {
        let payload = make_yaml_payload(len);
        let utf16: Vec<u16> = payload.encode_utf16().collect();
        let utf32: Vec<u32> = payload.chars().map(u32::from).collect();
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(payload.as_bytes()).unwrap();

        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_with_input(BenchmarkId::new("utf8_range", len), &payload, |b, p| {
            b.iter(|| drain(input_adapter(black_box(p.as_bytes())).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("utf16_range", len), &utf16, |b, u| {
            b.iter(|| drain(input_adapter(black_box(u)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("utf32_range", len), &utf32, |b, u| {
            b.iter(|| drain(input_adapter(black_box(u)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("stream", len), &payload, |b, p| {
            b.iter(|| {
                let reader = BufReader::new(Cursor::new(black_box(p.as_bytes())));
                drain(input_adapter(Stream(reader)).unwrap())
            });
        });
        group.bench_function(BenchmarkId::new("file", len), |b| {
            b.iter(|| {
                file.seek(SeekFrom::Start(0)).unwrap();
                drain(input_adapter(&file).unwrap())
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_input_adapters }
criterion_main!(benches);
