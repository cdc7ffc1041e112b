//! Benchmarks for value map construction and lookup.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fform_codec::{PrimitiveValue, SelectOption, build_value_maps_from_options, decode, encode};
use std::hint::black_box;

fn options(n: usize) -> Vec<SelectOption<String>> {
    (0..n)
        .map(|i| SelectOption::new(format!("opt-{i}"), format!("Option {i}")))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_maps/build");
    for n in [8, 64, 512] {
        let opts = options(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &opts, |b, opts| {
            b.iter(|| build_value_maps_from_options(black_box(opts)));
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let opts = options(512);
    let maps = build_value_maps_from_options(&opts);
    c.bench_function("value_maps/decode_hit", |b| {
        b.iter(|| maps.decode(black_box("opt-311")));
    });
}

fn bench_codec(c: &mut Criterion) {
    let values = [
        PrimitiveValue::from(""),
        PrimitiveValue::from(42),
        PrimitiveValue::from("us"),
        PrimitiveValue::Number(f64::NAN),
    ];
    c.bench_function("codec/encode_decode", |b| {
        b.iter(|| {
            for v in &values {
                black_box(decode(&encode(black_box(v))));
            }
        });
    });
}

criterion_group!(benches, bench_build, bench_lookup, bench_codec);
criterion_main!(benches);
