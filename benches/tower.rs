use bls12_tower::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::OsRng;

/// Benchmark base field encoding and decoding
fn bench_fe_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381_fe_encoding");

    let a = Fe::random(&mut OsRng).unwrap();
    let bytes = a.to_bytes();
    let canonical = a.to_canonical_bytes();
    let hex = a.to_hex_string();
    let big = a.to_big();

    group.bench_function("from_bytes", |bencher| {
        bencher.iter(|| black_box(Fe::from_bytes(black_box(&bytes))))
    });

    group.bench_function("to_bytes", |bencher| {
        bencher.iter(|| black_box(a.to_bytes()))
    });

    group.bench_function("from_canonical_bytes", |bencher| {
        bencher.iter(|| black_box(Fe::from_canonical_bytes(black_box(&canonical)).unwrap()))
    });

    group.bench_function("set_string", |bencher| {
        let mut out = Fe::zero();
        bencher.iter(|| {
            out.set_string(black_box(&hex)).unwrap();
            black_box(out)
        })
    });

    group.bench_function("from_big", |bencher| {
        bencher.iter(|| black_box(Fe::from_big(black_box(&big))))
    });

    group.finish();
}

/// Benchmark predicates that leave the Montgomery domain
fn bench_fe_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381_fe_sign");

    let a = Fe::random(&mut OsRng).unwrap();

    group.bench_function("sign", |bencher| bencher.iter(|| black_box(a.sign())));
    group.bench_function("sign_be", |bencher| bencher.iter(|| black_box(a.sign_be())));
    group.bench_function("is_valid", |bencher| bencher.iter(|| black_box(a.is_valid())));

    group.finish();
}

/// Benchmark eager against lazy reduction
fn bench_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381_wide");

    let a = Fe::random(&mut OsRng).unwrap();
    let b = Fe::random(&mut OsRng).unwrap();
    let x = Fe2::random(&mut OsRng).unwrap();
    let y = Fe2::random(&mut OsRng).unwrap();

    group.bench_function("fe_mul", |bencher| bencher.iter(|| black_box(a * b)));

    group.bench_function("fe_mul_wide", |bencher| {
        bencher.iter(|| black_box(Wfe::mul_wide(&a, &b)))
    });

    group.bench_function("fe_sum_of_products_eager", |bencher| {
        bencher.iter(|| black_box(a * b + b * a))
    });

    group.bench_function("fe_sum_of_products_lazy", |bencher| {
        bencher.iter(|| {
            let acc = Wfe::mul_wide(&a, &b).add_wide(&Wfe::mul_wide(&b, &a));
            black_box(Fe::from_wide(&acc))
        })
    });

    group.bench_function("fe2_mul", |bencher| bencher.iter(|| black_box(x * y)));

    group.finish();
}

/// Benchmark tower sampling
fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381_random");

    group.bench_function("fe", |bencher| {
        bencher.iter(|| black_box(Fe::random(&mut OsRng).unwrap()))
    });

    group.bench_function("fe12", |bencher| {
        bencher.iter(|| black_box(Fe12::random(&mut OsRng).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_fe_encoding, bench_fe_sign, bench_wide, bench_random);
criterion_main!(benches);
