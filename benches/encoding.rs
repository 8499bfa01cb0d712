use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sql_literal::{encode, Dialect, SqlType, SqlValue};

fn benchmark_encode_scalars(c: &mut Criterion) {
    let dialect = Dialect::postgres();
    let row = vec![
        SqlValue::from(123_456i64),
        SqlValue::from("alice@example.com"),
        SqlValue::from(true),
        SqlValue::from(0.875f64),
    ];

    c.bench_function("encode_scalar_row", |b| {
        b.iter(|| {
            let mut buf = String::with_capacity(64);
            for value in black_box(&row) {
                encode(&dialect, &mut buf, value).unwrap();
                buf.push(',');
            }
            buf
        })
    });
}

fn benchmark_encode_int_arrays(c: &mut Criterion) {
    let dialect = Dialect::postgres();
    let mut group = c.benchmark_group("encode_int64_array");
    for size in [8usize, 128, 1024] {
        let value = SqlValue::from((0..size as i64).collect::<Vec<i64>>());
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| {
                let mut buf = String::with_capacity(size * 4);
                encode(&dialect, &mut buf, black_box(value)).unwrap();
                buf
            })
        });
    }
    group.finish();
}

fn benchmark_encode_text_array(c: &mut Criterion) {
    let dialect = Dialect::postgres();
    let value = SqlValue::from(
        (0..64)
            .map(|i| format!("tag-{i} with 'quotes' and \\slashes\\"))
            .collect::<Vec<String>>(),
    );

    c.bench_function("encode_text_array_64", |b| {
        b.iter(|| {
            let mut buf = String::with_capacity(2048);
            encode(&dialect, &mut buf, black_box(&value)).unwrap();
            buf
        })
    });
}

fn benchmark_generic_vs_fast_shape(c: &mut Criterion) {
    let dialect = Dialect::postgres();
    // bool[] has no fast path and exercises the generic per-element routine.
    let generic = SqlValue::array(
        SqlType::Bool,
        (0..128).map(|i| SqlValue::Bool(i % 2 == 0)).collect(),
    );
    let fast = SqlValue::from((0..128i32).collect::<Vec<i32>>());

    c.bench_function("encode_generic_bool_array_128", |b| {
        b.iter(|| {
            let mut buf = String::with_capacity(1024);
            encode(&dialect, &mut buf, black_box(&generic)).unwrap();
            buf
        })
    });

    c.bench_function("encode_fast_int32_array_128", |b| {
        b.iter(|| {
            let mut buf = String::with_capacity(1024);
            encode(&dialect, &mut buf, black_box(&fast)).unwrap();
            buf
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode_scalars,
    benchmark_encode_int_arrays,
    benchmark_encode_text_array,
    benchmark_generic_vs_fast_shape
);
criterion_main!(benches);
