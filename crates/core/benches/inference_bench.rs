//! Benchmarks for schema inference operations
//!
//! Run with: cargo bench -p column-schema-core

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use column_schema_core::inference::{
    DataType, InferenceConfig, SchemaBuilder, infer_field, merge_vectors,
};

/// Generate sample delimited rows, already split into fields
fn generate_sample_rows(count: usize) -> Vec<Vec<Option<String>>> {
    (0..count)
        .map(|i| {
            vec![
                Some(i.to_string()),
                Some(format!("user{}@example.com", i)),
                Some((20 + (i % 60)).to_string()),
                Some(format!("{:.2}", 1000.0 + (i as f64 * 10.5))),
                if i % 7 == 0 {
                    None
                } else {
                    Some((i as i64 * 3_000_000_000).to_string())
                },
                Some(if i % 2 == 0 { "true" } else { "false" }.to_string()),
            ]
        })
        .collect()
}

fn header() -> Vec<String> {
    ["id", "email", "age", "balance", "big", "active"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Benchmark field detection at each rung of the ladder
fn bench_field_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_detection");

    let test_cases = vec![
        ("integer", DataType::Null, "42"),
        ("long", DataType::Integer, "99999999999999"),
        ("double", DataType::Long, "3.14159"),
        ("string", DataType::Integer, "hello world"),
        ("string_sticky", DataType::String, "42"),
    ];

    for (name, start, value) in test_cases {
        group.bench_with_input(
            BenchmarkId::new("infer_field", name),
            &(start, value),
            |b, (start, value)| {
                b.iter(|| black_box(infer_field(*start, Some(*value))));
            },
        );
    }

    group.finish();
}

/// Benchmark sequential against parallel inference with varying row counts
fn bench_schema_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_inference");
    let header = header();

    for count in [1_000, 10_000, 100_000].iter() {
        let rows = generate_sample_rows(*count);
        let builder = SchemaBuilder::with_config(InferenceConfig::default());
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("sequential", count), &rows, |b, rows| {
            b.iter(|| black_box(builder.infer(rows, &header)));
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", count), &rows, |b, rows| {
            b.iter(|| black_box(builder.infer_parallel(rows, &header)));
        });
    }

    group.finish();
}

/// Benchmark merging partial type vectors
fn bench_vector_merging(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_merging");

    for width in [16, 256, 4096].iter() {
        let left: Vec<DataType> = (0..*width)
            .map(|i| DataType::ALL[i % DataType::ALL.len()])
            .collect();
        let right: Vec<DataType> = left.iter().rev().copied().collect();
        group.throughput(Throughput::Elements(*width as u64));

        group.bench_with_input(
            BenchmarkId::new("merge_vectors", width),
            &(left, right),
            |b, (left, right)| {
                b.iter(|| black_box(merge_vectors(left, right)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_field_detection,
    bench_schema_inference,
    bench_vector_merging
);
criterion_main!(benches);
