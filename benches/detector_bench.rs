//! Benchmarks for end-to-end stream detection throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use windowed_anomaly::{generate, run, NullSink, StreamDetector, SyntheticConfig};

/// Benchmark `process` over a seeded synthetic stream at several window sizes
fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_detector");
    let stream = generate(SyntheticConfig {
        size: 100_000,
        ..SyntheticConfig::seeded(1)
    })
    .unwrap();
    group.throughput(Throughput::Elements(stream.len() as u64));

    for &capacity in &[10usize, 50, 500, 5000] {
        group.bench_with_input(BenchmarkId::new("process", capacity), &capacity, |b, &capacity| {
            b.iter(|| {
                let mut detector: StreamDetector = StreamDetector::configure(capacity, 3.0).unwrap();
                let mut anomalies = 0usize;
                for &value in &stream {
                    if detector.process(value).is_some() {
                        anomalies += 1;
                    }
                }
                black_box(anomalies)
            });
        });

        group.bench_with_input(BenchmarkId::new("run", capacity), &capacity, |b, &capacity| {
            b.iter(|| {
                let mut detector: StreamDetector = StreamDetector::configure(capacity, 3.0).unwrap();
                black_box(run(&mut detector, stream.iter().copied(), &mut NullSink))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
