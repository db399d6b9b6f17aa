use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shiftbuffer::{ShiftBuffer, ShiftBufferConfig};

const TOTAL_ELEMENTS: u64 = 1_000_000;

fn bench_steady_state_fifo(c: &mut Criterion) {
    let mut group = c.benchmark_group("steady_state_fifo");
    group.throughput(Throughput::Elements(TOTAL_ELEMENTS));

    for batch in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(batch), &batch, |b, &batch| {
            b.iter(|| {
                let mut buf: ShiftBuffer<u64> = ShiftBuffer::with_config(ShiftBufferConfig::new(4096, 2, 0.5));
                let chunk: Vec<u64> = (0..batch as u64).collect();
                let mut out = vec![0u64; batch];
                let mut sent = 0u64;
                while sent < TOTAL_ELEMENTS {
                    buf.write(&chunk).unwrap();
                    buf.read(&mut out).unwrap();
                    black_box(&out);
                    sent += batch as u64;
                }
            });
        });
    }

    group.finish();
}

fn bench_append_heavy_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_heavy_then_drain");
    group.throughput(Throughput::Elements(TOTAL_ELEMENTS));

    group.bench_function("write_all_then_read_all", |b| {
        b.iter(|| {
            let mut buf: ShiftBuffer<u64> = ShiftBuffer::with_capacity(1024);
            let chunk: Vec<u64> = (0..1024u64).collect();
            let mut written = 0u64;
            while written < TOTAL_ELEMENTS {
                buf.write(&chunk).unwrap();
                written += chunk.len() as u64;
            }

            let mut out = vec![0u64; buf.len()];
            buf.read(&mut out).unwrap();
            black_box(&out);
        });
    });

    group.finish();
}

fn bench_compaction_vs_reallocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("compaction_vs_reallocation");

    for ratio in [0.0, 0.5, 1.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("min_free_head_ratio_{ratio}")),
            &ratio,
            |b, &ratio| {
                let config = ShiftBufferConfig::new(1024, 2, ratio);
                b.iter(|| {
                    let mut buf: ShiftBuffer<u64> = ShiftBuffer::with_config(config);
                    let chunk: Vec<u64> = (0..64u64).collect();
                    let mut out = vec![0u64; 32];
                    for _ in 0..2000 {
                        buf.write(&chunk).unwrap();
                        buf.read(&mut out).unwrap();
                    }
                    black_box(buf.metrics());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_steady_state_fifo,
    bench_append_heavy_then_drain,
    bench_compaction_vs_reallocation
);
criterion_main!(benches);
