// In benches/codec_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use artc_lite::{encode, CompressedSeries, Session};

// --- Mock Data Generation ---

/// A slow, steady warming trend: every block should become a formula.
fn generate_linear_readings(size: usize) -> Vec<f32> {
    (0..size).map(|i| 20.0 + i as f32 * 0.01).collect()
}

/// Uniform noise with no trend: every block should fall back to raw.
fn generate_noisy_readings(size: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.random_range(-10.0f32..10.0)).collect()
}

// --- Benchmark Suite ---

const BENCH_READINGS: usize = 65_536;
const BLOCK_SIZE: usize = 8;
const TOLERANCE: f32 = 0.1;

fn bench_block_encoder(c: &mut Criterion) {
    let linear = generate_linear_readings(BLOCK_SIZE);
    let noisy = generate_noisy_readings(BLOCK_SIZE);

    let mut group = c.benchmark_group("Block Encoder");
    group.bench_function("encode (linear block)", |b| {
        b.iter(|| black_box(encode(black_box(&linear), TOLERANCE)))
    });
    group.bench_function("encode (noisy block)", |b| {
        b.iter(|| black_box(encode(black_box(&noisy), TOLERANCE)))
    });
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let linear = generate_linear_readings(BENCH_READINGS);
    let noisy = generate_noisy_readings(BENCH_READINGS);

    let mut group = c.benchmark_group("Session Throughput");
    group.throughput(criterion::Throughput::Bytes((BENCH_READINGS * 4) as u64));

    for (name, readings) in [("linear", &linear), ("noisy", &noisy)] {
        group.bench_function(format!("compress ({})", name), |b| {
            b.iter(|| {
                let mut session = Session::new(BLOCK_SIZE, TOLERANCE).unwrap();
                black_box(session.compress(black_box(readings)).unwrap())
            })
        });

        group.bench_function(format!("stream ({})", name), |b| {
            b.iter(|| {
                let mut session = Session::new(BLOCK_SIZE, TOLERANCE).unwrap();
                let mut blocks = Vec::with_capacity(readings.len() / BLOCK_SIZE);
                for &value in readings.iter() {
                    session.add_reading(value).unwrap();
                    if session.block_ready() {
                        blocks.push(session.get_block().unwrap());
                    }
                }
                black_box(blocks)
            })
        });

        let mut session = Session::new(BLOCK_SIZE, TOLERANCE).unwrap();
        let records = session.compress(readings).unwrap();
        group.bench_function(format!("decompress ({})", name), |b| {
            b.iter(|| black_box(session.decompress(black_box(&records))))
        });

        let series_bytes = session.compress_series(readings).unwrap().to_bytes().unwrap();
        group.bench_function(format!("parse series ({})", name), |b| {
            b.iter(|| black_box(CompressedSeries::from_bytes(black_box(&series_bytes)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_block_encoder, bench_session);
criterion_main!(benches);
