//! Benchmark comparing the lane kernel against the sequential reference.
//!
//! Run with: `cargo run --example simd_benchmark --release`

use std::hint::black_box;
use std::time::Instant;

use halfdist::{distance, distance_scalar, encode_vector, lane_backend};

fn main() {
    let num_vectors = 10_000;
    let dims = 384; // Standard embedding dimension
    let num_iterations = 100;

    println!("Half-precision L2 Distance Benchmark");
    println!("====================================");
    println!("Backend: {}", lane_backend());
    println!("Vectors: {}", num_vectors);
    println!("Dimensions: {}", dims);
    println!("Iterations: {}", num_iterations);
    println!();

    let query = encode_vector(&(0..dims).map(|i| (i as f32 * 0.001) % 1.0).collect::<Vec<_>>());
    let vectors: Vec<Vec<u8>> = (0..num_vectors)
        .map(|v| {
            let values: Vec<f32> = (0..dims).map(|i| ((v + i) as f32 * 0.0017) % 1.0).collect();
            encode_vector(&values)
        })
        .collect();

    let lanes_start = Instant::now();
    let mut lanes_sum = 0.0f32;
    for _ in 0..num_iterations {
        for vec in &vectors {
            lanes_sum += black_box(distance(black_box(&query), black_box(vec), dims));
        }
    }
    let lanes_elapsed = lanes_start.elapsed();
    black_box(lanes_sum);

    let scalar_start = Instant::now();
    let mut scalar_sum = 0.0f32;
    for _ in 0..num_iterations {
        for vec in &vectors {
            scalar_sum += black_box(distance_scalar(black_box(&query), black_box(vec), dims));
        }
    }
    let scalar_elapsed = scalar_start.elapsed();
    black_box(scalar_sum);

    let total_ops = num_vectors * num_iterations;
    let lanes_per_op_ns = lanes_elapsed.as_nanos() as f64 / total_ops as f64;
    let scalar_per_op_ns = scalar_elapsed.as_nanos() as f64 / total_ops as f64;
    let speedup = scalar_elapsed.as_nanos() as f64 / lanes_elapsed.as_nanos() as f64;

    println!("Results:");
    println!("--------");
    println!(
        "Lanes:  {:>8.2}ms total, {:>6.1}ns per distance",
        lanes_elapsed.as_secs_f64() * 1000.0,
        lanes_per_op_ns
    );
    println!(
        "Scalar: {:>8.2}ms total, {:>6.1}ns per distance",
        scalar_elapsed.as_secs_f64() * 1000.0,
        scalar_per_op_ns
    );
    println!();
    println!("Speedup: {:.2}x", speedup);

    let lanes_result = distance(&query, &vectors[0], dims);
    let scalar_result = distance_scalar(&query, &vectors[0], dims);
    let rel = (lanes_result - scalar_result).abs() / scalar_result.max(f32::MIN_POSITIVE);
    println!();
    println!("Correctness check:");
    println!("  Lanes result:  {:.8}", lanes_result);
    println!("  Scalar result: {:.8}", scalar_result);
    println!("  Relative diff: {:.2e} (should be < 1e-4)", rel);
    assert!(rel < 1e-4, "Results differ too much!");
    println!("  ✓ Results match!");
}
