//! Common test utilities
#![allow(dead_code)]

use anchor_linalg::dtype::Element;
use anchor_linalg::runtime::ParallelismConfig;
use anchor_linalg::runtime::cpu::CpuClient;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Thread counts every invariance test sweeps
pub const THREAD_COUNTS: [usize; 4] = [1, 2, 4, 8];

/// Create a CPU client with the default configuration
pub fn create_cpu_client() -> CpuClient {
    CpuClient::new()
}

/// Create a CPU client with an explicit chunk size
pub fn create_chunked_client(chunk_size: usize) -> CpuClient {
    CpuClient::new().with_parallelism(ParallelismConfig::new(None, Some(chunk_size)))
}

/// Seeded uniform values in `[-1, 1)`
pub fn random_f64(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// Seeded uniform values in `[-1, 1)`
pub fn random_f32(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-1.0f32..1.0)).collect()
}

/// Seeded values spanning many orders of magnitude, so that summation order
/// visibly changes the rounded result
pub fn wide_range_f64(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let exponent: i32 = rng.random_range(-20..20);
            let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
            sign * rng.random::<f64>() * 2f64.powi(exponent)
        })
        .collect()
}

/// Sequential left-to-right sum from zero
pub fn sequential_sum<T: Element>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Assert two values have identical bit patterns
pub fn assert_bitwise_eq<T: Element>(a: T, b: T, msg: &str) {
    assert_eq!(
        a.to_bits_u64(),
        b.to_bits_u64(),
        "{}: {} ({:#x}) vs {} ({:#x})",
        msg,
        a,
        a.to_bits_u64(),
        b,
        b.to_bits_u64()
    );
}

/// Assert two f64 values are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_close_f64(a: f64, b: f64, rtol: f64, atol: f64, msg: &str) {
    let diff = (a - b).abs();
    let tol = atol + rtol * b.abs();
    assert!(diff <= tol, "{}: {} vs {} (diff={}, tol={})", msg, a, b, diff, tol);
}
