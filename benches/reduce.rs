//! Reduction benchmarks
//!
//! Thread scaling of the fixed-tree reduction. Every variant in a group
//! returns the same bits, so only the time should change.
//!
//! Usage:
//!   cargo bench --bench reduce

#![allow(dead_code)]

use fluxbench::{Bencher, flux};
use std::hint::black_box;

use anchor_linalg::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn rand_vec_f64(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| ((i * 17 + 3) % 1000) as f64 / 1000.0 - 0.5)
        .collect()
}

fn rand_vec_f32(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| ((i * 31 + 7) % 1000) as f32 / 1000.0 - 0.5)
        .collect()
}

fn client_with_threads(threads: usize) -> CpuClient {
    CpuClient::new().with_parallelism(ParallelismConfig::new(Some(threads), None))
}

// ---------------------------------------------------------------------------
// sum f64, 1M elements
// ---------------------------------------------------------------------------

#[flux::bench(group = "sum_f64_1m")]
fn sum_f64_1m_1thread(b: &mut Bencher) {
    let client = client_with_threads(1);
    let x = rand_vec_f64(1_000_000);
    b.iter(|| black_box(client.sum(&x, Algorithm::FixedTree, None).unwrap()));
}

#[flux::bench(group = "sum_f64_1m")]
fn sum_f64_1m_2threads(b: &mut Bencher) {
    let client = client_with_threads(2);
    let x = rand_vec_f64(1_000_000);
    b.iter(|| black_box(client.sum(&x, Algorithm::FixedTree, None).unwrap()));
}

#[flux::bench(group = "sum_f64_1m")]
fn sum_f64_1m_4threads(b: &mut Bencher) {
    let client = client_with_threads(4);
    let x = rand_vec_f64(1_000_000);
    b.iter(|| black_box(client.sum(&x, Algorithm::FixedTree, None).unwrap()));
}

#[flux::bench(group = "sum_f64_1m")]
fn sum_f64_1m_8threads(b: &mut Bencher) {
    let client = client_with_threads(8);
    let x = rand_vec_f64(1_000_000);
    b.iter(|| black_box(client.sum(&x, Algorithm::FixedTree, None).unwrap()));
}

// ---------------------------------------------------------------------------
// dot / norm2 f32, 1M elements
// ---------------------------------------------------------------------------

#[flux::bench(group = "dot_f32_1m")]
fn dot_f32_1m_1thread(b: &mut Bencher) {
    let client = client_with_threads(1);
    let x = rand_vec_f32(1_000_000);
    let y = rand_vec_f32(1_000_000);
    b.iter(|| black_box(client.dot(&x, &y, Algorithm::FixedTree, None).unwrap()));
}

#[flux::bench(group = "dot_f32_1m")]
fn dot_f32_1m_4threads(b: &mut Bencher) {
    let client = client_with_threads(4);
    let x = rand_vec_f32(1_000_000);
    let y = rand_vec_f32(1_000_000);
    b.iter(|| black_box(client.dot(&x, &y, Algorithm::FixedTree, None).unwrap()));
}

#[flux::bench(group = "dot_f32_1m")]
fn norm2_f32_1m_4threads(b: &mut Bencher) {
    let client = client_with_threads(4);
    let x = rand_vec_f32(1_000_000);
    b.iter(|| black_box(client.norm2(&x, Algorithm::FixedTree, None).unwrap()));
}

// ---------------------------------------------------------------------------
// Chunk size sensitivity
// ---------------------------------------------------------------------------

#[flux::bench(group = "sum_f64_chunk_size")]
fn sum_f64_chunk_256(b: &mut Bencher) {
    let client = CpuClient::new().with_parallelism(ParallelismConfig::new(Some(4), Some(256)));
    let x = rand_vec_f64(1_000_000);
    b.iter(|| black_box(client.sum(&x, Algorithm::FixedTree, None).unwrap()));
}

#[flux::bench(group = "sum_f64_chunk_size")]
fn sum_f64_chunk_16k(b: &mut Bencher) {
    let client = CpuClient::new().with_parallelism(ParallelismConfig::new(Some(4), Some(16_384)));
    let x = rand_vec_f64(1_000_000);
    b.iter(|| black_box(client.sum(&x, Algorithm::FixedTree, None).unwrap()));
}

fn main() {
    if let Err(e) = fluxbench::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
