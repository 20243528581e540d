//! Reproducible reduction helpers for CPU slices
//!
//! The fixed-tree reduction runs in two phases:
//!
//! 1. **Chunk phase (parallel)** - the input is cut into chunks whose
//!    boundaries depend only on `(n, chunk_size)`. Workers reduce whole
//!    chunks left to right and write each result into that chunk's own slot.
//! 2. **Merge phase (sequential)** - after the join, the per-chunk partials
//!    are combined by [`tree_merge`] in a fixed index order.
//!
//! Thread count only decides which worker reduces which chunk, so the result
//! bits are the same for every thread count.

mod chunk;
mod tree;

pub use chunk::{ChunkRanges, Chunks, chunk_count, chunk_range};
pub use tree::tree_merge;

use crate::algorithm::Algorithm;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::ReduceOp;
use crate::runtime::available_parallelism;
use crate::runtime::cpu::CpuClient;
use crate::runtime::cpu::kernels::{dot_kernel, sum_kernel};
use crate::runtime::cpu::parallel::ThreadPool;
use std::ops::Range;

/// Operands of a reduction
#[derive(Copy, Clone, Debug)]
pub(crate) enum Operands<'a, T> {
    /// One array (sum)
    Unary(&'a [T]),
    /// Two arrays of equal length (dot)
    Binary(&'a [T], &'a [T]),
}

impl<T> Operands<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        match self {
            Self::Unary(x) | Self::Binary(x, _) => x.len(),
        }
    }
}

/// Validate, dispatch on `algorithm`, and reduce `operands` to one scalar.
///
/// Checks run before any element is read, in this order: thread count (the
/// per-call value, else the configured one), configured chunk size, operand
/// lengths, algorithm support. An empty input then short-circuits to zero
/// without building a worker pool. No more workers than chunks are used.
#[tracing::instrument(
    level = "debug",
    skip(client, operands),
    fields(n = operands.len(), dtype = %T::DTYPE)
)]
pub(crate) fn reduce_impl<T: Element>(
    client: &CpuClient,
    op: ReduceOp,
    operands: Operands<'_, T>,
    algorithm: Algorithm,
    num_threads: Option<usize>,
) -> Result<T> {
    let config = client.parallelism();
    let num_threads = config.effective_num_threads(num_threads)?;
    config.validate_chunk_size()?;

    if let Operands::Binary(x, y) = operands {
        if x.len() != y.len() {
            return Err(Error::invalid_argument(
                "y",
                format!("length {} does not match x length {}", y.len(), x.len()),
            ));
        }
    }

    match algorithm {
        Algorithm::FixedTree => {
            let n = operands.len();
            if n == 0 {
                return Ok(T::zero());
            }
            let chunks = Chunks::new(n, config.chunk_size());
            let workers = num_threads
                .unwrap_or_else(available_parallelism)
                .min(chunks.len());
            let pool = client.thread_pool(Some(workers))?;

            let result = match operands {
                Operands::Unary(x) => fixed_tree_reduce(&pool, chunks, |r| sum_kernel(&x[r])),
                Operands::Binary(x, y) => {
                    fixed_tree_reduce(&pool, chunks, |r| dot_kernel(&x[r.clone()], &y[r]))
                }
            };
            Ok(result)
        }
        Algorithm::Compensated | Algorithm::Exact | Algorithm::TwoLevel => {
            tracing::debug!(%algorithm, op = op.name(), "rejecting unimplemented algorithm");
            Err(Error::not_implemented(algorithm.description()))
        }
    }
}

/// Fixed binary tree reduction
///
/// `reduce_chunk` maps a chunk's index range to its partial result. It is
/// called exactly once per chunk, from any worker, in any order.
pub fn fixed_tree_reduce<T, F>(pool: &ThreadPool, chunks: Chunks, reduce_chunk: F) -> T
where
    T: Element,
    F: Fn(Range<usize>) -> T + Sync,
{
    tracing::debug!(
        num_threads = pool.num_threads(),
        chunk_size = chunks.chunk_size(),
        num_chunks = chunks.len(),
        "fixed-tree reduction"
    );

    let mut partials = vec![T::zero(); chunks.len()];
    pool.parallel_for_slices(&mut partials, |slots, ids, _worker| {
        for (slot, id) in slots.iter_mut().zip(ids) {
            *slot = reduce_chunk(chunks.range(id));
        }
    });

    tree_merge(&mut partials)
}
