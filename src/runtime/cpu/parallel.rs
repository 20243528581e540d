//! Fork-join work distribution
//!
//! [`split_range`] divides an index range into one contiguous piece per
//! worker and [`ThreadPool`] runs a closure over each piece, returning once
//! every piece has finished. The split depends on the worker count, so it
//! only decides *who* computes a unit of work, never *what* the unit is.

use crate::error::{Error, Result};
use std::ops::Range;
#[cfg(feature = "rayon")]
use std::sync::{Arc, Mutex, PoisonError};

/// Split `range` into `parts` contiguous, non-overlapping sub-ranges.
///
/// The first `range.len() % parts` sub-ranges receive one extra element, so
/// lengths differ by at most one. Every index is covered exactly once; when
/// `parts` exceeds the range length the trailing sub-ranges are empty.
///
/// # Panics
///
/// Panics if `parts` is zero.
pub fn split_range(range: Range<usize>, parts: usize) -> Vec<Range<usize>> {
    assert!(parts > 0, "split_range requires at least one part");

    let len = range.end.saturating_sub(range.start);
    let base = len / parts;
    let remainder = len % parts;

    let mut out = Vec::with_capacity(parts);
    let mut start = range.start;
    for worker in 0..parts {
        let size = base + usize::from(worker < remainder);
        out.push(start..start + size);
        start += size;
    }
    out
}

/// Upper bound on the OS threads backing one pool
///
/// A pool may have more workers than this. Extra workers run as queued tasks
/// on the backing threads.
pub const MAX_POOL_THREADS: usize = 64;

/// Fixed-size pool of workers for fork-join execution
///
/// With the `rayon` feature the workers run on a rayon thread pool of
/// `min(num_threads, MAX_POOL_THREADS)` threads. Without it, work runs on the
/// calling thread in sub-range order.
pub struct ThreadPool {
    num_threads: usize,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl ThreadPool {
    /// Create a pool with `num_threads` workers and its own backing threads.
    ///
    /// A single-worker pool never spawns threads.
    pub fn new(num_threads: usize) -> Result<Self> {
        validate_workers(num_threads)?;

        #[cfg(feature = "rayon")]
        {
            let pool = match backing_threads(num_threads) {
                1 => None,
                threads => Some(Arc::new(build_rayon_pool(threads)?)),
            };
            Ok(Self { num_threads, pool })
        }

        #[cfg(not(feature = "rayon"))]
        Ok(Self { num_threads })
    }

    /// Number of workers in this pool
    #[inline]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Run `f(sub_range, worker_id)` once per worker over `range` and wait
    /// for all of them.
    ///
    /// `range` is divided with [`split_range`]; `worker_id` is the index of
    /// the sub-range in `0..num_threads`. Sub-ranges may be empty.
    pub fn parallel_for<F>(&self, range: Range<usize>, f: F)
    where
        F: Fn(Range<usize>, usize) + Sync,
    {
        let parts = split_range(range, self.num_threads);

        #[cfg(feature = "rayon")]
        if let Some(pool) = &self.pool {
            let f = &f;
            pool.scope(|s| {
                for (worker, part) in parts.into_iter().enumerate() {
                    s.spawn(move |_| f(part, worker));
                }
            });
            return;
        }

        for (worker, part) in parts.into_iter().enumerate() {
            f(part, worker);
        }
    }

    /// Run `f(slots, sub_range, worker_id)` once per worker, where `slots` is
    /// the disjoint piece of `out` covering `sub_range`, and wait for all of
    /// them.
    ///
    /// Each worker writes only its own slots, so no synchronization is needed
    /// beyond the join.
    pub fn parallel_for_slices<T, F>(&self, out: &mut [T], f: F)
    where
        T: Send,
        F: Fn(&mut [T], Range<usize>, usize) + Sync,
    {
        let parts = split_range(0..out.len(), self.num_threads);
        let slices = carve(out, &parts);

        #[cfg(feature = "rayon")]
        if let Some(pool) = &self.pool {
            let f = &f;
            pool.scope(|s| {
                for (worker, (slots, part)) in slices.into_iter().zip(parts).enumerate() {
                    s.spawn(move |_| f(slots, part, worker));
                }
            });
            return;
        }

        for (worker, (slots, part)) in slices.into_iter().zip(parts).enumerate() {
            f(slots, part, worker);
        }
    }
}

impl std::fmt::Debug for ThreadPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadPool")
            .field("num_threads", &self.num_threads)
            .finish()
    }
}

/// Reusable backing threads for [`ThreadPool`]s
///
/// Keeps the most recently built rayon pool and hands it out again while the
/// backing thread count stays the same.
#[derive(Default)]
pub(crate) struct PoolCache {
    #[cfg(feature = "rayon")]
    slot: Mutex<Option<Arc<rayon::ThreadPool>>>,
}

impl PoolCache {
    /// Pool with `num_threads` workers, reusing cached backing threads
    pub(crate) fn get(&self, num_threads: usize) -> Result<ThreadPool> {
        validate_workers(num_threads)?;

        #[cfg(feature = "rayon")]
        {
            let threads = backing_threads(num_threads);
            if threads == 1 {
                return Ok(ThreadPool {
                    num_threads,
                    pool: None,
                });
            }

            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            let pool = match slot.as_ref() {
                Some(pool) if pool.current_num_threads() == threads => Arc::clone(pool),
                _ => {
                    let pool = Arc::new(build_rayon_pool(threads)?);
                    *slot = Some(Arc::clone(&pool));
                    pool
                }
            };
            Ok(ThreadPool {
                num_threads,
                pool: Some(pool),
            })
        }

        #[cfg(not(feature = "rayon"))]
        Ok(ThreadPool { num_threads })
    }
}

impl std::fmt::Debug for PoolCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolCache").finish_non_exhaustive()
    }
}

fn validate_workers(num_threads: usize) -> Result<()> {
    if num_threads == 0 {
        return Err(Error::invalid_argument("num_threads", "must be at least 1, got 0"));
    }
    Ok(())
}

#[cfg(feature = "rayon")]
fn backing_threads(num_threads: usize) -> usize {
    num_threads.min(MAX_POOL_THREADS)
}

#[cfg(feature = "rayon")]
fn build_rayon_pool(threads: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("anchor-worker-{i}"))
        .build()
        .map_err(|e| Error::Internal(format!("failed to build thread pool: {e}")))
}

/// Cut `out` into consecutive mutable pieces with the lengths of `parts`.
fn carve<'a, T>(mut out: &'a mut [T], parts: &[Range<usize>]) -> Vec<&'a mut [T]> {
    let mut slices = Vec::with_capacity(parts.len());
    for part in parts {
        let (head, tail) = std::mem::take(&mut out).split_at_mut(part.len());
        slices.push(head);
        out = tail;
    }
    slices
}
