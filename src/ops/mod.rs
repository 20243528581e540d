//! Reduction operations
//!
//! Operations are defined as traits implemented by a client, so the client
//! supplies its [`ParallelismConfig`](crate::runtime::ParallelismConfig) to
//! every call.
//!
//! ```text
//! CpuClient
//!   └── implements ReduceOps
//!         ├── sum    (sum of elements)
//!         ├── dot    (sum of pairwise products)
//!         └── norm2  (sqrt of self dot)
//! ```
//!
//! The free functions [`sum`], [`dot`] and [`norm2`] run the same code path
//! through a shared default [`CpuClient`], so their worker threads are reused
//! across calls.

pub(crate) mod cpu;
mod reduce;
mod traits;

pub use reduce::ReduceOp;
pub use traits::ReduceOps;

use crate::algorithm::Algorithm;
use crate::dtype::Element;
use crate::error::Result;
use crate::runtime::cpu::CpuClient;
use std::sync::LazyLock;

static DEFAULT_CLIENT: LazyLock<CpuClient> = LazyLock::new(CpuClient::new);

/// Sum of `values` with the default client
///
/// See [`ReduceOps::sum`].
pub fn sum<T: Element>(
    values: &[T],
    algorithm: Algorithm,
    num_threads: Option<usize>,
) -> Result<T> {
    DEFAULT_CLIENT.sum(values, algorithm, num_threads)
}

/// Inner product of `x` and `y` with the default client
///
/// See [`ReduceOps::dot`].
pub fn dot<T: Element>(
    x: &[T],
    y: &[T],
    algorithm: Algorithm,
    num_threads: Option<usize>,
) -> Result<T> {
    DEFAULT_CLIENT.dot(x, y, algorithm, num_threads)
}

/// Euclidean norm of `values` with the default client
///
/// See [`ReduceOps::norm2`].
pub fn norm2<T: Element>(
    values: &[T],
    algorithm: Algorithm,
    num_threads: Option<usize>,
) -> Result<T> {
    DEFAULT_CLIENT.norm2(values, algorithm, num_threads)
}
