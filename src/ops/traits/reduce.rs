//! Reduction operations trait.

use crate::algorithm::Algorithm;
use crate::dtype::Element;
use crate::error::Result;

/// Reproducible reductions over contiguous slices
///
/// Every method validates its arguments before reading any element, in this
/// order: thread count, configured chunk size, operand lengths, algorithm
/// support. Empty input returns zero.
///
/// `num_threads = None` uses the client's configured thread count, or the
/// host's available parallelism when none is configured. For a fixed
/// algorithm and chunk size, the result bits do not depend on the thread
/// count.
pub trait ReduceOps {
    /// Sum of all elements
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `num_threads` is `Some(0)`, or if it is `None`
    ///   and the client is configured with zero threads
    /// - `InvalidArgument` if the client is configured with a zero chunk size
    /// - `NotImplemented` for any algorithm other than [`Algorithm::FixedTree`]
    ///
    /// # Example
    ///
    /// ```
    /// # use anchor_linalg::prelude::*;
    /// let client = CpuClient::new();
    /// let total = client.sum(&[1.0f64, 2.0, 3.0, 4.0, 5.0], Algorithm::FixedTree, Some(2))?;
    /// assert_eq!(total, 15.0);
    /// # Ok::<(), anchor_linalg::error::Error>(())
    /// ```
    fn sum<T: Element>(
        &self,
        values: &[T],
        algorithm: Algorithm,
        num_threads: Option<usize>,
    ) -> Result<T>;

    /// Inner product `sum(x[i] * y[i])`
    ///
    /// # Errors
    ///
    /// As [`ReduceOps::sum`], plus `InvalidArgument` when `x` and `y` differ
    /// in length.
    fn dot<T: Element>(
        &self,
        x: &[T],
        y: &[T],
        algorithm: Algorithm,
        num_threads: Option<usize>,
    ) -> Result<T>;

    /// Euclidean norm, exactly `sqrt(dot(values, values))`
    ///
    /// No scaling is applied, so very large or very small inputs may
    /// overflow to infinity or underflow to zero.
    fn norm2<T: Element>(
        &self,
        values: &[T],
        algorithm: Algorithm,
        num_threads: Option<usize>,
    ) -> Result<T>;
}
