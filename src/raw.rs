//! Pointer-and-length entry points
//!
//! These functions serve callers that hold raw `(pointer, length)` pairs and
//! untyped arguments. They check what a slice cannot express, convert, and
//! then run the same code path as [`crate::ops`]:
//!
//! 1. a null pointer is an absent array (`InvalidArgument`)
//! 2. `Some(t)` with `t < 1` is an invalid thread count (`InvalidArgument`)
//! 3. an algorithm code outside [`Algorithm`] is invalid (`InvalidArgument`)
//!
//! `None` resolves the thread count from the host's available parallelism.

use crate::algorithm::Algorithm;
use crate::dtype::Element;
use crate::error::{Error, Result};

/// Sum of `n` elements starting at `values`
///
/// # Safety
///
/// If `values` is non-null it must be aligned for `T` and valid for reads of
/// `n` elements, and the memory must not be mutated for the duration of the
/// call.
///
/// # Example
///
/// ```
/// let data = [1.0f64, 2.0, 3.0, 4.0, 5.0];
/// let total = unsafe { anchor_linalg::raw::sum(data.as_ptr(), data.len(), 0, Some(2)) }?;
/// assert_eq!(total, 15.0);
/// # Ok::<(), anchor_linalg::error::Error>(())
/// ```
pub unsafe fn sum<T: Element>(
    values: *const T,
    n: usize,
    algorithm: u32,
    num_threads: Option<i32>,
) -> Result<T> {
    require_non_null(values, "values")?;
    let (algorithm, num_threads) = convert_args(algorithm, num_threads)?;
    // SAFETY: non-null checked above; validity for `n` reads is the caller's contract.
    let values = unsafe { std::slice::from_raw_parts(values, n) };
    crate::ops::sum(values, algorithm, num_threads)
}

/// Inner product of `n` element pairs from `x` and `y`
///
/// # Safety
///
/// Both pointers, when non-null, must satisfy the requirements of
/// [`sum`] for `n` elements.
pub unsafe fn dot<T: Element>(
    x: *const T,
    y: *const T,
    n: usize,
    algorithm: u32,
    num_threads: Option<i32>,
) -> Result<T> {
    require_non_null(x, "x")?;
    require_non_null(y, "y")?;
    let (algorithm, num_threads) = convert_args(algorithm, num_threads)?;
    // SAFETY: both non-null; validity for `n` reads is the caller's contract.
    let (x, y) = unsafe { (std::slice::from_raw_parts(x, n), std::slice::from_raw_parts(y, n)) };
    crate::ops::dot(x, y, algorithm, num_threads)
}

/// Euclidean norm of `n` elements starting at `values`
///
/// # Safety
///
/// Same requirements as [`sum`].
pub unsafe fn norm2<T: Element>(
    values: *const T,
    n: usize,
    algorithm: u32,
    num_threads: Option<i32>,
) -> Result<T> {
    require_non_null(values, "values")?;
    let (algorithm, num_threads) = convert_args(algorithm, num_threads)?;
    // SAFETY: see `sum`.
    let values = unsafe { std::slice::from_raw_parts(values, n) };
    crate::ops::norm2(values, algorithm, num_threads)
}

fn require_non_null<T>(ptr: *const T, arg: &'static str) -> Result<()> {
    if ptr.is_null() {
        return Err(Error::invalid_argument(arg, "array is null"));
    }
    Ok(())
}

/// Thread count first, then algorithm code.
fn convert_args(algorithm: u32, num_threads: Option<i32>) -> Result<(Algorithm, Option<usize>)> {
    let num_threads = match num_threads {
        None => None,
        Some(t) if t >= 1 => Some(t as usize),
        Some(t) => {
            return Err(Error::invalid_argument(
                "num_threads",
                format!("must be at least 1, got {t}"),
            ));
        }
    };
    let algorithm = Algorithm::from_code(algorithm)?;
    Ok((algorithm, num_threads))
}
