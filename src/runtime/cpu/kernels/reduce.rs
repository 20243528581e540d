//! Chunk reduction kernels
//!
//! Each kernel reduces one chunk sequentially, strictly in ascending index
//! order, with plain floating-point accumulation starting from zero. No
//! reassociation, no compensation, no widened accumulator: the per-chunk
//! result is a pure function of the chunk's contents.

use crate::dtype::Element;

/// Sum of `values` accumulated left to right
///
/// # Example
///
/// ```
/// use anchor_linalg::runtime::cpu::kernels::sum_kernel;
///
/// assert_eq!(sum_kernel(&[1.0f64, 2.0, 3.0]), 6.0);
/// ```
#[inline]
pub fn sum_kernel<T: Element>(values: &[T]) -> T {
    let mut acc = T::zero();
    for &v in values {
        acc = acc + v;
    }
    acc
}

/// Sum of `x[i] * y[i]` accumulated left to right
///
/// Each product is rounded before it is added; no fused multiply-add is used.
/// Only the first `min(x.len(), y.len())` pairs are read.
#[inline]
pub fn dot_kernel<T: Element>(x: &[T], y: &[T]) -> T {
    let mut acc = T::zero();
    for (&a, &b) in x.iter().zip(y) {
        acc = acc + a * b;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_kernel_matches_sequential_fold() {
        let values = [0.1f64, 0.2, 0.3, 1e16, -1e16, 0.7];
        let expected = values.iter().fold(0.0f64, |acc, &v| acc + v);
        assert_eq!(sum_kernel(&values).to_bits(), expected.to_bits());
    }

    #[test]
    fn test_sum_kernel_order_is_left_to_right() {
        // (2^53 + 1) rounds back to 2^53, so left-to-right loses both ones.
        let big = 9_007_199_254_740_992.0f64;
        assert_eq!(sum_kernel(&[big, 1.0, 1.0, -big]), 0.0);
        assert_eq!(sum_kernel(&[1.0, 1.0, big, -big]), 2.0);
    }

    #[test]
    fn test_sum_kernel_empty_is_zero() {
        assert_eq!(sum_kernel::<f32>(&[]), 0.0);
    }

    #[test]
    fn test_dot_kernel_basic() {
        assert_eq!(dot_kernel(&[1.0f64, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(dot_kernel(&[1.5f32, -2.0], &[2.0, 0.25]), 2.5);
    }

    #[test]
    fn test_dot_kernel_matches_sequential_fold() {
        let x = [0.1f32, 0.7, 1.3, -2.9];
        let y = [3.3f32, 0.01, 7.5, 0.6];
        let expected = x.iter().zip(&y).fold(0.0f32, |acc, (&a, &b)| acc + a * b);
        assert_eq!(dot_kernel(&x, &y).to_bits(), expected.to_bits());
    }

    #[test]
    fn test_nan_propagates() {
        assert!(sum_kernel(&[1.0f64, f64::NAN, 2.0]).is_nan());
        assert!(dot_kernel(&[1.0f64, 0.0], &[1.0, f64::INFINITY]).is_nan());
    }
}
