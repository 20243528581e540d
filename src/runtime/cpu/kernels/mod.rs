//! CPU kernel implementations
//!
//! This module provides low-level compute kernels for CPU operations.
//! Kernels are generic over `T: Element` and operate on one chunk at a time.

pub mod reduce;

pub use reduce::{dot_kernel, sum_kernel};
