//! # anchor-linalg
//!
//! **Bitwise-reproducible parallel reductions for Rust.**
//!
//! anchor-linalg computes `sum`, `dot` and `norm2` over `f32` and `f64`
//! slices on a multi-threaded CPU pool, and returns the same bits for any
//! thread count on the same input.
//!
//! ## How
//!
//! - **Fixed chunking**: the input is cut into chunks whose boundaries depend
//!   only on the length and the chunk size
//! - **Sequential chunk kernels**: each chunk is reduced left to right
//! - **Fixed tree merge**: per-chunk partials are combined pairwise in index
//!   order on the calling thread
//!
//! Threads only decide who computes which chunk, never the arithmetic order.
//!
//! ## Quick Start
//!
//! ```rust
//! use anchor_linalg::prelude::*;
//!
//! let x = [1.0f64, 2.0, 3.0];
//! let y = [4.0f64, 5.0, 6.0];
//!
//! let d = anchor_linalg::dot(&x, &y, Algorithm::FixedTree, None)?;
//! assert_eq!(d, 32.0);
//!
//! let client = CpuClient::new().with_parallelism(ParallelismConfig::new(Some(4), None));
//! assert_eq!(client.norm2(&[3.0f32, 4.0], Algorithm::FixedTree, None)?, 5.0);
//! # Ok::<(), anchor_linalg::error::Error>(())
//! ```
//!
//! ## Algorithms
//!
//! Only [`Algorithm::FixedTree`] has a numeric procedure. `Compensated`,
//! `Exact` and `TwoLevel` are reserved and return
//! [`Error::NotImplemented`](error::Error::NotImplemented).
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded CPU operations. Without it every pool
//!   runs on the calling thread and produces identical results.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod raw;
pub mod runtime;

pub use ops::{dot, norm2, sum};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::Algorithm;
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::ReduceOps;
    pub use crate::runtime::ParallelismConfig;
    pub use crate::runtime::cpu::CpuClient;
}
