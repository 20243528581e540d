//! CPU runtime implementation
//!
//! The CPU runtime reduces host slices with a fork-join worker pool. Without
//! the `rayon` feature every pool runs its sub-ranges sequentially on the
//! calling thread; results are identical either way.

mod client;
pub(crate) mod helpers;
pub mod kernels;
pub mod parallel;

pub use client::CpuClient;
pub use helpers::reduce::{
    ChunkRanges, Chunks, chunk_count, chunk_range, fixed_tree_reduce, tree_merge,
};
pub use parallel::{ThreadPool, split_range};
