//! CPU implementation of operations.

pub mod reduce;
