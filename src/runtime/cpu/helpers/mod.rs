//! Helper functions for CPU operations

pub mod reduce;

pub(crate) use reduce::{Operands, reduce_impl};
