//! Reduction operation types
//!
//! This module contains helper types for reduction operations.
//! The actual operations are defined in the [`ReduceOps`](crate::ops::ReduceOps) trait.

/// Reduction operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReduceOp {
    /// Sum of elements
    Sum,
    /// Sum of pairwise products
    Dot,
}

impl ReduceOp {
    /// Lowercase operation name used in log fields
    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Dot => "dot",
        }
    }
}
