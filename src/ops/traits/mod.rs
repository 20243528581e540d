//! Operation traits
//!
//! Implementations are in the backend-specific modules (`cpu/`).

mod reduce;

pub use reduce::ReduceOps;
