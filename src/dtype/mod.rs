//! Data type system for reproducible reductions
//!
//! This module provides the `DType` tag for the supported element types and
//! the [`Element`] trait that maps Rust types onto it.

mod element;

pub use element::Element;

use std::fmt;

/// Element types supported by the reduction engine
///
/// # Discriminant Values (Serialization Stability)
///
/// Discriminants follow the float range of a wider dtype numbering scheme
/// (F64=0, F32=1) and are never changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
}

impl DType {
    /// Short lowercase name, as used in log fields
    pub const fn name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_display() {
        assert_eq!(DType::F64.to_string(), "f64");
        assert_eq!(format!("{}", DType::F32), "f32");
    }
}
