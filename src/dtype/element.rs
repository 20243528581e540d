//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use num_traits::Float;
use std::fmt;

/// Trait for floating point types that reductions operate on
///
/// This trait connects Rust's type system to the runtime dtype tag used in
/// diagnostics. It's implemented for `f32` and `f64`.
///
/// # Bounds
/// - `Send + Sync + 'static` - Partial results cross worker threads
/// - `Pod + Zeroable` - Plain bit patterns (bytemuck), compared bit-for-bit
/// - `Float` - IEEE-754 `+`, `*` and `sqrt` (num-traits)
pub trait Element:
    Float + Pod + Zeroable + Send + Sync + fmt::Debug + fmt::Display + 'static
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Raw IEEE-754 bit pattern, widened to 64 bits
    ///
    /// Two values with equal `to_bits_u64` are bitwise identical, including
    /// the sign of zero and NaN payloads.
    fn to_bits_u64(self) -> u64;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn to_bits_u64(self) -> u64 {
        bytemuck::cast::<f64, u64>(self)
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn to_bits_u64(self) -> u64 {
        u64::from(bytemuck::cast::<f32, u32>(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_distinguish_signed_zero() {
        assert_ne!(0.0f64.to_bits_u64(), (-0.0f64).to_bits_u64());
        assert_ne!(0.0f32.to_bits_u64(), (-0.0f32).to_bits_u64());
    }

    #[test]
    fn test_f32_bits_widen_without_sign_extension() {
        let bits = (-1.5f32).to_bits_u64();
        assert_eq!(bits, u64::from((-1.5f32).to_bits()));
        assert_eq!(bits >> 32, 0);
    }

    #[test]
    fn test_bits_match_std() {
        for v in [0.0f64, -0.0, 1.5, f64::MIN_POSITIVE, f64::INFINITY, f64::NAN] {
            assert_eq!(v.to_bits_u64(), v.to_bits());
            let w = v as f32;
            assert_eq!(w.to_bits_u64(), u64::from(w.to_bits()));
        }
    }

    #[test]
    fn test_dtype_mapping() {
        assert_eq!(<f64 as Element>::DTYPE, DType::F64);
        assert_eq!(<f32 as Element>::DTYPE, DType::F32);
    }
}
