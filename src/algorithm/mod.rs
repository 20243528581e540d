//! Reduction algorithm selection
//!
//! Every algorithm shares one contract: for fixed input data, fixed length and
//! fixed chunk size, the result is bit-identical for every thread count. The
//! algorithms differ in how much work they spend on numerical accuracy.
//!
//! | Algorithm     | Combination strategy                      | Status          |
//! |---------------|-------------------------------------------|-----------------|
//! | `FixedTree`   | Fixed chunks, sequential pairwise merge   | implemented     |
//! | `Compensated` | Hierarchical compensated summation        | not implemented |
//! | `Exact`       | Superaccumulator-based exact accumulation | not implemented |
//! | `TwoLevel`    | Two-level hierarchical reduction          | not implemented |
//!
//! Selecting an unimplemented algorithm fails with
//! [`Error::NotImplemented`](crate::error::Error::NotImplemented); codes and
//! names outside the enumeration fail with
//! [`Error::InvalidArgument`](crate::error::Error::InvalidArgument).

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Reduction algorithm
///
/// The discriminants are the stable numeric codes accepted by
/// [`Algorithm::from_code`] and the [`raw`](crate::raw) entry points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Algorithm {
    /// Fixed binary tree reduction over thread-count-independent chunks
    #[default]
    FixedTree = 0,
    /// Hierarchical compensated summation
    Compensated = 1,
    /// Exact accumulation with superaccumulators
    Exact = 2,
    /// Two-level hierarchical reduction
    TwoLevel = 3,
}

impl Algorithm {
    /// All algorithms, in code order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::FixedTree,
        Algorithm::Compensated,
        Algorithm::Exact,
        Algorithm::TwoLevel,
    ];

    /// Stable numeric code of this algorithm
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Look up an algorithm by its numeric code
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(Self::FixedTree),
            1 => Ok(Self::Compensated),
            2 => Ok(Self::Exact),
            3 => Ok(Self::TwoLevel),
            other => Err(Error::invalid_argument(
                "algorithm",
                format!("unknown algorithm code {other}"),
            )),
        }
    }

    /// Snake-case name, accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FixedTree => "fixed_tree",
            Self::Compensated => "compensated",
            Self::Exact => "exact",
            Self::TwoLevel => "two_level",
        }
    }

    /// Human-readable description, used in `NotImplemented` errors
    pub const fn description(self) -> &'static str {
        match self {
            Self::FixedTree => "fixed binary tree reduction",
            Self::Compensated => "hierarchical compensated summation",
            Self::Exact => "exact accumulation with superaccumulators",
            Self::TwoLevel => "two-level hierarchical reduction",
        }
    }
}

impl TryFrom<u32> for Algorithm {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self> {
        Self::from_code(code)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|algo| algo.name() == normalized)
            .ok_or_else(|| {
                Error::invalid_argument("algorithm", format!("unknown algorithm '{s}'"))
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
