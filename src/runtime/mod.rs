//! Execution runtime for reductions
//!
//! The runtime owns everything that may vary between calls without changing
//! the result bits: how many workers run, and which worker handles which
//! chunk. Chunk boundaries and merge order live in the reduction helpers and
//! never consult this module's thread counts.
//!
//! ```text
//! ParallelismConfig (per client, overridable per call)
//! ├── num_threads  -> worker count (default: host available parallelism)
//! └── chunk_size   -> partition granularity (default: DEFAULT_CHUNK_SIZE)
//! ```

pub mod cpu;

use crate::error::{Error, Result};
use std::num::NonZeroUsize;

/// Number of elements per chunk when no chunk size is configured
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Parallelism configuration for a client
///
/// Both fields are optional. `num_threads = None` resolves to the host's
/// available parallelism at call time; `chunk_size = None` resolves to
/// [`DEFAULT_CHUNK_SIZE`].
///
/// Changing `num_threads` never changes a result. Changing `chunk_size`
/// changes the partition and therefore may change the result bits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParallelismConfig {
    /// Worker count, `None` for the host default
    pub num_threads: Option<usize>,
    /// Elements per chunk, `None` for [`DEFAULT_CHUNK_SIZE`]
    pub chunk_size: Option<usize>,
}

impl ParallelismConfig {
    /// Create a configuration with an optional thread count and chunk size
    pub const fn new(num_threads: Option<usize>, chunk_size: Option<usize>) -> Self {
        Self {
            num_threads,
            chunk_size,
        }
    }

    /// Thread count that applies to a call: the per-call value if given,
    /// otherwise the configured one
    ///
    /// Only the value actually used is validated, so a per-call count
    /// overrides a configured zero. `None` means the host default.
    pub fn effective_num_threads(&self, per_call: Option<usize>) -> Result<Option<usize>> {
        let num_threads = per_call.or(self.num_threads);
        validate_num_threads(num_threads)?;
        Ok(num_threads)
    }

    /// Fails with `InvalidArgument` when the chunk size is supplied as zero
    pub fn validate_chunk_size(&self) -> Result<()> {
        if self.chunk_size == Some(0) {
            return Err(Error::invalid_argument("chunk_size", "must be at least 1, got 0"));
        }
        Ok(())
    }

    /// Effective chunk size
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }
}

/// Reject an explicitly supplied thread count below one
fn validate_num_threads(num_threads: Option<usize>) -> Result<()> {
    match num_threads {
        Some(0) => Err(Error::invalid_argument("num_threads", "must be at least 1, got 0")),
        _ => Ok(()),
    }
}

/// Host's available hardware parallelism
///
/// Queried on every call and never cached, so calls stay independent of each
/// other. Falls back to 1 when the host cannot report it.
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
