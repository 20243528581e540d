//! CPU client for reduction dispatch

use crate::error::Result;
use crate::runtime::cpu::parallel::{PoolCache, ThreadPool};
use crate::runtime::{ParallelismConfig, available_parallelism};
use std::sync::Arc;

/// CPU client for operation dispatch
///
/// The client carries a [`ParallelismConfig`]. A per-call thread count passed
/// to a reduction overrides the configured one; the chunk size always comes
/// from the client.
///
/// Worker threads are built on first use and reused by later calls. Clones
/// share them.
#[derive(Clone, Debug, Default)]
pub struct CpuClient {
    parallelism: ParallelismConfig,
    pools: Arc<PoolCache>,
}

impl CpuClient {
    /// Create a client with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the parallelism configuration
    ///
    /// Invalid values are not rejected here; they surface as
    /// `InvalidArgument` on the next reduction.
    pub fn with_parallelism(mut self, parallelism: ParallelismConfig) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Current parallelism configuration
    #[inline]
    pub fn parallelism(&self) -> ParallelismConfig {
        self.parallelism
    }

    /// Worker pool for an explicit or configured thread count
    ///
    /// `None` with no configured count uses the host's available
    /// parallelism.
    pub fn thread_pool(&self, num_threads: Option<usize>) -> Result<ThreadPool> {
        let num_threads = self.parallelism.effective_num_threads(num_threads)?;
        self.pools.get(num_threads.unwrap_or_else(available_parallelism))
    }
}
