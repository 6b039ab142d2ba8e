//! Parallel batch hashing.
//!
//! Every digest is independent, so batches fan out over a rayon pool with no
//! coordination. Output order always matches input order.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::crypto::{Address, AddressError};
use crate::keccak::keccak256;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Thread count must be at least 1")]
    NoThreads,

    #[error("Failed to build thread pool: {0}")]
    PoolBuild(#[from] ThreadPoolBuildError),
}

/// Hashes batches of independent inputs on a dedicated thread pool.
pub struct BatchHasher {
    pool: ThreadPool,
    num_threads: usize,
}

impl BatchHasher {
    /// Creates a hasher backed by `num_threads` worker threads.
    pub fn new(num_threads: usize) -> Result<Self, BatchError> {
        if num_threads == 0 {
            return Err(BatchError::NoThreads);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|id| format!("keccak-worker-{}", id))
            .build()?;

        tracing::debug!(num_threads, "batch hasher pool started");

        Ok(Self { pool, num_threads })
    }

    /// Creates a hasher with one thread per CPU core.
    pub fn with_cpu_count() -> Result<Self, BatchError> {
        Self::new(num_cpus::get())
    }

    /// Returns the number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Keccak-256 of every input.
    pub fn digest_all<T>(&self, inputs: &[T]) -> Vec<[u8; 32]>
    where
        T: AsRef<[u8]> + Sync,
    {
        tracing::trace!(batch_size = inputs.len(), "hashing batch");
        self.pool
            .install(|| inputs.par_iter().map(|input| keccak256(input.as_ref())).collect())
    }

    /// Derives the address of every hex public key. A bad key only fails its
    /// own slot.
    pub fn addresses<T>(&self, public_keys: &[T]) -> Vec<Result<Address, AddressError>>
    where
        T: AsRef<str> + Sync,
    {
        tracing::trace!(batch_size = public_keys.len(), "deriving addresses");
        self.pool.install(|| {
            public_keys
                .par_iter()
                .map(|key| Address::from_public_key_hex(key.as_ref()))
                .collect()
        })
    }
}
