use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::engine::{Hit, PairSplit};
use crate::solver::errors::SolverError;

/// One worker's result for one pair-split.
#[derive(Debug, Clone, Default)]
pub struct WorkerSlot {
    pub tried: u64,
    pub hit: Option<Hit>,
}

/// Fixed-size fan-out of search workers.
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// # Errors
    ///
    /// Returns an error if the underlying threads cannot be started.
    pub fn new(workers: usize) -> Result<Self, SolverError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("countdown-worker-{}", i))
            .build()?;
        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Sweep every split of the batch in parallel. Slots come back in batch
    /// order regardless of which worker finished first.
    pub fn run_batch<F>(&self, batch: &[PairSplit], sweep: F) -> Vec<WorkerSlot>
    where
        F: Fn(&PairSplit) -> WorkerSlot + Sync + Send,
    {
        self.pool.install(|| batch.par_iter().map(|split| sweep(split)).collect())
    }
}
