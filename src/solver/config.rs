use std::time::Duration;

use crate::engine::SearchMode;
use crate::solver::constants::{DEFAULT_TIME_LIMIT, DEFAULT_WORKERS};

/// Configuration for a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Worker threads, and the number of pair-splits dispatched per batch.
    pub workers: usize,
    /// Wall-clock budget for one game.
    pub time_limit: Duration,
    pub mode: SearchMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            time_limit: DEFAULT_TIME_LIMIT,
            mode: SearchMode::default(),
        }
    }
}
