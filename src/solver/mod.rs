pub mod constants;
mod config;
mod core;
mod errors;
mod pool;
mod report;

pub use config::SolverConfig;
pub use core::CountdownSolver;
pub use errors::SolverError;
pub use pool::{WorkerPool, WorkerSlot};
pub use report::{NoProgress, Progress, SearchObserver, SearchOutcome, SearchReport, Solution};

#[cfg(test)]
mod tests;
