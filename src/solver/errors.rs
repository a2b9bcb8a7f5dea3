use thiserror::Error;

use crate::game::GameError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Could not start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("Invalid game: {0}")]
    Game(#[from] GameError),
}
