use thiserror::Error;

/// Errors raised while setting up a game
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Large number count must be between 0 and 4, got {0}")]
    InvalidLargeCount(i64),
    #[error("Expected exactly 6 numbers, got {0}")]
    WrongNumberCount(usize),
    #[error("{0} is not in the large or small pool")]
    NotInPool(u64),
    #[error("{value} appears {count} times but the pools only hold {available}")]
    PoolExhausted {
        value: u64,
        count: usize,
        available: usize,
    },
    #[error("Target must be between 101 and 999, got {0}")]
    TargetOutOfRange(i64),
    #[error("Not a whole number: '{0}'")]
    NotAnInteger(String),
    #[error("Input closed before the game was set up")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether asking again could fix the input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::InputClosed | GameError::Io(_))
    }
}
