//! Game setup: tile pools, sampling, validation and interactive prompts

mod errors;
mod numbers;
mod pools;
mod prompt;

pub use errors::GameError;
pub use numbers::{SourceNumbers, TARGET_MAX, TARGET_MIN, Target};
pub use pools::{
    LARGE_POOL, MAX_LARGE, SMALL_POOL, draw_numbers, draw_target, pool_multiplicity,
    validate_large_count,
};
pub use prompt::{MANUAL_ESCAPE, Prompter, SetupChoice};

#[cfg(test)]
mod tests;
